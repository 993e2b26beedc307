use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::AllowedIpsError;

/// Field whose lines are replaced in the WireGuard config
pub const DEFAULT_FIELD: &str = "AllowedIPs";
/// Lookup command used to resolve hostnames
pub const DEFAULT_RESOLVER_COMMAND: &str = "dig";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Executable invoked as `<command> <args...> <hostname>`
    #[serde(default = "default_resolver_command")]
    pub command: String,
    /// Arguments placed before the hostname
    #[serde(default = "default_resolver_args")]
    pub args: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            command: default_resolver_command(),
            args: default_resolver_args(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TemplateConfig {
    /// Prefix that selects the lines to replace (raw prefix match after trimming)
    #[serde(default = "default_field")]
    pub field: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
        }
    }
}

fn default_resolver_command() -> String {
    DEFAULT_RESOLVER_COMMAND.to_string()
}

fn default_resolver_args() -> Vec<String> {
    vec!["+short".to_string()]
}

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}

impl ConfigFile {
    /// Load configuration file
    pub fn load(path: &Path) -> Result<Self, AllowedIpsError> {
        let content = fs::read_to_string(path).map_err(|source| AllowedIpsError::FileOpen {
            path: PathBuf::from(path),
            source,
        })?;
        toml::from_str(&content).map_err(|source| AllowedIpsError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }
}
