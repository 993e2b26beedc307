use thiserror::Error;

use std::{path::PathBuf, process::ExitStatus};

#[derive(Debug, Error)]
pub enum AllowedIpsError {
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid entry (not an IPv4 address or hostname): {entry}")]
    InvalidEntry { line: usize, entry: String },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to run {command}: {source}")]
    ResolverSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}{}", stderr_suffix(.stderr))]
    ResolverExit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
