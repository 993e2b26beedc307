use std::{
    net::Ipv4Addr,
    process::{Command, Stdio},
};

#[cfg(test)]
use mockall::automock;

use super::parser::parse_literal_address;
use crate::{cli::ResolverConfig, error::AllowedIpsError};

/// DNS resolver abstraction for testing
#[cfg_attr(test, automock)]
pub trait DnsResolver {
    /// Resolve a domain name to zero or more IPv4 addresses
    fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, AllowedIpsError>;
}

/// Resolver that shells out to a `dig +short` style lookup command
#[derive(Debug, Clone)]
pub struct CommandResolver {
    command: String,
    args: Vec<String>,
}

impl CommandResolver {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

impl DnsResolver for CommandResolver {
    /// Run `<command> <args...> <domain>` and collect the IPv4 answers
    ///
    /// The child is awaited synchronously; there is no timeout. A spawn failure
    /// or a non-zero exit status is an error, while an answer set without any
    /// IPv4 lines is an empty `Vec`.
    fn resolve(&self, domain: &str) -> Result<Vec<Ipv4Addr>, AllowedIpsError> {
        log::debug!("Resolving {} via {} {:?}", domain, self.command, self.args);

        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(domain)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| AllowedIpsError::ResolverSpawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AllowedIpsError::ResolverExit {
                command: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let addrs = parse_short_answers(&String::from_utf8_lossy(&output.stdout));
        log::debug!("{} resolved to {} IPv4 address(es)", domain, addrs.len());
        Ok(addrs)
    }
}

/// Extract IPv4 answers from `dig +short` output
///
/// CNAME targets and every other non-address line are skipped.
pub fn parse_short_answers(stdout: &str) -> Vec<Ipv4Addr> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_literal_address)
        .collect()
}
