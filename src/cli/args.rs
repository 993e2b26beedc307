use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate a WireGuard AllowedIPs list from IPv4 addresses and hostnames"
)]
pub struct Args {
    /// Path to settings file (TOML)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Allow-list file: one IPv4 address or hostname per line, '#' comments
    #[arg(value_name = "ALLOWED_FILE")]
    pub allowed_file: PathBuf,

    /// WireGuard config to print with its AllowedIPs lines replaced
    #[arg(value_name = "WG_CONFIG")]
    pub wg_config: Option<PathBuf>,
}
