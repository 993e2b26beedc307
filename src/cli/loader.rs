use std::path::PathBuf;

use crate::error::AllowedIpsError;

use super::args::Args;
use super::config::ConfigFile;

/// Where the finished allow-list goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the comma-joined list
    List,
    /// Print this WireGuard config with the field lines replaced
    Substitute(PathBuf),
}

/// Everything a run needs, resolved from arguments and the settings file
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub allowed_file: PathBuf,
    pub mode: OutputMode,
    pub config: ConfigFile,
}

/// Load and merge settings from command line arguments and config file
pub struct SettingsLoader;

impl SettingsLoader {
    pub fn load(args: &Args) -> Result<RunSettings, AllowedIpsError> {
        let config = match args.config.as_ref() {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let mode = match args.wg_config.as_ref() {
            Some(path) => OutputMode::Substitute(path.clone()),
            None => OutputMode::List,
        };

        Ok(RunSettings {
            allowed_file: args.allowed_file.clone(),
            mode,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_list_mode_with_defaults() {
        let args = Args {
            config: None,
            allowed_file: PathBuf::from("allowed.txt"),
            wg_config: None,
        };

        let settings = SettingsLoader::load(&args).unwrap();
        assert_eq!(settings.mode, OutputMode::List);
        assert_eq!(settings.config, ConfigFile::default());
    }

    #[test]
    fn load_substitute_mode_with_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "[template]\nfield = \"Peers\"\n").unwrap();

        let args = Args {
            config: Some(tmp.path().to_path_buf()),
            allowed_file: PathBuf::from("allowed.txt"),
            wg_config: Some(PathBuf::from("wg0.conf")),
        };

        let settings = SettingsLoader::load(&args).unwrap();
        assert_eq!(
            settings.mode,
            OutputMode::Substitute(PathBuf::from("wg0.conf"))
        );
        assert_eq!(settings.config.template.field, "Peers");
    }
}
