pub mod args;
pub mod config;
pub mod loader;

pub use args::Args;
pub use config::{ConfigFile, ResolverConfig, TemplateConfig};
pub use loader::{OutputMode, RunSettings, SettingsLoader};
