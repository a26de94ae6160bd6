//! Configuration loading: TOML files, environment, defaults.

pub mod file_config;
pub mod loader;

pub use file_config::{ConsensusSection, FileConfig};
pub use loader::{ConfigError, ConfigLoader, resolve_credential};
