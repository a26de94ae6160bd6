//! Configuration loading with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving configuration
///
/// These are the only errors that abort a run before any network
/// activity starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "OpenRouter API key is not set. Pass --api-key, set OPENROUTER_API_KEY, \
         or add api_key to council.toml"
    )]
    MissingCredential,

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MATH_COUNCIL_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./council.toml` or `./.council.toml`
    /// 4. Global: `~/.config/math-council/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["council.toml", ".council.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("MATH_COUNCIL_").split("__"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// The global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("math-council").join("config.toml"))
    }
}

/// Resolve the API credential from the available sources.
///
/// Priority: explicit flag > configuration (file or `MATH_COUNCIL_API_KEY`)
/// > plain `OPENROUTER_API_KEY` environment variable. Blank values count
/// as unset. The credential is always passed onward explicitly; nothing
/// downstream reads the environment.
pub fn resolve_credential(
    explicit: Option<String>,
    config: &FileConfig,
) -> Result<String, ConfigError> {
    explicit
        .or_else(|| config.api_key.clone())
        .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingCredential)
}
