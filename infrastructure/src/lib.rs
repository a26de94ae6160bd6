//! Infrastructure layer for math-council
//!
//! Adapters that connect the application core to the outside world: the
//! OpenRouter HTTP gateway and the figment-based configuration loader.

pub mod config;
pub mod openrouter;

pub use config::{ConfigError, ConfigLoader, FileConfig, resolve_credential};
pub use openrouter::OpenRouterGateway;
