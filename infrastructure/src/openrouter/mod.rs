//! OpenRouter adapter: the council's one outbound integration.

pub mod gateway;
pub mod protocol;

pub use gateway::{OPENROUTER_BASE_URL, OpenRouterGateway};
