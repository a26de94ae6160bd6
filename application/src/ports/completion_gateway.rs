//! Completion gateway port
//!
//! Defines the interface for issuing one completion request to an
//! external model service. Agents keep no state between calls, so the
//! port is a single-shot `complete`, not a session.

use async_trait::async_trait;
use council_domain::ModelId;
use thiserror::Error;

/// Errors that can occur while talking to the completion service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Invalid API credential: {0}")]
    InvalidCredential(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Empty reply from model")]
    EmptyReply,

    #[error("Timeout")]
    Timeout,
}

/// Gateway for model completions
///
/// This port defines how the application layer reaches the external
/// completion service. Implementations (adapters) live in the
/// infrastructure layer; tests use scripted fakes.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue exactly one completion request and return the raw reply text.
    async fn complete(
        &self,
        model: &ModelId,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError>;
}
