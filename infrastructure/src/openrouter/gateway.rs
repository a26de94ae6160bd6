//! OpenRouter gateway adapter
//!
//! Implements the [`CompletionGateway`] port over the OpenRouter
//! chat-completions HTTP API. One outbound request per `complete` call,
//! no retries, no state between calls.

use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use council_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use council_domain::ModelId;
use tracing::debug;

/// Default OpenRouter API base URL
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Gateway for the OpenRouter completion service
pub struct OpenRouterGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenRouterGateway {
    /// Create a gateway using the default OpenRouter endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: OPENROUTER_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API base URL (self-hosted proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    async fn complete(
        &self,
        model: &ModelId,
        system: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let body = ChatRequest::new(model.openrouter_slug(), system, prompt);

        debug!("POST {} for model {}", self.endpoint(), model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("X-Title", "math-council")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => GatewayError::InvalidCredential(
                    "please check your OpenRouter API key".to_string(),
                ),
                404 => GatewayError::Http {
                    status: 404,
                    message: "endpoint not found; check the OpenRouter base URL".to_string(),
                },
                429 => GatewayError::RateLimited("please try again later".to_string()),
                code => GatewayError::Http {
                    status: code,
                    message: if message.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("unknown error")
                            .to_string()
                    } else {
                        message
                    },
                },
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(GatewayError::RequestFailed(error.message));
        }

        match parsed.content() {
            Some(content) => Ok(content.to_string()),
            None => Err(GatewayError::EmptyReply),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let gateway = OpenRouterGateway::new("sk-test");
        assert_eq!(
            gateway.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_base_url_override() {
        let gateway = OpenRouterGateway::new("sk-test").with_base_url("http://localhost:9000/v1");
        assert_eq!(gateway.endpoint(), "http://localhost:9000/v1/chat/completions");
    }
}
