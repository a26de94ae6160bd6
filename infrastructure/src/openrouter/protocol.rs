//! OpenRouter chat-completions wire types
//!
//! Request/response shapes for the `/chat/completions` endpoint. Only the
//! fields this client reads or writes are modeled; everything else in the
//! service's replies is ignored.

use serde::{Deserialize, Serialize};

/// Sampling temperature used for every solve request
pub const TEMPERATURE: f64 = 0.3;

/// Token budget for every solve request
pub const MAX_TOKENS: u32 = 10_000;

/// Outgoing chat-completions request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    /// Build a non-streaming request with a system and user message
    pub fn new(model: &'a str, system: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }
}

/// One message in the conversation
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Incoming chat-completions response body
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// In-body error object; OpenRouter can return this with a 200 status
    #[serde(default)]
    pub error: Option<ApiError>,
}

impl ChatResponse {
    /// The assistant's reply text, if any
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}
