//! Model value object identifying which LLM backs an agent

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity of the model backing one council agent (Value Object)
///
/// Each agent in the council is a (model, client) pair; this type is the
/// model half, assigned once at configuration time and carried through to
/// the final report so answers stay attributable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// OpenAI o1
    O1,
    /// Gemini 2.0 Flash Thinking
    GeminiFlashThinking,
    /// DeepSeek R1
    DeepseekR1,
    /// Any other OpenRouter model, addressed by its full slug
    Custom(String),
}

impl ModelId {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ModelId::O1 => "o1",
            ModelId::GeminiFlashThinking => "gemini-2.0-flash-thinking",
            ModelId::DeepseekR1 => "deepseek-r1",
            ModelId::Custom(s) => s,
        }
    }

    /// The OpenRouter model slug used on the wire
    ///
    /// Well-known identifiers map to their provider-qualified slug; a
    /// `Custom` identifier is assumed to already be a full slug.
    pub fn openrouter_slug(&self) -> &str {
        match self {
            ModelId::O1 => "openai/o1",
            ModelId::GeminiFlashThinking => "google/gemini-2.0-flash-thinking-exp",
            ModelId::DeepseekR1 => "deepseek/deepseek-r1",
            ModelId::Custom(s) => s,
        }
    }

    /// The default council: three independent reasoning models
    pub fn default_models() -> Vec<ModelId> {
        vec![
            ModelId::O1,
            ModelId::GeminiFlashThinking,
            ModelId::DeepseekR1,
        ]
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "o1" => ModelId::O1,
            "gemini-2.0-flash-thinking" => ModelId::GeminiFlashThinking,
            "deepseek-r1" => ModelId::DeepseekR1,
            other => ModelId::Custom(other.to_string()),
        })
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in ModelId::default_models() {
            let s = model.to_string();
            let parsed: ModelId = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: ModelId = "mistralai/mistral-large".parse().unwrap();
        assert_eq!(
            model,
            ModelId::Custom("mistralai/mistral-large".to_string())
        );
        assert_eq!(model.to_string(), "mistralai/mistral-large");
        assert_eq!(model.openrouter_slug(), "mistralai/mistral-large");
    }

    #[test]
    fn test_openrouter_slug() {
        assert_eq!(ModelId::O1.openrouter_slug(), "openai/o1");
        assert_eq!(ModelId::DeepseekR1.openrouter_slug(), "deepseek/deepseek-r1");
    }

    #[test]
    fn test_default_models_are_distinct() {
        let models = ModelId::default_models();
        assert_eq!(models.len(), 3);
        assert_ne!(models[0], models[1]);
        assert_ne!(models[1], models[2]);
    }
}
