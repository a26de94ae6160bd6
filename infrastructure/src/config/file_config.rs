//! Configuration file structures

use council_application::SolveParams;
use council_domain::{ConsensusPolicy, ModelId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure for `council.toml`
///
/// Every field has a default, so a missing or partial file is never an
/// error; the loader merges file, environment, and flag sources on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenRouter API key. Usually supplied via environment instead.
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Agents in the council, by model identifier
    pub agents: Vec<String>,
    /// Overall solve deadline in seconds
    pub timeout_secs: u64,
    /// Summarizer thresholds
    pub consensus: ConsensusSection,
}

/// `[consensus]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusSection {
    /// Minimum plurality size for medium confidence on disagreement
    pub min_agreeing: usize,
}

impl Default for ConsensusSection {
    fn default() -> Self {
        let policy = ConsensusPolicy::default();
        Self {
            min_agreeing: policy.min_agreeing,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::openrouter::OPENROUTER_BASE_URL.to_string(),
            agents: ModelId::default_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            timeout_secs: 60,
            consensus: ConsensusSection::default(),
        }
    }
}

impl FileConfig {
    /// The configured agents as model identifiers, in file order
    pub fn models(&self) -> Vec<ModelId> {
        self.agents.iter().map(|s| s.parse().unwrap()).collect()
    }

    /// Solve parameters derived from this configuration
    pub fn solve_params(&self) -> SolveParams {
        SolveParams::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_policy(ConsensusPolicy::default().with_min_agreeing(self.consensus.min_agreeing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.agents.len(), 3);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.consensus.min_agreeing, 2);
    }

    #[test]
    fn test_partial_toml_merges_with_defaults() {
        let config: FileConfig = toml::from_str("timeout_secs = 10").unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.agents.len(), 3);
    }

    #[test]
    fn test_models_preserve_order() {
        let config: FileConfig =
            toml::from_str(r#"agents = ["deepseek-r1", "o1"]"#).unwrap();
        assert_eq!(
            config.models(),
            vec![ModelId::DeepseekR1, ModelId::O1]
        );
    }

    #[test]
    fn test_solve_params_conversion() {
        let config: FileConfig = toml::from_str(
            r#"
timeout_secs = 15

[consensus]
min_agreeing = 3
"#,
        )
        .unwrap();

        let params = config.solve_params();
        assert_eq!(params.timeout, Duration::from_secs(15));
        assert_eq!(params.policy.min_agreeing, 3);
    }
}
