//! Summary types: the council's verdict on a problem.

use serde::{Deserialize, Serialize};

/// Agreement status across the succeeded agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusStatus {
    /// Every succeeded agent gave the same normalized answer
    Agreement,
    /// Succeeded agents gave two or more distinct normalized answers
    Disagreement,
    /// No agent produced a usable solution
    AllFailed,
}

impl ConsensusStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ConsensusStatus::Agreement => "agreement",
            ConsensusStatus::Disagreement => "disagreement",
            ConsensusStatus::AllFailed => "all_failed",
        }
    }
}

impl std::fmt::Display for ConsensusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confidence label attached to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        };
        write!(f, "{}", s)
    }
}

/// The council's verdict: status, best answer, confidence, rationale.
///
/// Computed fresh per request by the summarizer; never persisted.
/// `best_answer`, when present, is always the verbatim `final_answer` of
/// one of the succeeded agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub status: ConsensusStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_answer: Option<String>,
    pub confidence: Confidence,
    pub rationale: String,
}

impl Summary {
    pub fn new(
        status: ConsensusStatus,
        best_answer: Option<String>,
        confidence: Confidence,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            status,
            best_answer,
            confidence,
            rationale: rationale.into(),
        }
    }

    /// Whether the council reached full agreement
    pub fn is_agreement(&self) -> bool {
        matches!(self.status, ConsensusStatus::Agreement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(ConsensusStatus::Agreement.to_string(), "agreement");
        assert_eq!(ConsensusStatus::AllFailed.to_string(), "all_failed");
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(Confidence::High.to_string(), "high");
        assert_eq!(Confidence::Low.to_string(), "low");
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = Summary::new(
            ConsensusStatus::Agreement,
            Some("6".to_string()),
            Confidence::High,
            "All agents agree.",
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "agreement");
        assert_eq!(json["confidence"], "high");
        assert_eq!(json["best_answer"], "6");
    }

    #[test]
    fn test_absent_best_answer_omitted() {
        let summary = Summary::new(
            ConsensusStatus::AllFailed,
            None,
            Confidence::Low,
            "No agent produced a usable solution.",
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("best_answer").is_none());
    }
}
