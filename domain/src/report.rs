//! The solve report: complete output of one council run.

use crate::consensus::summary::Summary;
use crate::solution::entities::{AgentOutcome, AgentReport, AgentSolution};
use serde::{Deserialize, Serialize};

/// Complete result of one council run
///
/// Holds every agent's outcome in configured order plus the summarizer's
/// verdict. Immutable once constructed; the presentation layer only reads
/// from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// The original problem text
    pub problem: String,
    /// One report per configured agent, in configured order
    pub reports: Vec<AgentReport>,
    /// The council's verdict
    pub summary: Summary,
}

impl SolveReport {
    pub fn new(
        problem: impl Into<String>,
        reports: Vec<AgentReport>,
        summary: Summary,
    ) -> Self {
        Self {
            problem: problem.into(),
            reports,
            summary,
        }
    }

    /// Iterate over the agents that produced a solution
    pub fn solved(&self) -> impl Iterator<Item = (&AgentReport, &AgentSolution)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            AgentOutcome::Solved(s) => Some((r, s)),
            AgentOutcome::Failed(_) => None,
        })
    }

    /// Iterate over the agents that failed
    pub fn failed(&self) -> impl Iterator<Item = &AgentReport> {
        self.reports.iter().filter(|r| !r.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::summary::{Confidence, ConsensusStatus};
    use crate::core::model::ModelId;
    use crate::solution::entities::AgentFailure;

    fn sample_report() -> SolveReport {
        let reports = vec![
            AgentReport::solved(
                ModelId::O1,
                AgentSolution::new("sum", vec!["add".to_string()], "4"),
            ),
            AgentReport::failed(ModelId::DeepseekR1, AgentFailure::timeout("deadline")),
        ];
        let summary = Summary::new(
            ConsensusStatus::Agreement,
            Some("4".to_string()),
            Confidence::High,
            "All responding agents agree.",
        );
        SolveReport::new("What is 2 + 2?", reports, summary)
    }

    #[test]
    fn test_partition_accessors() {
        let report = sample_report();
        assert_eq!(report.solved().count(), 1);
        assert_eq!(report.failed().count(), 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["problem"], "What is 2 + 2?");
        assert_eq!(json["summary"]["status"], "agreement");
        assert_eq!(json["reports"][0]["agent"], "o1");
    }
}
