//! The summarizer: pure consensus/selection logic over agent reports.
//!
//! Given the ordered reports from one council run, [`summarize`] produces
//! a single [`Summary`]. The function is deterministic and does no I/O,
//! so every verdict is unit-testable without live API access.
//!
//! # Selection rules
//!
//! 1. No succeeded agent → `AllFailed`, no best answer, low confidence.
//! 2. All succeeded answers normalized-equal → `Agreement`, high
//!    confidence, first agent's original-cased answer.
//! 3. Otherwise `Disagreement`. The winning answer is picked by plurality
//!    over normalized answers; ties prefer the answer backed by the most
//!    detailed solution (most non-empty steps), then the answer given by
//!    the agent configured first.

use super::normalize::normalize_answer;
use super::policy::ConsensusPolicy;
use super::summary::{Confidence, ConsensusStatus, Summary};
use crate::solution::entities::{AgentReport, AgentSolution};
use crate::core::model::ModelId;

/// One distinct normalized answer and the agents backing it
struct AnswerGroup<'a> {
    /// Normalized answer text (group key)
    normalized: String,
    /// Members in configured agent order: (configured index, agent, solution)
    members: Vec<(usize, &'a ModelId, &'a AgentSolution)>,
}

impl<'a> AnswerGroup<'a> {
    fn count(&self) -> usize {
        self.members.len()
    }

    /// Detail of the group's most detailed solution
    fn best_detail(&self) -> usize {
        self.members.iter().map(|(_, _, s)| s.detail()).max().unwrap_or(0)
    }

    /// Configured index of the group's earliest agent
    fn earliest(&self) -> usize {
        self.members.first().map(|(i, _, _)| *i).unwrap_or(usize::MAX)
    }

    /// The answer shown to the user: the earliest member's original text
    fn representative_answer(&self) -> &'a str {
        &self.members[0].2.final_answer
    }

    fn agent_list(&self) -> String {
        self.members
            .iter()
            .map(|(_, agent, _)| agent.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Compute the council's verdict from the ordered agent reports.
pub fn summarize(reports: &[AgentReport], policy: &ConsensusPolicy) -> Summary {
    let solved: Vec<(usize, &ModelId, &AgentSolution)> = reports
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.outcome.solution().map(|s| (i, &r.agent, s)))
        .collect();

    if solved.is_empty() {
        return all_failed_summary(reports);
    }

    let groups = group_by_normalized_answer(&solved);

    if groups.len() == 1 {
        let rationale = format!(
            "All {} responding agent(s) gave the same answer.",
            solved.len()
        );
        return Summary::new(
            ConsensusStatus::Agreement,
            Some(solved[0].2.final_answer.clone()),
            Confidence::High,
            rationale,
        );
    }

    disagreement_summary(reports, &groups, policy)
}

fn all_failed_summary(reports: &[AgentReport]) -> Summary {
    let causes = reports
        .iter()
        .filter_map(|r| {
            r.outcome
                .failure()
                .map(|f| format!("{}: {}", r.agent, f.kind))
        })
        .collect::<Vec<_>>()
        .join("; ");

    let rationale = if causes.is_empty() {
        "No agent produced a usable solution.".to_string()
    } else {
        format!("No agent produced a usable solution ({}).", causes)
    };

    Summary::new(ConsensusStatus::AllFailed, None, Confidence::Low, rationale)
}

fn group_by_normalized_answer<'a>(
    solved: &[(usize, &'a ModelId, &'a AgentSolution)],
) -> Vec<AnswerGroup<'a>> {
    // First-seen order, which also orders groups by earliest agent index.
    let mut groups: Vec<AnswerGroup<'a>> = Vec::new();

    for &(index, agent, solution) in solved {
        let normalized = normalize_answer(&solution.final_answer);
        match groups.iter_mut().find(|g| g.normalized == normalized) {
            Some(group) => group.members.push((index, agent, solution)),
            None => groups.push(AnswerGroup {
                normalized,
                members: vec![(index, agent, solution)],
            }),
        }
    }

    groups
}

fn disagreement_summary(
    reports: &[AgentReport],
    groups: &[AnswerGroup<'_>],
    policy: &ConsensusPolicy,
) -> Summary {
    // Plurality first, then solution detail, then configured agent order.
    // `earliest` is unique per group, so the ordering is total and the
    // winner deterministic.
    let winner = groups
        .iter()
        .max_by(|a, b| {
            a.count()
                .cmp(&b.count())
                .then_with(|| a.best_detail().cmp(&b.best_detail()))
                .then_with(|| b.earliest().cmp(&a.earliest()))
        })
        .expect("disagreement requires at least two answer groups");

    let confidence = if winner.count() >= policy.min_agreeing {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let mut parts: Vec<String> = groups
        .iter()
        .map(|g| format!("\"{}\" from {}", g.representative_answer(), g.agent_list()))
        .collect();

    let failed: Vec<String> = reports
        .iter()
        .filter_map(|r| {
            r.outcome
                .failure()
                .map(|f| format!("{} did not answer ({})", r.agent, f.kind))
        })
        .collect();
    parts.extend(failed);

    let rationale = format!("Agents disagree: {}.", parts.join("; "));

    Summary::new(
        ConsensusStatus::Disagreement,
        Some(winner.representative_answer().to_string()),
        confidence,
        rationale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::entities::AgentFailure;

    fn solved(agent: ModelId, answer: &str, steps: usize) -> AgentReport {
        let steps = (0..steps).map(|i| format!("step {}", i + 1)).collect();
        AgentReport::solved(agent, AgentSolution::new("understanding", steps, answer))
    }

    fn failed(agent: ModelId) -> AgentReport {
        AgentReport::failed(agent, AgentFailure::communication("HTTP 500"))
    }

    fn policy() -> ConsensusPolicy {
        ConsensusPolicy::default()
    }

    #[test]
    fn test_all_failed() {
        let reports = vec![failed(ModelId::O1), failed(ModelId::DeepseekR1)];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::AllFailed);
        assert!(summary.best_answer.is_none());
        assert_eq!(summary.confidence, Confidence::Low);
        assert!(summary.rationale.contains("No agent produced a usable solution"));
    }

    #[test]
    fn test_agreement_is_high_confidence() {
        let reports = vec![
            solved(ModelId::O1, "6 square units", 3),
            solved(ModelId::GeminiFlashThinking, "6 Square Units.", 2),
            solved(ModelId::DeepseekR1, "6  square units", 4),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Agreement);
        // Original casing of the first succeeded agent is preserved.
        assert_eq!(summary.best_answer.as_deref(), Some("6 square units"));
        assert_eq!(summary.confidence, Confidence::High);
    }

    #[test]
    fn test_agreement_ignores_failed_agents() {
        let reports = vec![
            solved(ModelId::O1, "42", 1),
            failed(ModelId::GeminiFlashThinking),
            solved(ModelId::DeepseekR1, "42.", 1),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Agreement);
        assert_eq!(summary.best_answer.as_deref(), Some("42"));
    }

    #[test]
    fn test_plurality_wins_with_medium_confidence() {
        let reports = vec![
            solved(ModelId::O1, "6", 2),
            solved(ModelId::GeminiFlashThinking, "6", 2),
            solved(ModelId::DeepseekR1, "7", 5),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Disagreement);
        assert_eq!(summary.best_answer.as_deref(), Some("6"));
        assert_eq!(summary.confidence, Confidence::Medium);
        assert!(summary.rationale.contains("\"6\""));
        assert!(summary.rationale.contains("\"7\""));
        assert!(summary.rationale.contains("o1"));
    }

    #[test]
    fn test_step_count_breaks_count_tie() {
        let reports = vec![
            solved(ModelId::O1, "6", 1),
            solved(ModelId::GeminiFlashThinking, "7", 4),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Disagreement);
        // One vote each; the more detailed solution wins.
        assert_eq!(summary.best_answer.as_deref(), Some("7"));
        assert_eq!(summary.confidence, Confidence::Low);
    }

    #[test]
    fn test_full_tie_prefers_configured_order() {
        let reports = vec![
            solved(ModelId::O1, "6", 3),
            solved(ModelId::GeminiFlashThinking, "7", 3),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.best_answer.as_deref(), Some("6"));
        assert_eq!(summary.confidence, Confidence::Low);
    }

    #[test]
    fn test_no_plurality_is_low_confidence() {
        let reports = vec![
            solved(ModelId::O1, "6", 1),
            solved(ModelId::GeminiFlashThinking, "7", 1),
            solved(ModelId::DeepseekR1, "8", 1),
        ];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Disagreement);
        assert_eq!(summary.confidence, Confidence::Low);
    }

    #[test]
    fn test_min_agreeing_threshold_is_policy() {
        let reports = vec![
            solved(ModelId::O1, "6", 1),
            solved(ModelId::GeminiFlashThinking, "6", 1),
            solved(ModelId::DeepseekR1, "7", 1),
        ];

        let strict = ConsensusPolicy::default().with_min_agreeing(3);
        let summary = summarize(&reports, &strict);
        assert_eq!(summary.confidence, Confidence::Low);

        let lenient = ConsensusPolicy::default().with_min_agreeing(2);
        let summary = summarize(&reports, &lenient);
        assert_eq!(summary.confidence, Confidence::Medium);
    }

    #[test]
    fn test_best_answer_comes_from_a_succeeded_agent() {
        let reports = vec![
            solved(ModelId::O1, "6 square units", 2),
            solved(ModelId::GeminiFlashThinking, "7 square units", 2),
            failed(ModelId::DeepseekR1),
        ];
        let summary = summarize(&reports, &policy());

        let best = summary.best_answer.unwrap();
        assert!(
            reports
                .iter()
                .filter_map(|r| r.outcome.solution())
                .any(|s| s.final_answer == best)
        );
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let reports = vec![
            solved(ModelId::O1, "6", 2),
            solved(ModelId::GeminiFlashThinking, "7", 3),
            failed(ModelId::DeepseekR1),
        ];
        let first = summarize(&reports, &policy());
        let second = summarize(&reports, &policy());
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_agent_council() {
        let reports = vec![solved(ModelId::O1, "11", 2)];
        let summary = summarize(&reports, &policy());

        assert_eq!(summary.status, ConsensusStatus::Agreement);
        assert_eq!(summary.best_answer.as_deref(), Some("11"));
        assert_eq!(summary.confidence, Confidence::High);
    }

    #[test]
    fn test_disagreement_rationale_mentions_failures() {
        let reports = vec![
            solved(ModelId::O1, "6", 1),
            solved(ModelId::GeminiFlashThinking, "7", 1),
            failed(ModelId::DeepseekR1),
        ];
        let summary = summarize(&reports, &policy());
        assert!(summary.rationale.contains("deepseek-r1 did not answer"));
    }
}
