//! Console output formatter for solve results

use colored::Colorize;
use council_domain::{AgentOutcome, SolveReport};

/// Formats solve reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete solve report
    pub fn format(report: &SolveReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Math Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Problem:".cyan().bold(),
            report.problem
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Agents:".cyan().bold(),
            report
                .reports
                .iter()
                .map(|r| r.agent.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        output.push_str(&Self::section_header("Agent Solutions"));
        for agent_report in &report.reports {
            match &agent_report.outcome {
                AgentOutcome::Solved(solution) => {
                    output.push_str(&format!(
                        "\n{}\n",
                        format!("── {} ──", agent_report.agent).yellow().bold()
                    ));
                    if !solution.understanding.is_empty() {
                        output.push_str(&format!("{}\n", solution.understanding));
                    }
                    for (i, step) in solution.steps.iter().enumerate() {
                        output.push_str(&format!("  {}. {}\n", i + 1, step));
                    }
                    output.push_str(&format!(
                        "{} {}\n",
                        "Final answer:".green().bold(),
                        solution.final_answer
                    ));
                }
                AgentOutcome::Failed(failure) => {
                    output.push_str(&format!(
                        "\n{}\n{} {}\n",
                        format!("── {} ──", agent_report.agent).red().bold(),
                        "Error:".red(),
                        failure
                    ));
                }
            }
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&Self::summary_block(report));

        output.push_str(&format!("\n{}\n", "All Agent Answers:".cyan().bold()));
        for agent_report in &report.reports {
            match &agent_report.outcome {
                AgentOutcome::Solved(solution) => {
                    output.push_str(&format!(
                        "  * {}: {}\n",
                        agent_report.agent, solution.final_answer
                    ));
                }
                AgentOutcome::Failed(failure) => {
                    output.push_str(&format!(
                        "  * {}: (no answer - {})\n",
                        agent_report.agent, failure.kind
                    ));
                }
            }
        }

        output
    }

    /// Format only the summary verdict (concise output)
    pub fn format_summary(report: &SolveReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Math Council Verdict"));
        output.push('\n');
        output.push_str(&Self::summary_block(report));
        output
    }

    /// Format as JSON
    pub fn format_json(report: &SolveReport) -> String {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {}\"}}", e))
    }

    fn summary_block(report: &SolveReport) -> String {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n",
            "Status:".cyan().bold(),
            summary.status
        ));
        if let Some(best) = &summary.best_answer {
            output.push_str(&format!(
                "{} {}\n",
                "Best answer:".cyan().bold(),
                best.green().bold()
            ));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Confidence:".cyan().bold(),
            summary.confidence
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Rationale:".cyan().bold(),
            summary.rationale
        ));

        output
    }

    fn header(title: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("=== {} ===", title).bold(),
            "=".repeat(title.len() + 8).dimmed()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("--- {} ---", title).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{
        AgentFailure, AgentReport, AgentSolution, Confidence, ConsensusStatus, ModelId, Summary,
    };

    fn sample_report() -> SolveReport {
        let reports = vec![
            AgentReport::solved(
                ModelId::O1,
                AgentSolution::new(
                    "Area of a 3-4-5 triangle.",
                    vec!["It is a right triangle.".to_string(), "(1/2)*3*4 = 6".to_string()],
                    "6 square units",
                ),
            ),
            AgentReport::failed(
                ModelId::GeminiFlashThinking,
                AgentFailure::timeout("no reply within 60s"),
            ),
        ];
        let summary = Summary::new(
            ConsensusStatus::Agreement,
            Some("6 square units".to_string()),
            Confidence::High,
            "All responding agents agree.",
        );
        SolveReport::new(
            "What is the area of a triangle with sides 3, 4, and 5?",
            reports,
            summary,
        )
    }

    #[test]
    fn test_full_format_mentions_every_agent() {
        let output = ConsoleFormatter::format(&sample_report());
        assert!(output.contains("o1"));
        assert!(output.contains("gemini-2.0-flash-thinking"));
        assert!(output.contains("6 square units"));
        assert!(output.contains("timeout"));
    }

    #[test]
    fn test_summary_format_is_concise() {
        let output = ConsoleFormatter::format_summary(&sample_report());
        assert!(output.contains("agreement"));
        assert!(output.contains("6 square units"));
        assert!(!output.contains("It is a right triangle."));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let output = ConsoleFormatter::format_json(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["status"], "agreement");
        assert_eq!(value["reports"][0]["agent"], "o1");
    }
}
