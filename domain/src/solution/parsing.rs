//! Strict reply parsing for the labeled-section solution contract.
//!
//! The prompt template asks every model for three labeled sections:
//!
//! ```text
//! Understanding:
//! <restatement of the problem>
//!
//! Steps:
//! 1. <first step>
//! 2. <second step>
//!
//! Final Answer:
//! <the result, nothing else>
//! ```
//!
//! Parsing is pure domain logic, no I/O, just line scanning. It is strict
//! on purpose: a reply without a `Final Answer` section is a malformed
//! reply and becomes an explicit error, never a best-effort guess.

use super::entities::AgentSolution;
use thiserror::Error;

/// Errors produced by [`parse_solution`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionParseError {
    #[error("reply has no Final Answer section")]
    MissingFinalAnswer,

    #[error("Final Answer section is empty")]
    EmptyFinalAnswer,
}

/// The three sections of the solution contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Understanding,
    Steps,
    FinalAnswer,
}

/// Parse a raw model reply into an [`AgentSolution`].
///
/// Section headers are matched at line start, case-insensitively, with
/// tolerance for markdown heading (`##`) and emphasis (`**`) decoration
/// and an optional trailing colon. Content on the same line as a header
/// (after the colon) belongs to that section. `Understanding` and `Steps`
/// are optional and default to empty; `Final Answer` is required and must
/// be non-empty.
pub fn parse_solution(reply: &str) -> Result<AgentSolution, SolutionParseError> {
    let mut understanding: Vec<&str> = Vec::new();
    let mut steps_raw: Vec<&str> = Vec::new();
    let mut final_answer: Vec<&str> = Vec::new();
    let mut current: Option<Section> = None;
    let mut saw_final_answer = false;

    for line in reply.lines() {
        if let Some((section, inline)) = match_header(line) {
            current = Some(section);
            if section == Section::FinalAnswer {
                saw_final_answer = true;
            }
            if !inline.is_empty() {
                push_content(section, inline, &mut understanding, &mut steps_raw, &mut final_answer);
            }
            continue;
        }

        if let Some(section) = current {
            push_content(section, line, &mut understanding, &mut steps_raw, &mut final_answer);
        }
        // Text before the first header is preamble and is dropped.
    }

    if !saw_final_answer {
        return Err(SolutionParseError::MissingFinalAnswer);
    }

    let answer = final_answer.join(" ").trim().to_string();
    if answer.is_empty() {
        return Err(SolutionParseError::EmptyFinalAnswer);
    }

    let steps = steps_raw
        .iter()
        .map(|line| strip_list_marker(line.trim()))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(AgentSolution::new(
        understanding.join("\n").trim().to_string(),
        steps,
        answer,
    ))
}

fn push_content<'a>(
    section: Section,
    line: &'a str,
    understanding: &mut Vec<&'a str>,
    steps: &mut Vec<&'a str>,
    final_answer: &mut Vec<&'a str>,
) {
    match section {
        Section::Understanding => understanding.push(line),
        Section::Steps => steps.push(line),
        Section::FinalAnswer => {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                final_answer.push(trimmed);
            }
        }
    }
}

/// Match a line against the known section headers.
///
/// Returns the section and any inline content following the header colon.
fn match_header(line: &str) -> Option<(Section, &str)> {
    let stripped = strip_decoration(line);

    for (label, section) in [
        ("final answer", Section::FinalAnswer),
        ("understanding", Section::Understanding),
        ("steps", Section::Steps),
    ] {
        let Some(head) = stripped.get(..label.len()) else {
            continue;
        };
        if head.eq_ignore_ascii_case(label) {
            let rest = stripped[label.len()..].trim_start();
            // A header is either the bare label, or the label followed by
            // a colon. "Steps taken so far" is not a Steps header.
            if rest.is_empty() {
                return Some((section, ""));
            }
            if let Some(inline) = rest.strip_prefix(':') {
                return Some((section, strip_inline_decoration(inline.trim())));
            }
        }
    }

    None
}

/// Remove leading markdown heading/emphasis decoration from a line.
fn strip_decoration(line: &str) -> &str {
    line.trim()
        .trim_start_matches('#')
        .trim_start_matches(|c| c == '*' || c == '_')
        .trim_start()
}

/// Remove emphasis decoration left over from headers like `**Final Answer:** 6`.
fn strip_inline_decoration(text: &str) -> &str {
    text.trim_start_matches(|c| c == '*' || c == '_').trim_start()
}

/// Strip a leading list marker (`1.`, `2)`, `-`, `*`) from a step line.
fn strip_list_marker(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest.trim_start();
    }
    line
}
