//! Problem value object

use serde::{Deserialize, Serialize};

/// A math problem to be solved by the council (Value Object)
///
/// The problem text is opaque to the core: no structure beyond
/// "non-empty natural language" is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    content: String,
}

impl Problem {
    /// Create a new problem
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Problem cannot be empty");
        Self { content }
    }

    /// Try to create a new problem, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the problem content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Problem {
    fn from(s: &str) -> Self {
        Problem::new(s)
    }
}

impl From<String> for Problem {
    fn from(s: String) -> Self {
        Problem::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_creation() {
        let p = Problem::new("What is 2 + 2?");
        assert_eq!(p.content(), "What is 2 + 2?");
    }

    #[test]
    fn test_problem_from_str() {
        let p: Problem = "What is 2 + 2?".into();
        assert_eq!(p.content(), "What is 2 + 2?");
    }

    #[test]
    #[should_panic]
    fn test_empty_problem_panics() {
        Problem::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Problem::try_new("").is_none());
        assert!(Problem::try_new("   ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Problem::try_new("Solve x^2 = 4").is_some());
    }
}
