//! Consensus policy: tunable thresholds for the summarizer.
//!
//! The medium/low confidence boundary on disagreement is policy, not a
//! hard-coded certainty, so it lives in configuration.

use serde::{Deserialize, Serialize};

/// Thresholds controlling how the summarizer labels confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusPolicy {
    /// Minimum number of agents that must share the plurality answer for a
    /// disagreement verdict to carry `Medium` confidence. Below this the
    /// confidence is `Low`.
    pub min_agreeing: usize,
}

impl Default for ConsensusPolicy {
    fn default() -> Self {
        Self { min_agreeing: 2 }
    }
}

impl ConsensusPolicy {
    pub fn with_min_agreeing(mut self, min: usize) -> Self {
        self.min_agreeing = min;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ConsensusPolicy::default().min_agreeing, 2);
    }

    #[test]
    fn test_builder() {
        let policy = ConsensusPolicy::default().with_min_agreeing(3);
        assert_eq!(policy.min_agreeing, 3);
    }
}
