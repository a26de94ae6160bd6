//! Answer normalization for textual comparison.
//!
//! Two final answers count as "the same" when they are equal after
//! normalization. Comparison stays textual and heuristic: there is no
//! numeric or symbolic equivalence here.

/// Normalize a final answer for equality comparison.
///
/// Lowercases, collapses runs of whitespace to single spaces, and trims
/// trailing punctuation (`. , ; : ! ?`), so `"42."` matches `"42"` and
/// `"6  Square Units"` matches `"6 square units"`.
pub fn normalize_answer(answer: &str) -> String {
    let collapsed = answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    collapsed
        .trim_end_matches(['.', ',', ';', ':', '!', '?'])
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_answer("6 Square Units"), "6 square units");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(normalize_answer("  6   square\tunits "), "6 square units");
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(normalize_answer("42."), "42");
        assert_eq!(normalize_answer("42!?"), "42");
        assert_eq!(normalize_answer("x = 4;"), "x = 4");
    }

    #[test]
    fn test_internal_punctuation_kept() {
        assert_eq!(normalize_answer("3.5"), "3.5");
        assert_eq!(normalize_answer("1,000"), "1,000");
    }

    #[test]
    fn test_punctuation_then_space() {
        assert_eq!(normalize_answer("6 square units. "), "6 square units");
    }
}
