//! Answer matching for fill-in quiz sessions.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the expected word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCheck {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Typed answer with leading/trailing whitespace removed (for display).
    pub typed_trimmed: String,
    /// Expected word with leading/trailing whitespace removed (for display).
    pub expected_trimmed: String,
}

/// Compare a typed answer to the expected word.
///
/// Both sides are trimmed of leading and trailing whitespace, then compared
/// with exact, case-sensitive equality. No partial credit, no fuzzy or
/// accent-insensitive matching.
pub fn check_answer(typed: &str, expected: &str) -> AnswerCheck {
    let typed_trimmed = typed.trim().to_string();
    let expected_trimmed = expected.trim().to_string();
    let is_correct = typed_trimmed == expected_trimmed;

    AnswerCheck {
        is_correct,
        typed_trimmed,
        expected_trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert!(check_answer("你好", "你好").is_correct);
        assert!(!check_answer("你好吗", "你好").is_correct);
    }

    #[test]
    fn edge_whitespace_ignored() {
        let result = check_answer(" 你好 ", "你好");
        assert!(result.is_correct);
        assert_eq!(result.typed_trimmed, "你好");
    }

    #[test]
    fn interior_whitespace_significant() {
        assert!(!check_answer("你 好", "你好").is_correct);
    }

    #[test]
    fn case_sensitive() {
        assert!(!check_answer("Hello", "hello").is_correct);
    }

    #[test]
    fn empty_input_only_matches_empty_word() {
        assert!(!check_answer("", "你好").is_correct);
        assert!(!check_answer("   ", "你好").is_correct);
        assert!(check_answer("", "").is_correct);
        assert!(check_answer("  ", " ").is_correct);
    }
}
