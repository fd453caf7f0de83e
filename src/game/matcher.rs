pub struct PrefixMatcher;

impl PrefixMatcher {
    /// True iff `word` equals the leading characters of `candidate`.
    ///
    /// Comparison is raw character equality: no case folding, no
    /// trimming. A word longer than the candidate never matches, and an
    /// empty word matches any candidate.
    pub fn is_match(candidate: &str, word: &str) -> bool {
        candidate.starts_with(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_matching_candidate_prefix() {
        assert!(PrefixMatcher::is_match("CATS", "CAT"));
        assert!(PrefixMatcher::is_match("CAT", "CAT"));
        assert!(!PrefixMatcher::is_match("CAR", "CAT"));
        assert!(!PrefixMatcher::is_match("XCAT", "CAT"));
    }

    #[test]
    fn test_word_longer_than_candidate_never_matches() {
        assert!(!PrefixMatcher::is_match("CA", "CAT"));
        assert!(!PrefixMatcher::is_match("", "A"));
    }

    #[test]
    fn test_empty_word_matches_anything() {
        assert!(PrefixMatcher::is_match("CAT", ""));
        assert!(PrefixMatcher::is_match("", ""));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert!(!PrefixMatcher::is_match("cat", "CAT"));
        assert!(!PrefixMatcher::is_match("CAT", "cat"));
    }
}
