/// Canonicalize text for similarity comparison: lowercase, then trim
/// leading and trailing whitespace.
///
/// Deliberately minimal — no internal whitespace collapsing, no punctuation
/// stripping, no locale-specific folding. Fuzzy scoring already tolerates
/// partial mismatches; the original string is never modified, only compared
/// through this canonical form.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::mixed_case("Hello World", "hello world")]
    #[case::surrounding_whitespace("  hello world  ", "hello world")]
    #[case::both("  Hello World\t", "hello world")]
    #[case::already_canonical("hello world", "hello world")]
    #[case::empty("", "")]
    #[case::whitespace_only("   \t ", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_internal_whitespace_preserved() {
        assert_eq!(normalize("hello   world"), "hello   world");
    }

    #[test]
    fn test_punctuation_preserved() {
        assert_eq!(normalize("Don't Stop, Believin'!"), "don't stop, believin'!");
    }
}
