//! Splits free text into lowercase tokens for the stemmer.
//!
//! Splits on whitespace and punctuation. Apostrophes stay inside tokens so
//! possessives reach the stemmer intact; curly apostrophes are straightened.

/// Lowercased tokens of `text`, in order. Empty pieces are skipped.
pub fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || is_separator(c))
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.replace(['\u{2018}', '\u{2019}'], "'").to_lowercase())
        .collect()
}

fn is_separator(c: char) -> bool {
    c != '\'' && c != '\u{2018}' && c != '\u{2019}' && (c.is_ascii_punctuation() || c == '\u{2014}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(
            tokens("The cat's toys, Running (fast)!"),
            vec!["the", "cat's", "toys", "running", "fast"]
        );
    }

    #[test]
    fn test_curly_apostrophe() {
        assert_eq!(tokens("Dogs\u{2019} bowls"), vec!["dogs'", "bowls"]);
    }

    #[test]
    fn test_empty() {
        assert!(tokens("  ...  ").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_dashes_split() {
        assert_eq!(tokens("well-known\u{2014}mostly"), vec!["well", "known", "mostly"]);
    }
}
