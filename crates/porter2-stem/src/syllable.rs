//! Short syllable and short word classification.
//!
//! A short syllable is either
//! (a) a vowel followed by a non-vowel other than `w`, `x` or `Y`, and
//!     preceded by a non-vowel, or
//! (b) a vowel at the beginning of the word followed by a non-vowel.
//!
//! A word is short when it ends in a short syllable and R1 is empty.

use once_cell::sync::Lazy;
use regex::Regex;

static SHORT_SYLLABLE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[^aeiouy][aeiouy][^aeiouywxY]|^[aeiouy][^aeiouy])$").unwrap()
});

/// Does `word` end in a short syllable?
pub fn ends_in_short_syllable(word: &str) -> bool {
    SHORT_SYLLABLE_END.is_match(word)
}

/// Is `word` short, given where its R1 starts?
pub fn is_short_word(word: &str, r1_start: usize) -> bool {
    r1_start >= word.len() && ends_in_short_syllable(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::r1_start;

    fn short(word: &str) -> bool {
        is_short_word(word, r1_start(word))
    }

    #[test]
    fn test_short_syllables() {
        assert!(ends_in_short_syllable("rap"));
        assert!(ends_in_short_syllable("trap"));
        assert!(ends_in_short_syllable("entrap"));
        assert!(ends_in_short_syllable("ow"));
        assert!(ends_in_short_syllable("on"));
        assert!(ends_in_short_syllable("at"));
    }

    #[test]
    fn test_not_short_syllables() {
        assert!(!ends_in_short_syllable("uproot"));
        assert!(!ends_in_short_syllable("bestow"));
        assert!(!ends_in_short_syllable("disturb"));
        assert!(!ends_in_short_syllable("box"));
        assert!(!ends_in_short_syllable("plaY"));
        assert!(!ends_in_short_syllable(""));
    }

    #[test]
    fn test_short_words() {
        assert!(short("bed"));
        assert!(short("shed"));
        assert!(short("shred"));
        assert!(short("hop"));
    }

    #[test]
    fn test_not_short_words() {
        // bead: no short syllable at the end. The others have a non-empty R1.
        assert!(!short("bead"));
        assert!(!short("embed"));
        assert!(!short("beds"));
        assert!(!short("entrap"));
    }
}
