//! Region calculator: where R1 and R2 start in a word.
//!
//! R1 is the part of the word after the first non-vowel that follows a
//! vowel, or the empty tail if there is no such non-vowel. R2 is the same
//! rule applied to R1. Words beginning `gener`, `commun` or `arsen` take
//! R1 as everything after that prefix.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Letters treated as vowels. `Y` (a marked consonantal y) is not one.
pub const VOWELS: &str = "aeiouy";

/// Prefixes whose remainder is R1 regardless of the vowel pattern.
pub const R1_EXCEPTIONS: &[&str] = &["gener", "commun", "arsen"];

// First vowel immediately followed by a non-vowel.
static VOWEL_THEN_NON_VOWEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy][^aeiouy]").unwrap());

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Which region a rule is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    R1,
    R2,
}

/// Byte offset, within `s`, where the region after the first
/// vowel→non-vowel transition begins. `s.len()` when there is none.
pub fn region_start(s: &str) -> usize {
    VOWEL_THEN_NON_VOWEL
        .find(s)
        .map(|m| m.end())
        .unwrap_or(s.len())
}

/// The region after the first vowel→non-vowel transition; empty if none.
pub fn get_region(s: &str) -> &str {
    &s[region_start(s)..]
}

/// Start offset of R1, honouring the prefix exceptions.
pub fn r1_start(word: &str) -> usize {
    R1_EXCEPTIONS
        .iter()
        .find(|prefix| word.starts_with(**prefix))
        .map(|prefix| prefix.len())
        .unwrap_or_else(|| region_start(word))
}

/// R1 of a word.
pub fn r1(word: &str) -> &str {
    &word[r1_start(word)..]
}

/// R2 of a word: the plain region rule applied to R1, no prefix exceptions.
pub fn r2(word: &str) -> &str {
    get_region(r1(word))
}

/// Start offsets of R1 and R2 in one word.
///
/// Always `r1 <= r2 <= len` for the word they were computed or clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
}

impl Regions {
    /// Compute both boundaries from the word's current content.
    pub fn of(word: &str) -> Self {
        let r1 = r1_start(word);
        let r2 = r1 + region_start(&word[r1..]);
        Self { r1, r2 }
    }

    /// Boundaries for a word that has since shrunk to `len` bytes.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            r1: self.r1.min(len),
            r2: self.r2.min(len),
        }
    }

    pub fn start(&self, region: Region) -> usize {
        match region {
            Region::R1 => self.r1,
            Region::R2 => self.r2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_regions() {
        // Examples from the published algorithm description.
        assert_eq!(r1("beautiful"), "iful");
        assert_eq!(r2("beautiful"), "ul");
        assert_eq!(r1("beauty"), "y");
        assert_eq!(r2("beauty"), "");
        assert_eq!(r1("beau"), "");
        assert_eq!(r1("animadversion"), "imadversion");
        assert_eq!(r2("animadversion"), "adversion");
        assert_eq!(r1("sprinkled"), "kled");
        assert_eq!(r2("sprinkled"), "");
        assert_eq!(r1("eucharist"), "harist");
        assert_eq!(r2("eucharist"), "ist");
    }

    #[test]
    fn test_prefix_exceptions() {
        assert_eq!(r1("generous"), "ous");
        assert_eq!(r2("generous"), "");
        assert_eq!(r1("communism"), "ism");
        assert_eq!(r1("arsenal"), "al");
        // The exception applies only at R1 level.
        assert_eq!(r2("generalization"), "ization");
    }

    #[test]
    fn test_no_transition() {
        assert_eq!(region_start("brr"), 3);
        // y counts as a vowel: "yt" is the transition.
        assert_eq!(get_region("rhythm"), "hm");
        assert_eq!(get_region("aaa"), "");
        assert_eq!(Regions::of(""), Regions { r1: 0, r2: 0 });
        assert_eq!(Regions::of("tsk"), Regions { r1: 3, r2: 3 });
    }

    #[test]
    fn test_marked_y_is_consonant() {
        // "Yes" after marking: Y is not a vowel, so the transition is "es".
        assert_eq!(r1("Yes"), "");
        assert_eq!(r1("saYing"), "ing");
    }

    #[test]
    fn test_clamped() {
        let regions = Regions { r1: 3, r2: 6 };
        assert_eq!(regions.clamped(4), Regions { r1: 3, r2: 4 });
        assert_eq!(regions.clamped(2), Regions { r1: 2, r2: 2 });
        assert_eq!(regions.start(Region::R2), 6);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let regions = Regions::of("café");
        assert!(regions.r1 <= regions.r2 && regions.r2 <= "café".len());
        assert!("café".is_char_boundary(regions.r1));
        assert!("café".is_char_boundary(regions.r2));
    }
}
