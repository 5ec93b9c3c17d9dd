//! Suffix rule tables and how a single rule is applied.
//!
//! Each table is searched in order and the first suffix that ends the word
//! is selected. Tables list a suffix before any shorter suffix it contains,
//! so the first match is also the longest. Once selected, a rule that fails
//! its region or preceding-letter check leaves the word alone; the step
//! does not fall back to a shorter suffix.

use crate::buffer::WordBuffer;
use crate::region::{is_vowel, Region};

/// Endings after which a deleted `ed`/`ing` gets an `e` back.
pub const RESTORE_E_ENDINGS: &[&str] = &["at", "bl", "iz"];

/// Double consonants reduced to one after deleting `ed`/`ing`.
pub const DOUBLES: &[&str] = &["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

/// Letters that may precede a deleted `li`.
pub const LI_ENDINGS: &str = "cdeghkmnrt";

/// What a selected rule does to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the suffix with this text. Empty text deletes it.
    Replace(&'static str),
    /// Selected, but the word is left as it is.
    Keep,
    /// `ied`/`ies`: `i` when more than one letter precedes, `ie` otherwise.
    ReplaceIe,
    /// `s`: delete when a vowel occurs before the letter preceding the `s`.
    DeleteS,
    /// `ed`/`ing` family: delete when a vowel precedes, then tidy the ending.
    DeleteThenTidy,
}

/// One entry of a step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub suffix: &'static str,
    pub action: Action,
    /// The suffix must start at or after this region's boundary.
    pub region: Option<Region>,
    /// The letter before the suffix must be one of these.
    pub preceded_by: Option<&'static str>,
}

impl Rule {
    pub const fn new(suffix: &'static str, action: Action) -> Self {
        Self {
            suffix,
            action,
            region: None,
            preceded_by: None,
        }
    }

    pub const fn replace(suffix: &'static str, replacement: &'static str) -> Self {
        Self::new(suffix, Action::Replace(replacement))
    }

    pub const fn delete(suffix: &'static str) -> Self {
        Self::new(suffix, Action::Replace(""))
    }

    pub const fn in_region(self, region: Region) -> Self {
        Self {
            region: Some(region),
            ..self
        }
    }

    pub const fn r1(self) -> Self {
        self.in_region(Region::R1)
    }

    pub const fn r2(self) -> Self {
        self.in_region(Region::R2)
    }

    pub const fn preceded_by(self, letters: &'static str) -> Self {
        Self {
            preceded_by: Some(letters),
            ..self
        }
    }

    /// Does the word satisfy this rule's region and preceding-letter checks?
    fn admits(&self, word: &WordBuffer) -> bool {
        if let Some(region) = self.region {
            if !word.suffix_in(region, self.suffix) {
                return false;
            }
        }
        match self.preceded_by {
            Some(letters) => word
                .stem_before(self.suffix.len())
                .chars()
                .next_back()
                .is_some_and(|c| letters.contains(c)),
            None => true,
        }
    }

    /// Apply the rule to a word that ends with its suffix.
    /// Returns whether the word changed.
    pub fn apply(&self, word: &mut WordBuffer) -> bool {
        if !self.admits(word) {
            return false;
        }
        let len = self.suffix.len();
        match self.action {
            Action::Replace(replacement) => {
                word.replace_suffix(len, replacement);
                true
            }
            Action::Keep => false,
            Action::ReplaceIe => {
                let replacement = if word.stem_before(len).chars().count() > 1 {
                    "i"
                } else {
                    "ie"
                };
                word.replace_suffix(len, replacement);
                true
            }
            Action::DeleteS => {
                let mut before = word.stem_before(len).chars();
                before.next_back();
                if before.any(is_vowel) {
                    word.replace_suffix(len, "");
                    true
                } else {
                    false
                }
            }
            Action::DeleteThenTidy => {
                if !word.vowel_before(len) {
                    return false;
                }
                word.replace_suffix(len, "");
                tidy_ending(word);
                true
            }
        }
    }
}

/// Repair the ending left behind by deleting `ed`/`ing`.
fn tidy_ending(word: &mut WordBuffer) {
    if RESTORE_E_ENDINGS.iter().any(|e| word.ends_with(e)) {
        word.push('e');
    } else if DOUBLES.iter().any(|d| word.ends_with(d)) {
        word.pop();
    } else if word.is_short() {
        word.push('e');
    }
}

/// First rule in `table` whose suffix ends `word`.
pub fn select<'t>(table: &'t [Rule], word: &str) -> Option<&'t Rule> {
    table.iter().find(|rule| word.ends_with(rule.suffix))
}

/// Select and apply one rule from `table`. Returns whether the word changed.
pub fn apply_table(table: &[Rule], word: &mut WordBuffer) -> bool {
    match select(table, word.as_str()) {
        Some(rule) => rule.apply(word),
        None => false,
    }
}

// Step 0: possessives.
pub static STEP0: &[Rule] = &[
    Rule::delete("'s'"),
    Rule::delete("'s"),
    Rule::delete("'"),
];

// Step 1a: plurals.
pub static STEP1A: &[Rule] = &[
    Rule::replace("sses", "ss"),
    Rule::new("ied", Action::ReplaceIe),
    Rule::new("ies", Action::ReplaceIe),
    Rule::new("us", Action::Keep),
    Rule::new("ss", Action::Keep),
    Rule::new("s", Action::DeleteS),
];

// Step 1b: past tense and gerunds. Only the `eed` forms are R1-gated.
pub static STEP1B: &[Rule] = &[
    Rule::replace("eedly", "ee").r1(),
    Rule::new("ingly", Action::DeleteThenTidy),
    Rule::new("edly", Action::DeleteThenTidy),
    Rule::replace("eed", "ee").r1(),
    Rule::new("ing", Action::DeleteThenTidy),
    Rule::new("ed", Action::DeleteThenTidy),
];

// Step 2: derivational suffixes in R1.
pub static STEP2: &[Rule] = &[
    // seven letters
    Rule::replace("ational", "ate").r1(),
    Rule::replace("tional", "tion").r1(),
    Rule::replace("ization", "ize").r1(),
    Rule::replace("fulness", "ful").r1(),
    Rule::replace("ousness", "ous").r1(),
    Rule::replace("iveness", "ive").r1(),
    // six
    Rule::replace("biliti", "ble").r1(),
    Rule::replace("lessli", "less").r1(),
    // five
    Rule::replace("ation", "ate").r1(),
    Rule::replace("alism", "al").r1(),
    Rule::replace("aliti", "al").r1(),
    Rule::replace("ousli", "ous").r1(),
    Rule::replace("iviti", "ive").r1(),
    Rule::replace("fulli", "ful").r1(),
    Rule::replace("entli", "ent").r1(),
    // four
    Rule::replace("enci", "ence").r1(),
    Rule::replace("anci", "ance").r1(),
    Rule::replace("abli", "able").r1(),
    Rule::replace("izer", "ize").r1(),
    Rule::replace("ator", "ate").r1(),
    Rule::replace("alli", "al").r1(),
    // three and two
    Rule::replace("bli", "ble").r1(),
    Rule::replace("ogi", "og").r1().preceded_by("l"),
    Rule::delete("li").r1().preceded_by(LI_ENDINGS),
];

// Step 3: `ative` alone is confined to R2.
pub static STEP3: &[Rule] = &[
    Rule::replace("ational", "ate").r1(),
    Rule::replace("alize", "al").r1(),
    Rule::replace("icate", "ic").r1(),
    Rule::replace("iciti", "ic").r1(),
    Rule::delete("ative").r2(),
    Rule::replace("ical", "ic").r1(),
    Rule::delete("ness").r1(),
    Rule::delete("ful").r1(),
];

// Snowball step 3 adds `tional -> tion`.
pub static STEP3_SNOWBALL: &[Rule] = &[
    Rule::replace("ational", "ate").r1(),
    Rule::replace("tional", "tion").r1(),
    Rule::replace("alize", "al").r1(),
    Rule::replace("icate", "ic").r1(),
    Rule::replace("iciti", "ic").r1(),
    Rule::delete("ative").r2(),
    Rule::replace("ical", "ic").r1(),
    Rule::delete("ness").r1(),
    Rule::delete("ful").r1(),
];

// Step 4: residual suffixes in R2, deleted outright.
pub static STEP4: &[Rule] = &[
    Rule::delete("ement").r2(),
    Rule::delete("ance").r2(),
    Rule::delete("ence").r2(),
    Rule::delete("able").r2(),
    Rule::delete("ible").r2(),
    Rule::delete("ment").r2(),
    Rule::delete("sion").r2(),
    Rule::delete("tion").r2(),
    Rule::delete("ant").r2(),
    Rule::delete("ent").r2(),
    Rule::delete("ism").r2(),
    Rule::delete("ate").r2(),
    Rule::delete("iti").r2(),
    Rule::delete("ous").r2(),
    Rule::delete("ive").r2(),
    Rule::delete("ize").r2(),
    Rule::delete("al").r2(),
    Rule::delete("er").r2(),
    Rule::delete("ic").r2(),
    Rule::delete("ou").r2(),
];

// Snowball step 4 drops `sion`, `tion` and `ou` for `ion` after `s` or `t`.
pub static STEP4_SNOWBALL: &[Rule] = &[
    Rule::delete("ement").r2(),
    Rule::delete("ance").r2(),
    Rule::delete("ence").r2(),
    Rule::delete("able").r2(),
    Rule::delete("ible").r2(),
    Rule::delete("ment").r2(),
    Rule::delete("ant").r2(),
    Rule::delete("ent").r2(),
    Rule::delete("ism").r2(),
    Rule::delete("ate").r2(),
    Rule::delete("iti").r2(),
    Rule::delete("ous").r2(),
    Rule::delete("ive").r2(),
    Rule::delete("ize").r2(),
    Rule::delete("ion").r2().preceded_by("st"),
    Rule::delete("al").r2(),
    Rule::delete("er").r2(),
    Rule::delete("ic").r2(),
];
