//! Region-aware word buffer.
//!
//! Owns the word being stemmed and answers region questions about it.
//! Every edit goes through a suffix operation, so R2 stays inside R1 and
//! both stay inside the word.

use porter2_core::RegionMode;

use crate::region::{is_vowel, Region, Regions};
use crate::syllable;

/// The word under stemming plus its region boundaries.
#[derive(Debug, Clone)]
pub struct WordBuffer {
    word: String,
    mode: RegionMode,
    /// Boundaries computed when the buffer was built.
    initial: Regions,
}

impl WordBuffer {
    /// Wrap a pre-processed word and establish its regions.
    pub fn new(word: impl Into<String>, mode: RegionMode) -> Self {
        let word = word.into();
        let initial = Regions::of(&word);
        Self {
            word,
            mode,
            initial,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn into_string(self) -> String {
        self.word
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Character starting at byte offset `i`.
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.word.get(i..).and_then(|rest| rest.chars().next())
    }

    pub fn last_char(&self) -> Option<char> {
        self.word.chars().next_back()
    }

    /// Current region boundaries, valid for the current content.
    pub fn regions(&self) -> Regions {
        match self.mode {
            RegionMode::Fixed => self.initial.clamped(self.word.len()),
            RegionMode::Recompute => Regions::of(&self.word),
        }
    }

    pub fn region_start(&self, region: Region) -> usize {
        self.regions().start(region)
    }

    /// Content of R1 or R2.
    pub fn region(&self, region: Region) -> &str {
        &self.word[self.region_start(region)..]
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.word.ends_with(suffix)
    }

    /// The word with `suffix_len` trailing bytes cut off.
    pub fn stem_before(&self, suffix_len: usize) -> &str {
        &self.word[..self.word.len().saturating_sub(suffix_len)]
    }

    /// Does the word end with `suffix`, with the suffix lying wholly inside `region`?
    pub fn suffix_in(&self, region: Region, suffix: &str) -> bool {
        self.ends_with(suffix) && self.word.len() - suffix.len() >= self.region_start(region)
    }

    /// Does the part before the last `suffix_len` bytes contain a vowel?
    pub fn vowel_before(&self, suffix_len: usize) -> bool {
        self.stem_before(suffix_len).chars().any(is_vowel)
    }

    /// Replace the last `suffix_len` bytes with `replacement`.
    pub fn replace_suffix(&mut self, suffix_len: usize, replacement: &str) {
        let cut = self.word.len().saturating_sub(suffix_len);
        self.word.truncate(cut);
        self.word.push_str(replacement);
    }

    /// Replace `suffix` by `replacement` only when the suffix lies inside `region`.
    /// Returns whether the word changed.
    pub fn replace_in(&mut self, region: Region, suffix: &str, replacement: &str) -> bool {
        if !self.suffix_in(region, suffix) {
            return false;
        }
        self.replace_suffix(suffix.len(), replacement);
        true
    }

    pub fn push(&mut self, c: char) {
        self.word.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.word.pop()
    }

    /// Short word test against the current R1.
    pub fn is_short(&self) -> bool {
        syllable::is_short_word(&self.word, self.region_start(Region::R1))
    }

    /// Lower every marked `Y` back to `y`.
    pub fn unmark_y(&mut self) {
        if self.word.contains('Y') {
            self.word = self.word.replace('Y', "y");
        }
    }
}
