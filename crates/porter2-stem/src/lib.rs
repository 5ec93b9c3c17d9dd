//! Porter2 Stem: English suffix-stripping stemmer.
//!
//! Reduces a single lowercase token to its stem by running an ordered set
//! of suffix rules, each gated by the word regions R1 and R2.
//! Tokenization and case folding are the caller's job.

pub mod buffer;
pub mod region;
pub mod rules;
pub mod stemmer;
pub mod syllable;

pub use buffer::WordBuffer;
pub use porter2_core::{RegionMode, StemmerConfig, Variant};
pub use region::{Region, Regions};
pub use stemmer::{stem, stem_with, StemTrace, Stemmer, Step, StepSnapshot};
