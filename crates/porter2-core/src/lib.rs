//! Porter2 Core: error types and stemmer configuration.

pub mod config;
pub mod error;

pub use config::{RegionMode, StemmerConfig, Variant};
pub use error::{Error, Result};
