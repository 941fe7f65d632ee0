//! # Tango
//!
//! Turns raw natural-language text into a ranked vocabulary of salient terms,
//! ready to be drawn as a word cloud.
//!
//! ## Pipeline
//!
//! - Noise removal with ordered regex patterns
//! - Morphological tokenization with lemma and coarse part-of-speech (Lindera)
//! - One-hop lemma normalization
//! - Stopword removal against an injected or fetched list
//! - Corpus-level TF-IDF weighting
//!
//! ```
//! use tango::config::{PipelineConfig, StopwordSourceConfig, TokenizerKind};
//! use tango::pipeline::TermPipeline;
//! use tango::selection::filter_by_threshold;
//!
//! let mut config = PipelineConfig::default();
//! config.tokenizer.kind = TokenizerKind::UnicodeWord;
//! config.stopwords = StopwordSourceConfig::Inline { words: vec!["the".into()] };
//!
//! let pipeline = TermPipeline::from_config(&config).unwrap();
//! let weights = pipeline
//!     .weigh_corpus(&["the cat sat", "the dog ran", "the cat ran"])
//!     .unwrap();
//!
//! let cloud = filter_by_threshold(&weights, 0.4);
//! assert!(!cloud.contains_key("the"));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod selection;
pub mod stopwords;
pub mod weighting;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenSequence};
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Result, TangoError};
    pub use crate::pipeline::TermPipeline;
    pub use crate::selection::{filter_by_threshold, top_n};
    pub use crate::weighting::{TermWeightMap, TfIdfConfig, TfIdfWeighter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
