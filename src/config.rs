//! Pipeline configuration.
//!
//! Every field has a default, so a configuration file only needs to list what
//! it changes.
//!
//! # Examples
//!
//! ```
//! use tango::config::{PipelineConfig, StopwordSourceConfig, TokenizerKind};
//!
//! let config = PipelineConfig::from_json_str(r#"{
//!     "noise_patterns": ["https?://\\S+"],
//!     "tokenizer": { "kind": "unicode_word" },
//!     "stopwords": { "type": "inline", "words": ["the", "a"] }
//! }"#).unwrap();
//!
//! assert_eq!(config.tokenizer.kind, TokenizerKind::UnicodeWord);
//! assert!(matches!(config.stopwords, StopwordSourceConfig::Inline { .. }));
//! assert!(config.normalization.is_none());
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::part_of_speech::PartOfSpeechMode;
use crate::error::{Result, TangoError};
use crate::stopwords::{
    FileStopwordSource, HttpStopwordSource, StaticStopwordSource, StopwordSource,
};
use crate::weighting::TfIdfConfig;

/// Default Lindera dictionary.
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// Default Lindera segmentation mode.
pub const DEFAULT_MODE: &str = "normal";

/// Which tokenizer implementation to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Morphological analysis with a Lindera dictionary.
    #[default]
    Lindera,
    /// Unicode word boundaries, no dictionary.
    UnicodeWord,
}

/// Tokenizer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub kind: TokenizerKind,
    /// Lindera segmentation mode (`normal` or `decompose`).
    pub mode: String,
    /// Lindera dictionary URI or path.
    pub dictionary: String,
    pub user_dictionary: Option<String>,
    /// Feature column holding the base form. Derived from the dictionary
    /// name when absent.
    pub lemma_field: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            kind: TokenizerKind::Lindera,
            mode: DEFAULT_MODE.to_string(),
            dictionary: DEFAULT_DICTIONARY.to_string(),
            user_dictionary: None,
            lemma_field: None,
        }
    }
}

/// Where the stopword list comes from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopwordSourceConfig {
    /// No stopwords.
    #[default]
    None,
    /// Newline-delimited list fetched over HTTP(S).
    Url { url: String },
    /// Newline-delimited list in a local file.
    File { path: String },
    /// Words listed directly in the configuration.
    Inline { words: Vec<String> },
}

impl StopwordSourceConfig {
    /// Build the source this configuration describes.
    pub fn source(&self) -> Box<dyn StopwordSource> {
        match self {
            StopwordSourceConfig::None => Box::new(StaticStopwordSource::default()),
            StopwordSourceConfig::Url { url } => Box::new(HttpStopwordSource::new(url.as_str())),
            StopwordSourceConfig::File { path } => Box::new(FileStopwordSource::new(path)),
            StopwordSourceConfig::Inline { words } => {
                Box::new(StaticStopwordSource::new(words.iter().cloned()))
            }
        }
    }
}

/// Part-of-speech selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartOfSpeechConfig {
    pub mode: PartOfSpeechMode,
    pub tags: Vec<String>,
}

/// Configuration of a whole [`TermPipeline`](crate::pipeline::TermPipeline).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Regex noise patterns. `None` disables cleaning; an empty list only trims.
    pub noise_patterns: Option<Vec<String>>,
    pub tokenizer: TokenizerConfig,
    /// Variant → canonical lemma map, applied one hop only.
    pub normalization: Option<HashMap<String, String>>,
    pub stopwords: StopwordSourceConfig,
    pub part_of_speech: Option<PartOfSpeechConfig>,
    pub weighting: TfIdfConfig,
}

impl PipelineConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that cannot describe a working pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.kind == TokenizerKind::Lindera {
            if self.tokenizer.dictionary.trim().is_empty() {
                return Err(TangoError::config("tokenizer.dictionary must not be empty"));
            }
            if self.tokenizer.mode.trim().is_empty() {
                return Err(TangoError::config("tokenizer.mode must not be empty"));
            }
        }

        match &self.stopwords {
            StopwordSourceConfig::Url { url } if url.trim().is_empty() => {
                Err(TangoError::config("stopwords.url must not be empty"))
            }
            StopwordSourceConfig::File { path } if path.trim().is_empty() => {
                Err(TangoError::config("stopwords.path must not be empty"))
            }
            _ => Ok(()),
        }
    }
}
