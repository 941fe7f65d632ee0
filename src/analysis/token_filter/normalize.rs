//! Lemma normalization through a caller-supplied variant map.
//!
//! Each lemma is looked up exactly once: a lemma found in the map is replaced
//! by its value, and that value is not looked up again even when it is itself
//! a key. Part-of-speech tags pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use tango::analysis::token::Token;
//! use tango::analysis::token_filter::Filter;
//! use tango::analysis::token_filter::normalize::NormalizeFilter;
//!
//! let map = HashMap::from([
//!     ("A".to_string(), "B".to_string()),
//!     ("B".to_string(), "C".to_string()),
//! ]);
//! let filter = NormalizeFilter::new(map);
//!
//! let tokens = vec![Token::new("A", "名詞")];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result[0].lemma, "B");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that maps variant lemmas onto canonical ones.
#[derive(Clone, Debug, Default)]
pub struct NormalizeFilter {
    /// `None` means no normalization was requested.
    mapping: Option<Arc<HashMap<String, String>>>,
}

impl NormalizeFilter {
    /// Create a filter from a variant → canonical mapping.
    pub fn new(mapping: HashMap<String, String>) -> Self {
        NormalizeFilter {
            mapping: Some(Arc::new(mapping)),
        }
    }

    /// A filter that passes tokens through unchanged.
    pub fn disabled() -> Self {
        NormalizeFilter { mapping: None }
    }

    /// Build from an optional mapping, as found in configuration.
    pub fn from_optional(mapping: Option<HashMap<String, String>>) -> Self {
        match mapping {
            Some(mapping) => Self::new(mapping),
            None => Self::disabled(),
        }
    }

    /// Resolve one lemma. Single hop only.
    pub fn normalize_lemma<'a>(&'a self, lemma: &'a str) -> &'a str {
        self.mapping
            .as_ref()
            .and_then(|m| m.get(lemma))
            .map_or(lemma, String::as_str)
    }

    /// Number of mapping entries.
    pub fn len(&self) -> usize {
        self.mapping.as_ref().map_or(0, |m| m.len())
    }

    /// Check if the mapping is absent or empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Filter for NormalizeFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let Some(mapping) = self.mapping.clone() else {
            return Ok(tokens);
        };

        let normalized: Vec<Token> = tokens
            .map(|token| match mapping.get(&token.lemma) {
                Some(canonical) => token.with_lemma(canonical.as_str()),
                None => token,
            })
            .collect();

        Ok(Box::new(normalized.into_iter()))
    }

    fn name(&self) -> &'static str {
        "normalize"
    }
}
