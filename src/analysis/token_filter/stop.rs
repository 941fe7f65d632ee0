//! Stop filter implementation.
//!
//! Removes every token whose lemma is in a resolved stopword set. Comparison
//! is exact string equality; no case folding is applied here. Fetching the
//! list is the job of a [`StopwordSource`](crate::stopwords::StopwordSource),
//! so this filter never touches the network.
//!
//! # Examples
//!
//! ```
//! use tango::analysis::token_filter::Filter;
//! use tango::analysis::token_filter::stop::StopFilter;
//! use tango::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["の", "た"]);
//! let tokens = vec![
//!     Token::new("猫", "名詞"),
//!     Token::new("の", "助詞"),
//!     Token::new("走る", "動詞"),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].lemma, "猫");
//! assert_eq!(result[1].lemma, "走る");
//! ```

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;
use crate::stopwords::StopwordSet;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: Arc<StopwordSet>,
}

impl StopFilter {
    /// Create a new stop filter with a resolved stopword set.
    pub fn with_stop_words(stop_words: StopwordSet) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check if a lemma is a stop word.
    pub fn is_stop_word(&self, lemma: &str) -> bool {
        self.stop_words.contains(lemma)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.stop_words.is_empty() {
            return Ok(tokens);
        }

        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.lemma))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
