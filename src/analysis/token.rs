//! Token types and utilities for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: the
//! dictionary base form (lemma) of a word together with its coarse
//! part-of-speech category. Tokens are plain values; every stage builds a new
//! sequence instead of editing tokens in place.
//!
//! # Examples
//!
//! ```
//! use tango::analysis::token::Token;
//!
//! let token = Token::new("走る", "動詞");
//! assert_eq!(token.lemma, "走る");
//! assert_eq!(token.part_of_speech, "動詞");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech tag used when the tokenizer has no grammatical information.
pub const UNKNOWN_PART_OF_SPEECH: &str = "*";

/// A single analyzed word.
///
/// Two tokens are equal when both the lemma and the part-of-speech are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Dictionary base form of the word (not the surface form).
    pub lemma: String,

    /// Coarse top-level grammatical category (e.g. 名詞, 動詞, 助詞).
    pub part_of_speech: String,
}

impl Token {
    /// Create a new token.
    pub fn new<L, P>(lemma: L, part_of_speech: P) -> Self
    where
        L: Into<String>,
        P: Into<String>,
    {
        Token {
            lemma: lemma.into(),
            part_of_speech: part_of_speech.into(),
        }
    }

    /// Create a token without part-of-speech information.
    pub fn untagged<L: Into<String>>(lemma: L) -> Self {
        Self::new(lemma, UNKNOWN_PART_OF_SPEECH)
    }

    /// Clone this token with a different lemma, keeping the part-of-speech.
    pub fn with_lemma<S: Into<String>>(&self, lemma: S) -> Self {
        Token {
            lemma: lemma.into(),
            part_of_speech: self.part_of_speech.clone(),
        }
    }

    /// Check whether the lemma contains only whitespace.
    pub fn is_blank(&self) -> bool {
        self.lemma.trim().is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lemma, self.part_of_speech)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// An ordered, materialized token sequence for one document.
pub type TokenSequence = Vec<Token>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
