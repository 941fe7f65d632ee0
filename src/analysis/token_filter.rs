//! Token filter implementations for token transformation.
//!
//! Filters take the token stream produced by a tokenizer and produce a new
//! stream. None of them alter the relative order of the tokens they keep.
//!
//! # Available Filters
//!
//! - [`normalize::NormalizeFilter`] - Rewrites lemmas through a one-hop variant map
//! - [`stop::StopFilter`] - Removes stop words
//! - [`part_of_speech::PartOfSpeechFilter`] - Keeps or drops tokens by part-of-speech
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Normalize → Stop Words → Part-of-speech → Weighting
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use tango::analysis::token::{Token, TokenStream};
/// use tango::analysis::token_filter::Filter;
/// use tango::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|t| t.with_lemma(t.lemma.chars().rev().collect::<String>()))
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod normalize;
pub mod part_of_speech;
pub mod stop;
