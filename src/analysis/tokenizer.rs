//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split cleaned text into [`Token`](crate::analysis::token::Token)s,
//! each carrying a lemma and a coarse part-of-speech tag, in left-to-right
//! text order.
//!
//! # Available Tokenizers
//!
//! - [`lindera::LinderaTokenizer`] - Morphological analysis backed by a Lindera dictionary
//! - [`unicode_word::UnicodeWordTokenizer`] - Dictionary-free split on Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use tango::analysis::tokenizer::Tokenizer;
//! use tango::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so that one tokenizer (and the dictionary
/// it owns) can be shared by documents analyzed in parallel.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Empty input yields an empty stream, not an error.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lindera;
pub mod unicode_word;
