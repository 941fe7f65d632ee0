//! Analyzers combine char filters, a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Sequence → Weighting
//!             ↓
//!         Char filters (noise removal)
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for the per-document half of the pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze one document into a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

pub mod pipeline;
