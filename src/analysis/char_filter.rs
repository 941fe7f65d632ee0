//! Char filter implementations for text cleaning.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`noise::NoiseFilter`] - Ordered noise pattern removal with a final trim
//!
//! # Examples
//!
//! ```
//! use tango::analysis::char_filter::CharFilter;
//! use tango::analysis::char_filter::noise::NoiseFilter;
//!
//! let filter = NoiseFilter::with_patterns([r"https?://\S+"]).unwrap();
//! assert_eq!(filter.filter("見て https://example.com"), "見て");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod noise;
pub mod pattern_replace;
