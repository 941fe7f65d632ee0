//! Noise removal applied to raw documents before tokenization.
//!
//! Patterns are applied one after another, each over the output of the
//! previous one, and every match is replaced with a single space. Leading and
//! trailing whitespace is trimmed once at the end. A filter built without
//! patterns passes text through untouched, trim included.
//!
//! # Examples
//!
//! ```
//! use tango::analysis::char_filter::CharFilter;
//! use tango::analysis::char_filter::noise::NoiseFilter;
//!
//! let filter = NoiseFilter::with_patterns([r"<[^>]+>", r"\d+"]).unwrap();
//! assert_eq!(filter.filter("<p>2024年</p>"), "年");
//!
//! let passthrough = NoiseFilter::disabled();
//! assert_eq!(passthrough.filter("  as is  "), "  as is  ");
//! ```

use log::debug;

use super::CharFilter;
use super::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

const NOISE_REPLACEMENT: &str = " ";

/// Ordered set of noise patterns.
#[derive(Clone, Debug, Default)]
pub struct NoiseFilter {
    /// `None` disables cleaning entirely.
    patterns: Option<Vec<PatternReplaceCharFilter>>,
}

impl NoiseFilter {
    /// A filter that returns its input unchanged.
    pub fn disabled() -> Self {
        NoiseFilter { patterns: None }
    }

    /// Compile the given patterns, in order.
    ///
    /// An empty pattern list is still an active filter: it only trims.
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = patterns
            .into_iter()
            .map(|p| PatternReplaceCharFilter::new(p.as_ref(), NOISE_REPLACEMENT))
            .collect::<Result<Vec<_>>>()?;
        debug!("compiled {} noise pattern(s)", compiled.len());

        Ok(NoiseFilter {
            patterns: Some(compiled),
        })
    }

    /// Build from an optional pattern list, as found in configuration.
    pub fn from_optional(patterns: Option<&[String]>) -> Result<Self> {
        match patterns {
            Some(patterns) => Self::with_patterns(patterns),
            None => Ok(Self::disabled()),
        }
    }

    /// Whether any cleaning (including the final trim) is performed.
    pub fn is_enabled(&self) -> bool {
        self.patterns.is_some()
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.as_ref().map_or(0, Vec::len)
    }

    /// Check if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CharFilter for NoiseFilter {
    fn filter(&self, input: &str) -> String {
        let Some(patterns) = &self.patterns else {
            return input.to_string();
        };

        let mut cleaned = input.to_string();
        for pattern in patterns {
            cleaned = pattern.filter(&cleaned);
        }

        cleaned.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "noise"
    }
}
