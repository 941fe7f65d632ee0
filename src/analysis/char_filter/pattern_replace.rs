use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::{Result, TangoError};

/// A char filter that replaces every match of a regex pattern.
///
/// The replacement is inserted literally; `$1`-style group references are not
/// expanded.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                TangoError::invalid_pattern(format!("'{}': {}", pattern, e))
            })?,
            replacement: replacement.to_string(),
        })
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, NoExpand(&self.replacement))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
