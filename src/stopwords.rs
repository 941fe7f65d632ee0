//! Stopword sources.
//!
//! A [`StopwordSource`] resolves a stopword list into an in-memory
//! [`StopwordSet`] before analysis starts, so the
//! [`StopFilter`](crate::analysis::token_filter::stop::StopFilter) itself never
//! performs I/O. Lists are newline-delimited, one word per line.
//!
//! The HTTP source performs exactly one blocking request with the transport's
//! default timeout and no retry. Callers that need retries wrap the call.
//!
//! # Examples
//!
//! ```
//! use tango::stopwords::{StaticStopwordSource, StopwordSource};
//!
//! let source = StaticStopwordSource::new(["の", "は"]);
//! let set = source.load().unwrap();
//! assert!(set.contains("の"));
//! ```

use std::collections::HashSet;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TangoError};

/// A resolved set of stopword lemmas. Membership test only.
pub type StopwordSet = HashSet<String>;

/// Split a newline-delimited body into stopwords.
///
/// Lines end at `\r\n`, a lone `\n` or `\r`, or any other Unicode line
/// boundary (`\x0b`, `\x0c`, `\x1c`..`\x1e`, `\u{85}`, `\u{2028}`,
/// `\u{2029}`). A trailing separator does not produce an extra line. Lines
/// are otherwise kept as-is; an empty line yields the empty string, which can
/// only match blank lemmas.
pub fn parse_stopwords(body: &str) -> StopwordSet {
    let mut words = StopwordSet::new();
    let mut start = 0;
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        words.insert(body[start..i].to_string());
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < body.len() {
        words.insert(body[start..].to_string());
    }

    words
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Something that can produce a stopword set.
pub trait StopwordSource: Send + Sync + Debug {
    /// Resolve the source into a set. Called once per pipeline.
    fn load(&self) -> Result<StopwordSet>;
}

/// Stopwords fetched from an HTTP(S) address.
#[derive(Clone, Debug)]
pub struct HttpStopwordSource {
    url: String,
}

impl HttpStopwordSource {
    pub fn new<S: Into<String>>(url: S) -> Self {
        HttpStopwordSource { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StopwordSource for HttpStopwordSource {
    fn load(&self) -> Result<StopwordSet> {
        debug!("fetching stopwords from {}", self.url);

        let response = reqwest::blocking::get(&self.url).map_err(|e| {
            TangoError::stopword_source(format!("Failed to fetch '{}': {}", self.url, e))
        })?;
        if !response.status().is_success() {
            return Err(TangoError::stopword_source(format!(
                "Failed to fetch '{}': HTTP status {}",
                self.url,
                response.status()
            )));
        }

        let bytes = response.bytes().map_err(|e| {
            TangoError::stopword_source(format!(
                "Failed to read response body from '{}': {}",
                self.url, e
            ))
        })?;
        let body = std::str::from_utf8(&bytes).map_err(|e| {
            TangoError::stopword_source(format!(
                "Response body from '{}' is not valid UTF-8: {}",
                self.url, e
            ))
        })?;

        let words = parse_stopwords(body);
        info!("loaded {} stopwords from {}", words.len(), self.url);
        Ok(words)
    }
}

/// Stopwords read from a local file.
#[derive(Clone, Debug)]
pub struct FileStopwordSource {
    path: PathBuf,
}

impl FileStopwordSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileStopwordSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StopwordSource for FileStopwordSource {
    fn load(&self) -> Result<StopwordSet> {
        let body = fs::read_to_string(&self.path).map_err(|e| {
            TangoError::stopword_source(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let words = parse_stopwords(&body);
        info!(
            "loaded {} stopwords from {}",
            words.len(),
            self.path.display()
        );
        Ok(words)
    }
}

/// Stopwords supplied directly by the caller.
#[derive(Clone, Debug, Default)]
pub struct StaticStopwordSource {
    words: StopwordSet,
}

impl StaticStopwordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticStopwordSource {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl StopwordSource for StaticStopwordSource {
    fn load(&self) -> Result<StopwordSet> {
        Ok(self.words.clone())
    }
}
