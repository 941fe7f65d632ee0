//! Corpus-level TF-IDF weighting.
//!
//! The weighter sees the whole corpus at once because inverse document
//! frequency is a corpus-relative statistic; there is no streaming mode. Each
//! token sequence is first flattened into a document string (non-blank lemmas
//! joined by single spaces, part-of-speech discarded) and terms are the
//! whitespace-separated pieces of that string.
//!
//! With `N` documents and `df(t)` the number of documents containing `t`:
//!
//! ```text
//! idf(t) = ln(N / df(t)) + 1                  (smooth_idf = false)
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1      (smooth_idf = true)
//! w(t, d) = tf(t, d) * idf(t), optionally L1/L2 normalized per document
//! ```
//!
//! # Examples
//!
//! ```
//! use tango::analysis::token::Token;
//! use tango::weighting::TfIdfWeighter;
//!
//! let corpus = vec![
//!     vec![Token::untagged("x"), Token::untagged("x"), Token::untagged("y")],
//!     vec![Token::untagged("y"), Token::untagged("y"), Token::untagged("y")],
//! ];
//!
//! let weights = TfIdfWeighter::default().weigh(&corpus).unwrap();
//! assert!(weights[0]["x"] > weights[1]["y"]);
//! ```

use std::collections::BTreeMap;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenSequence};
use crate::error::{Result, TangoError};

/// Term → weight for one document. Only strictly positive weights are stored.
pub type TermWeightMap = BTreeMap<String, f64>;

/// How raw counts are turned into term frequencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFrequency {
    /// The count of the term in the document.
    Raw,
    /// The count divided by the number of terms in the document.
    #[default]
    Relative,
    /// `1 + ln(count)`.
    Sublinear,
}

/// Per-document vector normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    /// Weights sum to 1.
    L1,
    /// Squared weights sum to 1.
    L2,
}

/// TF-IDF configuration.
///
/// The defaults keep the weight of a term proportional to its frequency
/// within a document and strictly decreasing in its document frequency, which
/// normalization would not guarantee across documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    pub term_frequency: TermFrequency,
    /// Add one to the document count and every document frequency.
    pub smooth_idf: bool,
    pub norm: Option<Norm>,
    /// Fold terms to lowercase before counting.
    pub lowercase: bool,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            term_frequency: TermFrequency::Relative,
            smooth_idf: false,
            norm: None,
            lowercase: false,
        }
    }
}

/// Flatten a token sequence into the document string used for weighting.
pub fn document_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is_blank())
        .map(|token| token.lemma.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Computes TF-IDF weights over a fixed corpus.
#[derive(Clone, Debug, Default)]
pub struct TfIdfWeighter {
    config: TfIdfConfig,
}

impl TfIdfWeighter {
    pub fn new(config: TfIdfConfig) -> Self {
        TfIdfWeighter { config }
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    /// Weigh a corpus of token sequences, one map per sequence, in order.
    pub fn weigh(&self, corpus: &[TokenSequence]) -> Result<Vec<TermWeightMap>> {
        let documents: Vec<String> = corpus.iter().map(|tokens| document_string(tokens)).collect();
        self.weigh_documents(&documents)
    }

    /// Weigh a corpus of already flattened document strings.
    pub fn weigh_documents<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<TermWeightMap>> {
        if documents.is_empty() {
            return Err(TangoError::empty_corpus("the corpus contains no documents"));
        }

        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|document| self.count_terms(document.as_ref()))
            .collect();

        let mut document_frequency: AHashMap<&str, usize> = AHashMap::new();
        for term_counts in &counts {
            for term in term_counts.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(TangoError::empty_corpus(format!(
                "none of the {} documents contains a term",
                documents.len()
            )));
        }

        let n_documents = documents.len();
        let weights: Vec<TermWeightMap> = counts
            .iter()
            .map(|term_counts| {
                let length: usize = term_counts.values().sum();
                let raw: Vec<(&str, f64)> = term_counts
                    .iter()
                    .map(|(term, &count)| {
                        let tf = self.term_frequency(count, length);
                        let idf = self.idf(n_documents, document_frequency[term.as_str()]);
                        (term.as_str(), tf * idf)
                    })
                    .collect();
                self.finish(raw)
            })
            .collect();

        debug!(
            "weighted {} documents over a vocabulary of {} terms",
            n_documents,
            document_frequency.len()
        );

        Ok(weights)
    }

    fn count_terms(&self, document: &str) -> BTreeMap<String, usize> {
        let mut term_counts = BTreeMap::new();
        for term in document.split_whitespace() {
            let term = if self.config.lowercase {
                term.to_lowercase()
            } else {
                term.to_string()
            };
            *term_counts.entry(term).or_insert(0) += 1;
        }
        term_counts
    }

    fn term_frequency(&self, count: usize, length: usize) -> f64 {
        let count = count as f64;
        match self.config.term_frequency {
            TermFrequency::Raw => count,
            TermFrequency::Relative => count / length as f64,
            TermFrequency::Sublinear => 1.0 + count.ln(),
        }
    }

    fn idf(&self, n_documents: usize, document_frequency: usize) -> f64 {
        let (n, df) = if self.config.smooth_idf {
            (n_documents as f64 + 1.0, document_frequency as f64 + 1.0)
        } else {
            (n_documents as f64, document_frequency as f64)
        };
        (n / df).ln() + 1.0
    }

    /// Apply the configured norm and drop non-positive weights.
    fn finish(&self, raw: Vec<(&str, f64)>) -> TermWeightMap {
        let scale = match self.config.norm {
            None => 1.0,
            Some(Norm::L1) => raw.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            Some(Norm::L2) => raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
        };

        raw.into_iter()
            .filter_map(|(term, weight)| {
                let weight = if scale > 0.0 { weight / scale } else { weight };
                (weight > 0.0).then(|| (term.to_string(), weight))
            })
            .collect()
    }
}
