//! Selecting terms from weighted documents for presentation.
//!
//! These helpers merge per-document [`TermWeightMap`]s into the single
//! term → weight mapping a word-cloud renderer consumes.

use std::cmp::Ordering;

use crate::weighting::TermWeightMap;

/// Merge every term whose weight reaches `threshold` in some document.
///
/// Documents are visited in order and a later qualifying document overwrites
/// the weight stored by an earlier one (last write wins), even when the later
/// weight is smaller.
///
/// # Examples
///
/// ```
/// use tango::selection::filter_by_threshold;
/// use tango::weighting::TermWeightMap;
///
/// let doc = TermWeightMap::from([("a".to_string(), 0.5), ("b".to_string(), 0.2)]);
/// let merged = filter_by_threshold(&[doc], 0.3);
///
/// assert_eq!(merged, TermWeightMap::from([("a".to_string(), 0.5)]));
/// ```
pub fn filter_by_threshold(documents: &[TermWeightMap], threshold: f64) -> TermWeightMap {
    let mut merged = TermWeightMap::new();
    for weights in documents {
        for (term, &weight) in weights {
            if weight >= threshold {
                merged.insert(term.clone(), weight);
            }
        }
    }
    merged
}

/// Merge all documents keeping the largest weight seen for each term.
pub fn merge_max(documents: &[TermWeightMap]) -> TermWeightMap {
    let mut merged = TermWeightMap::new();
    for weights in documents {
        for (term, &weight) in weights {
            merged
                .entry(term.clone())
                .and_modify(|current: &mut f64| *current = current.max(weight))
                .or_insert(weight);
        }
    }
    merged
}

/// The `n` heaviest terms, heaviest first. Ties are broken by term order.
pub fn top_n(weights: &TermWeightMap, n: usize) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = weights
        .iter()
        .map(|(term, &weight)| (term.clone(), weight))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(n);
    ranked
}
