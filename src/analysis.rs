//! Text analysis: everything that turns one raw document into a token sequence.
//!
//! Noise removal, morphological tokenization, lemma normalization, stopword
//! removal and part-of-speech selection all live here. Corpus-level weighting
//! is in [`crate::weighting`].

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
