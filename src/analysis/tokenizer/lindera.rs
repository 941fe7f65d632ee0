use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use log::{debug, info};

use crate::analysis::token::{Token, TokenStream, UNKNOWN_PART_OF_SPEECH};
use crate::error::{Result, TangoError};

use super::Tokenizer;

/// Feature column holding the base form in IPADIC-style dictionaries.
pub const IPADIC_LEMMA_FIELD: usize = 6;

/// Feature column holding the lemma in UniDic-style dictionaries.
pub const UNIDIC_LEMMA_FIELD: usize = 7;

/// Value used by MeCab-style dictionaries for an empty feature column.
const EMPTY_FEATURE: &str = "*";

/// Guess which feature column carries the base form for a dictionary URI.
///
/// Returns `None` for dictionaries without a base form column, in which case
/// the surface form is used as the lemma.
pub fn lemma_field_for(dict_uri: &str) -> Option<usize> {
    let uri = dict_uri.to_ascii_lowercase();
    if uri.contains("ipadic") {
        Some(IPADIC_LEMMA_FIELD)
    } else if uri.contains("unidic") {
        Some(UNIDIC_LEMMA_FIELD)
    } else {
        None
    }
}

/// Morphological tokenizer backed by a Lindera dictionary.
///
/// The dictionary is loaded once in [`LinderaTokenizer::new`] and reused for
/// every call to [`Tokenizer::tokenize`].
pub struct LinderaTokenizer {
    inner: Segmenter,
    lemma_field: Option<usize>,
}

impl LinderaTokenizer {
    /// Create a new Lindera tokenizer.
    ///
    /// `dict_uri` accepts anything Lindera can load, e.g. `embedded://ipadic`
    /// or a path to a compiled dictionary directory.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str).map_err(|e| {
            TangoError::tokenization(format!("Invalid mode '{}': {}", mode_str, e))
        })?;
        let dict = load_dictionary(dict_uri)
            .map_err(|e| TangoError::tokenization(format!("Failed to load dictionary: {}", e)))?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                TangoError::tokenization(format!("Failed to load user dictionary: {}", e))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);
        info!("loaded lindera dictionary {} (mode: {})", dict_uri, mode_str);

        Ok(Self {
            inner,
            lemma_field: lemma_field_for(dict_uri),
        })
    }

    /// Override the feature column used as the lemma.
    ///
    /// `None` makes every token use its surface form as the lemma.
    pub fn with_lemma_field(mut self, lemma_field: Option<usize>) -> Self {
        self.lemma_field = lemma_field;
        self
    }

    /// The feature column used as the lemma.
    pub fn lemma_field(&self) -> Option<usize> {
        self.lemma_field
    }
}

/// Build a token from a surface form and its dictionary features.
///
/// Only the top-level part-of-speech is kept; finer sub-categories are
/// dropped. A missing or empty base form falls back to the surface form.
fn token_from_features(surface: &str, details: &[&str], lemma_field: Option<usize>) -> Token {
    let part_of_speech = details
        .first()
        .copied()
        .filter(|pos| !pos.is_empty())
        .unwrap_or(UNKNOWN_PART_OF_SPEECH);

    let lemma = lemma_field
        .and_then(|field| details.get(field).copied())
        .filter(|base| !base.is_empty() && *base != EMPTY_FEATURE)
        .unwrap_or(surface);

    Token::new(lemma, part_of_speech)
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let segments = self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| TangoError::tokenization(format!("Failed to segment text: {}", e)))?;

        let mut tokens = Vec::with_capacity(segments.len());
        for mut segment in segments {
            let surface = segment.surface.to_string();
            let details = segment.details();
            tokens.push(token_from_features(&surface, &details, self.lemma_field));
        }
        debug!("segmented {} bytes into {} tokens", text.len(), tokens.len());

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
