//! Part-of-speech based token selection.
//!
//! Coarse tags are compared exactly, e.g. `名詞` or `動詞` for IPADIC.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Whether the configured tags are an allow-list or a deny-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeechMode {
    /// Keep only tokens whose tag is listed.
    Keep,
    /// Drop tokens whose tag is listed.
    Drop,
}

/// A filter that keeps or drops tokens by their coarse part-of-speech.
#[derive(Clone, Debug)]
pub struct PartOfSpeechFilter {
    tags: Arc<HashSet<String>>,
    mode: PartOfSpeechMode,
}

impl PartOfSpeechFilter {
    pub fn new<I, S>(tags: I, mode: PartOfSpeechMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PartOfSpeechFilter {
            tags: Arc::new(tags.into_iter().map(Into::into).collect()),
            mode,
        }
    }

    /// Keep only the listed tags.
    pub fn keep<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags, PartOfSpeechMode::Keep)
    }

    /// Drop the listed tags.
    pub fn exclude<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags, PartOfSpeechMode::Drop)
    }

    pub fn mode(&self) -> PartOfSpeechMode {
        self.mode
    }

    /// Check whether a token survives this filter.
    pub fn accepts(&self, token: &Token) -> bool {
        let listed = self.tags.contains(&token.part_of_speech);
        match self.mode {
            PartOfSpeechMode::Keep => listed,
            PartOfSpeechMode::Drop => !listed,
        }
    }
}

impl Filter for PartOfSpeechFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|token| self.accepts(token)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "part_of_speech"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Token> {
        vec![
            Token::new("猫", "名詞"),
            Token::new("が", "助詞"),
            Token::new("走る", "動詞"),
            Token::new("た", "助動詞"),
        ]
    }

    #[test]
    fn test_keep_mode() {
        let filter = PartOfSpeechFilter::keep(["名詞", "動詞"]);
        let result: Vec<Token> = filter
            .filter(Box::new(sample().into_iter()))
            .unwrap()
            .collect();

        assert_eq!(
            result,
            vec![Token::new("猫", "名詞"), Token::new("走る", "動詞")]
        );
    }

    #[test]
    fn test_drop_mode() {
        let filter = PartOfSpeechFilter::exclude(["助詞", "助動詞"]);
        let result: Vec<Token> = filter
            .filter(Box::new(sample().into_iter()))
            .unwrap()
            .collect();

        assert_eq!(
            result,
            vec![Token::new("猫", "名詞"), Token::new("走る", "動詞")]
        );
    }

    #[test]
    fn test_empty_keep_list_drops_everything() {
        let filter = PartOfSpeechFilter::keep(Vec::<String>::new());
        assert_eq!(
            filter.filter(Box::new(sample().into_iter())).unwrap().count(),
            0
        );
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PartOfSpeechFilter::keep(["名詞"]).name(), "part_of_speech");
    }
}
