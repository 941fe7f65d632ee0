//! Dictionary-free tokenizer based on Unicode word boundaries (UAX #29).
//!
//! Every word becomes its own lemma and carries no grammatical information,
//! so this tokenizer suits whitespace-delimited languages and fixtures. It
//! does not lemmatize.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bounds()
            // Only keep actual words (not whitespace or punctuation)
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(Token::untagged)
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
