//! The end-to-end text → term weight pipeline.
//!
//! ```text
//! per document (parallel):  noise → tokenize → normalize → stopwords → part-of-speech
//! whole corpus (once):      TF-IDF weighting
//! ```
//!
//! The stopword source is resolved and the tokenizer dictionary is loaded once,
//! when the pipeline is built. Nothing is cached between runs: every call to
//! [`TermPipeline::weigh_corpus`] recomputes weights from scratch.
//!
//! # Examples
//!
//! ```
//! use tango::config::{PipelineConfig, TokenizerKind};
//! use tango::pipeline::TermPipeline;
//!
//! let mut config = PipelineConfig::default();
//! config.tokenizer.kind = TokenizerKind::UnicodeWord;
//!
//! let pipeline = TermPipeline::from_config(&config).unwrap();
//! let weights = pipeline.weigh_corpus(&["x x y", "y y y"]).unwrap();
//!
//! assert!(weights[0]["x"] > weights[1]["y"]);
//! ```

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::noise::NoiseFilter;
use crate::analysis::token::TokenSequence;
use crate::analysis::token_filter::normalize::NormalizeFilter;
use crate::analysis::token_filter::part_of_speech::PartOfSpeechFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::lindera::{LinderaTokenizer, lemma_field_for};
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::{PipelineConfig, TokenizerConfig, TokenizerKind};
use crate::error::Result;
use crate::weighting::{TermWeightMap, TfIdfWeighter};

/// Analyzer plus weighter, built once and reused across corpora.
#[derive(Clone, Debug)]
pub struct TermPipeline {
    analyzer: PipelineAnalyzer,
    weighter: TfIdfWeighter,
}

impl TermPipeline {
    pub fn new(analyzer: PipelineAnalyzer, weighter: TfIdfWeighter) -> Self {
        TermPipeline { analyzer, weighter }
    }

    /// Build every stage from configuration.
    ///
    /// This is where the stopword source is fetched, so a configured URL
    /// makes this call block on the network.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = build_tokenizer(&config.tokenizer)?;
        let noise = NoiseFilter::from_optional(config.noise_patterns.as_deref())?;
        let normalize = NormalizeFilter::from_optional(config.normalization.clone());
        let stop_words = config.stopwords.source().load()?;
        debug!("resolved {} stopwords", stop_words.len());

        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(noise))
            .add_filter(Arc::new(normalize))
            .add_filter(Arc::new(StopFilter::with_stop_words(stop_words)));
        if let Some(pos) = &config.part_of_speech {
            analyzer = analyzer.add_filter(Arc::new(PartOfSpeechFilter::new(
                pos.tags.iter().cloned(),
                pos.mode,
            )));
        }

        info!("built term pipeline: {:?}", analyzer);
        Ok(Self::new(
            analyzer,
            TfIdfWeighter::new(config.weighting.clone()),
        ))
    }

    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    pub fn weighter(&self) -> &TfIdfWeighter {
        &self.weighter
    }

    /// Run the per-document stages on one text.
    pub fn analyze(&self, text: &str) -> Result<TokenSequence> {
        Ok(self.analyzer.analyze(text)?.collect())
    }

    /// Run the per-document stages on every text in parallel.
    ///
    /// Output order matches input order. A failing document aborts the whole
    /// call; when several documents fail, the reported error may come from
    /// any of them.
    pub fn analyze_corpus<S>(&self, texts: &[S]) -> Result<Vec<TokenSequence>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Analyze every text and weigh the resulting corpus.
    pub fn weigh_corpus<S>(&self, texts: &[S]) -> Result<Vec<TermWeightMap>>
    where
        S: AsRef<str> + Sync,
    {
        let corpus = self.analyze_corpus(texts)?;
        self.weighter.weigh(&corpus)
    }
}

fn build_tokenizer(config: &TokenizerConfig) -> Result<Arc<dyn Tokenizer>> {
    match config.kind {
        TokenizerKind::Lindera => {
            let lemma_field = config
                .lemma_field
                .or_else(|| lemma_field_for(&config.dictionary));
            let tokenizer = LinderaTokenizer::new(
                &config.mode,
                &config.dictionary,
                config.user_dictionary.as_deref(),
            )?
            .with_lemma_field(lemma_field);
            Ok(Arc::new(tokenizer))
        }
        TokenizerKind::UnicodeWord => Ok(Arc::new(UnicodeWordTokenizer::new())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::part_of_speech::PartOfSpeechMode;
    use crate::config::{PartOfSpeechConfig, StopwordSourceConfig};
    use crate::error::TangoError;

    fn unicode_config() -> PipelineConfig {
        let mut config = PipelineConfig::default();
        config.tokenizer.kind = TokenizerKind::UnicodeWord;
        config
    }

    #[test]
    fn test_stages_run_in_order() {
        let mut config = unicode_config();
        config.noise_patterns = Some(vec![r"\d+".to_string()]);
        config.normalization = Some(HashMap::from([
            ("cats".to_string(), "cat".to_string()),
            ("kitty".to_string(), "cats".to_string()),
        ]));
        config.stopwords = StopwordSourceConfig::Inline {
            words: vec!["the".to_string(), "cat".to_string()],
        };

        let pipeline = TermPipeline::from_config(&config).unwrap();
        let tokens = pipeline.analyze("the 3 cats and kitty").unwrap();

        // "cats" normalizes to the stopword "cat"; "kitty" stops at "cats".
        assert_eq!(
            tokens,
            vec![Token::untagged("and"), Token::untagged("cats")]
        );
    }

    #[test]
    fn test_part_of_speech_stage() {
        let mut config = unicode_config();
        config.part_of_speech = Some(PartOfSpeechConfig {
            mode: PartOfSpeechMode::Keep,
            tags: vec!["名詞".to_string()],
        });

        let pipeline = TermPipeline::from_config(&config).unwrap();
        // The unicode tokenizer tags nothing, so nothing survives.
        assert!(pipeline.analyze("some words").unwrap().is_empty());
    }

    #[test]
    fn test_analyze_corpus_preserves_order() {
        let pipeline = TermPipeline::from_config(&unicode_config()).unwrap();
        let texts: Vec<String> = (0..64).map(|i| format!("doc{i}")).collect();

        let corpus = pipeline.analyze_corpus(&texts).unwrap();

        assert_eq!(corpus.len(), 64);
        for (i, tokens) in corpus.iter().enumerate() {
            assert_eq!(tokens, &vec![Token::untagged(format!("doc{i}"))]);
        }
    }

    struct RejectingTokenizer;

    impl Tokenizer for RejectingTokenizer {
        fn tokenize(&self, text: &str) -> Result<crate::analysis::token::TokenStream> {
            if text.contains("bad") {
                return Err(TangoError::tokenization(format!("cannot segment '{text}'")));
            }
            Ok(Box::new(vec![Token::untagged(text)].into_iter()))
        }

        fn name(&self) -> &'static str {
            "rejecting"
        }
    }

    #[test]
    fn test_failing_document_aborts_the_corpus() {
        let pipeline = TermPipeline::new(
            PipelineAnalyzer::new(Arc::new(RejectingTokenizer)),
            TfIdfWeighter::default(),
        );
        let mut texts: Vec<String> = (0..32).map(|i| format!("doc{i}")).collect();
        texts[5] = "bad one".to_string();
        texts[20] = "bad two".to_string();

        let err = pipeline.analyze_corpus(&texts).unwrap_err();
        match err {
            TangoError::Tokenization(msg) => assert!(msg.contains("bad")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(pipeline.weigh_corpus(&texts).is_err());
    }

    #[test]
    fn test_weigh_corpus() {
        let pipeline = TermPipeline::from_config(&unicode_config()).unwrap();
        let weights = pipeline.weigh_corpus(&["x x y", "y y y"]).unwrap();

        assert_eq!(weights.len(), 2);
        assert!(weights[0]["x"] > weights[1]["y"]);
        assert!(!weights[1].contains_key("x"));
    }

    #[test]
    fn test_weigh_empty_corpus() {
        let pipeline = TermPipeline::from_config(&unicode_config()).unwrap();

        let err = pipeline.weigh_corpus::<&str>(&[]).unwrap_err();
        assert!(matches!(err, TangoError::EmptyCorpus(_)));

        let err = pipeline.weigh_corpus(&["", "!!!"]).unwrap_err();
        assert!(matches!(err, TangoError::EmptyCorpus(_)));
    }

    #[test]
    fn test_invalid_noise_pattern_fails_construction() {
        let mut config = unicode_config();
        config.noise_patterns = Some(vec!["(".to_string()]);

        let err = TermPipeline::from_config(&config).unwrap_err();
        assert!(matches!(err, TangoError::InvalidPattern(_)));
    }

    #[test]
    fn test_stopword_source_failure_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = unicode_config();
        config.stopwords = StopwordSourceConfig::File {
            path: dir.path().join("missing.txt").display().to_string(),
        };

        let err = TermPipeline::from_config(&config).unwrap_err();
        assert!(matches!(err, TangoError::StopwordSource(_)));
    }
}
