//! Criterion benchmarks for the term weighting pipeline.
//!
//! - Per-document analysis, single and batched
//! - Corpus TF-IDF weighting at different corpus sizes
//! - Threshold merge and ranking of the weighted output

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tango::analysis::token::{Token, TokenSequence};
use tango::config::{PipelineConfig, StopwordSourceConfig, TokenizerKind};
use tango::pipeline::TermPipeline;
use tango::selection::{filter_by_threshold, top_n};
use tango::weighting::{Norm, TfIdfConfig, TfIdfWeighter};

const WORDS: &[&str] = &[
    "cloud", "word", "term", "weight", "corpus", "document", "lemma", "token", "noise",
    "pattern", "stopword", "frequency", "inverse", "rare", "common", "verb", "noun",
    "the", "of", "a", "dictionary", "segment", "normalize", "filter", "render", "font",
];

/// Generate documents with a skewed, repeatable word distribution.
fn generate_documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let length = 30 + (i % 70);
            (0..length)
                .map(|j| WORDS[(i * 7 + j * 13 + j * j) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn tokenize_documents(documents: &[String]) -> Vec<TokenSequence> {
    documents
        .iter()
        .map(|doc| doc.split_whitespace().map(Token::untagged).collect())
        .collect()
}

fn unicode_pipeline() -> TermPipeline {
    let mut config = PipelineConfig::default();
    config.tokenizer.kind = TokenizerKind::UnicodeWord;
    config.noise_patterns = Some(vec![r"https?://\S+".to_string()]);
    config.stopwords = StopwordSourceConfig::Inline {
        words: vec!["the".to_string(), "of".to_string(), "a".to_string()],
    };
    TermPipeline::from_config(&config).unwrap()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let pipeline = unicode_pipeline();
    let documents = generate_documents(200);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| black_box(pipeline.analyze(black_box(&documents[0])).unwrap()))
    });

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("analyze_corpus", |b| {
        b.iter(|| black_box(pipeline.analyze_corpus(black_box(&documents)).unwrap()))
    });

    group.finish();
}

fn bench_weighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighting");
    group.sample_size(20);

    for size in [100, 1000] {
        let corpus = tokenize_documents(&generate_documents(size));
        group.throughput(Throughput::Elements(size as u64));

        let weighter = TfIdfWeighter::default();
        group.bench_with_input(BenchmarkId::new("tfidf_default", size), &corpus, |b, corpus| {
            b.iter(|| black_box(weighter.weigh(corpus).unwrap()))
        });

        let weighter = TfIdfWeighter::new(TfIdfConfig {
            smooth_idf: true,
            norm: Some(Norm::L2),
            ..Default::default()
        });
        group.bench_with_input(BenchmarkId::new("tfidf_smooth_l2", size), &corpus, |b, corpus| {
            b.iter(|| black_box(weighter.weigh(corpus).unwrap()))
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let corpus = tokenize_documents(&generate_documents(500));
    let weights = TfIdfWeighter::default().weigh(&corpus).unwrap();

    group.bench_function("filter_by_threshold", |b| {
        b.iter(|| black_box(filter_by_threshold(black_box(&weights), 0.05)))
    });

    let merged = filter_by_threshold(&weights, 0.0);
    group.bench_function("top_n", |b| b.iter(|| black_box(top_n(black_box(&merged), 10))));

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_weighting, bench_selection);

criterion_main!(benches);
