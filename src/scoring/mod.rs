//! ROUGE lexical overlap scoring
//!
//! Compares a generated answer against the retrieved context it was
//! conditioned on. Pure functions: identical inputs always produce identical
//! reports, and empty inputs yield zero scores rather than errors.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Answer, RougeScore, ScoreReport};

/// Score an answer against its own retrieval context
pub fn score(answer: &Answer) -> ScoreReport {
    score_texts(&answer.text, &answer.retrieval.context_text())
}

/// Score a prediction text against a reference text
pub fn score_texts(prediction: &str, reference: &str) -> ScoreReport {
    let pred = tokenize(prediction);
    let reference = tokenize(reference);

    ScoreReport {
        rouge1: rouge_n(&pred, &reference, 1),
        rouge2: rouge_n(&pred, &reference, 2),
        rouge_l: rouge_l(&pred, &reference),
    }
}

/// Lowercased word tokens; punctuation is not a token
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// N-gram overlap with multiset (clipped) counting
fn rouge_n(pred: &[String], reference: &[String], n: usize) -> RougeScore {
    if pred.len() < n || reference.len() < n {
        return RougeScore::zero();
    }

    let pred_counts = ngram_counts(pred, n);
    let ref_counts = ngram_counts(reference, n);

    let overlap: usize = pred_counts
        .iter()
        .map(|(gram, count)| count.min(ref_counts.get(gram).unwrap_or(&0)))
        .sum();

    let pred_total = pred.len() + 1 - n;
    let ref_total = reference.len() + 1 - n;

    triple(overlap as f64, pred_total as f64, ref_total as f64)
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Longest-common-subsequence overlap
fn rouge_l(pred: &[String], reference: &[String]) -> RougeScore {
    if pred.is_empty() || reference.is_empty() {
        return RougeScore::zero();
    }

    let lcs = lcs_length(pred, reference);
    triple(lcs as f64, pred.len() as f64, reference.len() as f64)
}

/// LCS length with a rolling row
fn lcs_length(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for item_a in a {
        for (j, item_b) in b.iter().enumerate() {
            current[j + 1] = if item_a == item_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}

fn triple(overlap: f64, pred_total: f64, ref_total: f64) -> RougeScore {
    let precision = overlap / pred_total;
    let recall = overlap / ref_total;
    let f_measure = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    RougeScore {
        precision,
        recall,
        f_measure,
    }
}
