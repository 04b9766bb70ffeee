// Lexical Statistics
// Closed-form text metrics with fixed fallbacks for short input

use crate::models::LexicalMetrics;
use crate::services::text_processor::{lowercase_tokens, mean, split_sentences};
use std::collections::{HashMap, HashSet};

/// Returned by `calculate_perplexity` for fewer than `PERPLEXITY_MIN_TOKENS` tokens
pub const PERPLEXITY_SENTINEL: f64 = 100.0;
pub const PERPLEXITY_MIN_TOKENS: usize = 10;

/// Returned by `analyze_burstiness` for fewer than `BURSTINESS_MIN_TOKENS` tokens
pub const BURSTINESS_SENTINEL: f64 = 0.5;
pub const BURSTINESS_MIN_TOKENS: usize = 20;

/// Returned by `analyze_syntactic_complexity` when too few sentences qualify
pub const COMPLEXITY_SENTINEL: f64 = 0.5;
pub const COMPLEXITY_MIN_SENTENCES: usize = 3;
pub const COMPLEXITY_MIN_SENTENCE_WORDS: usize = 5;
const COMPLEXITY_WORD_LEN_SCALE: f64 = 5.0;

/// Unigram perplexity proxy: `exp(-mean(ln p(token)))` with p the empirical
/// relative frequency. Diverse, low-repetition text scores higher.
pub fn calculate_perplexity(text: &str) -> f64 {
    let tokens = lowercase_tokens(text);
    if tokens.len() < PERPLEXITY_MIN_TOKENS {
        return PERPLEXITY_SENTINEL;
    }

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for t in &tokens {
        *freq.entry(t.as_str()).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    let log_sum: f64 = tokens
        .iter()
        .map(|t| (freq[t.as_str()] as f64 / total).ln())
        .sum();

    (-log_sum / total).exp()
}

/// Mean of `1/(distance + 1)` over every repeated token occurrence, where the
/// distance is measured from that token's previous occurrence.
pub fn analyze_burstiness(text: &str) -> f64 {
    let tokens = lowercase_tokens(text);
    if tokens.len() < BURSTINESS_MIN_TOKENS {
        return BURSTINESS_SENTINEL;
    }

    let mut last_seen: HashMap<&str, usize> = HashMap::new();
    let mut burst_scores: Vec<f64> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if let Some(prev) = last_seen.insert(token.as_str(), i) {
            let distance = (i - prev) as f64;
            burst_scores.push(1.0 / (distance + 1.0));
        }
    }

    mean(&burst_scores).unwrap_or(0.0)
}

/// Per-sentence `(unique/count) * (mean_word_len/5)` averaged over sentences
/// with at least five words.
pub fn analyze_syntactic_complexity(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.len() < COMPLEXITY_MIN_SENTENCES {
        return COMPLEXITY_SENTINEL;
    }

    let scores: Vec<f64> = sentences
        .iter()
        .filter_map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.len() < COMPLEXITY_MIN_SENTENCE_WORDS {
                return None;
            }
            let word_count = words.len() as f64;
            let unique = words.iter().collect::<HashSet<_>>().len() as f64;
            let avg_word_len =
                words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count;
            Some((unique / word_count) * (avg_word_len / COMPLEXITY_WORD_LEN_SCALE))
        })
        .collect();

    mean(&scores).unwrap_or(COMPLEXITY_SENTINEL)
}

/// All three metrics for one text
pub fn compute_lexical_metrics(text: &str) -> LexicalMetrics {
    LexicalMetrics {
        perplexity: calculate_perplexity(text),
        burstiness: analyze_burstiness(text),
        syntactic_complexity: analyze_syntactic_complexity(text),
    }
}
