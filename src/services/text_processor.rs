// Text Processing Service
// Tokenization and sentence splitting shared by the detectors

use regex::Regex;
use std::sync::OnceLock;

fn sentence_terminator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Latin terminators plus Devanagari danda and double danda
    RE.get_or_init(|| Regex::new(r"[.!?।॥]+").expect("sentence terminator regex"))
}

/// Whitespace-separated words, case preserved
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lowercased whitespace-separated tokens
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split on runs of sentence-terminal punctuation, trimming each piece and
/// discarding empty ones.
pub fn split_sentences(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }
    sentence_terminator_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Character count in Unicode scalar values
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Word count of every sentence, in order
pub fn sentence_word_counts(sentences: &[&str]) -> Vec<usize> {
    sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by n)
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    Some(values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64)
}

/// Derived attributes of one text sample, computed once per analysis
#[derive(Debug, Clone)]
pub struct TextSample<'a> {
    pub text: &'a str,
    pub words: Vec<&'a str>,
    pub sentences: Vec<&'a str>,
    pub char_count: usize,
}

impl<'a> TextSample<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            words: split_words(text),
            sentences: split_sentences(text),
            char_count: char_count(text),
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn sentence_lengths(&self) -> Vec<f64> {
        sentence_word_counts(&self.sentences)
            .into_iter()
            .map(|n| n as f64)
            .collect()
    }

    /// Mean words per sentence, 0 for text without sentences
    pub fn avg_sentence_length(&self) -> f64 {
        mean(&self.sentence_lengths()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_discards_empty_segments() {
        let sentences = split_sentences("One two. Three!! Four?  ...");
        assert_eq!(sentences, vec!["One two", "Three", "Four"]);
    }

    #[test]
    fn test_split_sentences_devanagari_terminators() {
        let text = "मैं घर जा रहा हूँ। तुम कहाँ हो॥ ठीक है";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "मैं घर जा रहा हूँ");
    }

    #[test]
    fn test_split_sentences_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_lowercase_tokens() {
        assert_eq!(lowercase_tokens("The CAT\tsat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_char_count_uses_scalar_values() {
        assert_eq!(char_count("नमस्ते"), 6);
        assert_eq!(char_count("abc"), 3);
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_variance(&[3.0, 3.0, 3.0]), Some(0.0));
        let v = population_variance(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((v - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_text_sample_stats() {
        let sample = TextSample::new("A b c. D e. F");
        assert_eq!(sample.word_count(), 6);
        assert_eq!(sample.sentence_count(), 3);
        assert!((sample.avg_sentence_length() - 2.0).abs() < 1e-12);
        assert_eq!(TextSample::new("").avg_sentence_length(), 0.0);
    }
}
