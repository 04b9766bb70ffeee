// Text Score Combiner
// Rule-based additive scoring over lexical metrics, pattern counts and
// sentence-length variance. Each rule is evaluated once and contributes both
// its score delta and its indicator string; rules run in indicator order.

use crate::models::{
    pattern_count, BasicStats, LanguageCode, LanguageInfo, LexicalMetrics, PatternCategory,
    PatternCounts, TextInsights,
};
use crate::services::language_detector::detect_language;
use crate::services::text_processor::{population_variance, TextSample};

use super::lexical::compute_lexical_metrics;
use super::patterns::{analyze_multilingual_patterns, has_pattern_table};

const PRIOR: f64 = 0.5;

const PERPLEXITY_LOW: f64 = 50.0;
const PERPLEXITY_HIGH: f64 = 150.0;
const PERPLEXITY_WEIGHT: f64 = 0.2;

const BURSTINESS_HIGH: f64 = 0.3;
const BURSTINESS_LOW: f64 = 0.1;
const BURSTINESS_WEIGHT: f64 = 0.15;

const COMPLEXITY_HIGH: f64 = 0.8;
const COMPLEXITY_LOW: f64 = 0.4;
const COMPLEXITY_WEIGHT: f64 = 0.15;

const FORMAL_PER_SENTENCE: f64 = 0.4;
const PERSONAL_PER_WORD: f64 = 0.03;
const PERSONAL_MIN_WORDS: usize = 30;
const PATTERN_WEIGHT: f64 = 0.1;

const VARIANCE_MIN_SENTENCES: usize = 2;
const SENTENCE_VARIANCE_LOW: f64 = 2.0;
const VARIANCE_WEIGHT: f64 = 0.1;

pub const INDICATOR_LOW_PERPLEXITY: &str = "Low perplexity (predictable word patterns)";
pub const INDICATOR_LOW_BURSTINESS: &str = "Low word repetition burstiness";
pub const INDICATOR_SIMPLE_STRUCTURE: &str = "Simple sentence structures";
pub const INDICATOR_FEW_PRONOUNS: &str = "Limited personal pronouns";
pub const INDICATOR_HIGH_PERPLEXITY: &str = "High perplexity (creative word usage)";
pub const INDICATOR_NATURAL_REPETITION: &str = "Natural word repetition patterns";
pub const INDICATOR_INFORMAL: &str = "Informal language usage";
pub const INDICATOR_COMPLEX_STRUCTURE: &str = "Complex sentence structures";

#[derive(Debug, Clone)]
struct ScoreCard {
    ai_score: f64,
    human_score: f64,
    ai_indicators: Vec<String>,
    human_indicators: Vec<String>,
}

impl ScoreCard {
    fn new() -> Self {
        Self {
            ai_score: PRIOR,
            human_score: PRIOR,
            ai_indicators: Vec::new(),
            human_indicators: Vec::new(),
        }
    }

    fn toward_ai(&mut self, delta: f64, indicator: Option<&str>) {
        self.ai_score += delta;
        if let Some(text) = indicator {
            self.ai_indicators.push(text.to_string());
        }
    }

    /// Record an AI indicator without moving the score
    fn note_ai(&mut self, indicator: &str) {
        self.ai_indicators.push(indicator.to_string());
    }

    fn toward_human(&mut self, delta: f64, indicator: Option<&str>) {
        self.human_score += delta;
        if let Some(text) = indicator {
            self.human_indicators.push(text.to_string());
        }
    }

    /// (ai_probability, human_probability)
    fn probabilities(&self) -> (f64, f64) {
        let ai = self.ai_score / (self.ai_score + self.human_score);
        (ai, 1.0 - ai)
    }
}

fn score_metrics(card: &mut ScoreCard, metrics: &LexicalMetrics) {
    if metrics.perplexity < PERPLEXITY_LOW {
        card.toward_ai(PERPLEXITY_WEIGHT, Some(INDICATOR_LOW_PERPLEXITY));
    } else if metrics.perplexity > PERPLEXITY_HIGH {
        card.toward_human(PERPLEXITY_WEIGHT, Some(INDICATOR_HIGH_PERPLEXITY));
    }

    if metrics.burstiness > BURSTINESS_HIGH {
        card.toward_human(BURSTINESS_WEIGHT, Some(INDICATOR_NATURAL_REPETITION));
    } else if metrics.burstiness < BURSTINESS_LOW {
        card.toward_ai(BURSTINESS_WEIGHT, Some(INDICATOR_LOW_BURSTINESS));
    }

    if metrics.syntactic_complexity < COMPLEXITY_LOW {
        card.toward_ai(COMPLEXITY_WEIGHT, Some(INDICATOR_SIMPLE_STRUCTURE));
    }
}

/// High complexity is scored after the pattern rules so the informal indicator
/// precedes it in the human list.
fn score_complex_structure(card: &mut ScoreCard, metrics: &LexicalMetrics) {
    if metrics.syntactic_complexity > COMPLEXITY_HIGH {
        card.toward_human(COMPLEXITY_WEIGHT, Some(INDICATOR_COMPLEX_STRUCTURE));
    }
}

fn score_patterns(
    card: &mut ScoreCard,
    language: LanguageCode,
    patterns: &PatternCounts,
    sample: &TextSample<'_>,
) {
    let word_count = sample.word_count();
    let formal = pattern_count(patterns, PatternCategory::Formal) as f64;
    let informal = pattern_count(patterns, PatternCategory::Informal);
    let personal = pattern_count(patterns, PatternCategory::Personal) as f64;
    let few_pronouns = personal < word_count as f64 * PERSONAL_PER_WORD;

    if has_pattern_table(language) {
        if formal > sample.sentence_count() as f64 * FORMAL_PER_SENTENCE {
            card.toward_ai(PATTERN_WEIGHT, None);
        }
        if informal > 0 {
            card.toward_human(PATTERN_WEIGHT, Some(INDICATOR_INFORMAL));
        }
        if few_pronouns && word_count > PERSONAL_MIN_WORDS {
            card.toward_ai(PATTERN_WEIGHT, None);
        }
    }

    // The pronoun indicator is reported for every language and length,
    // the score delta only for languages with a pattern table.
    if few_pronouns {
        card.note_ai(INDICATOR_FEW_PRONOUNS);
    }
}

fn score_sentence_variance(card: &mut ScoreCard, sample: &TextSample<'_>) {
    if sample.sentence_count() <= VARIANCE_MIN_SENTENCES {
        return;
    }
    let variance = population_variance(&sample.sentence_lengths()).unwrap_or(0.0);
    if variance < SENTENCE_VARIANCE_LOW {
        card.toward_ai(VARIANCE_WEIGHT, None);
    } else {
        card.toward_human(VARIANCE_WEIGHT, None);
    }
}

/// Score `text` and return `(ai_probability, human_probability, insights)`.
/// The pair always sums to 1; degenerate input lands near 0.5/0.5.
pub fn enhanced_text_analysis(text: &str) -> (f64, f64, TextInsights) {
    let language = detect_language(text);
    let sample = TextSample::new(text);
    let metrics = compute_lexical_metrics(text);
    let patterns = analyze_multilingual_patterns(text, language);

    let mut card = ScoreCard::new();
    score_metrics(&mut card, &metrics);
    score_patterns(&mut card, language, &patterns, &sample);
    score_complex_structure(&mut card, &metrics);
    score_sentence_variance(&mut card, &sample);

    let (ai_probability, human_probability) = card.probabilities();

    let insights = TextInsights {
        language: LanguageInfo::from(language),
        basic_stats: BasicStats {
            characters: sample.char_count,
            words: sample.word_count(),
            sentences: sample.sentence_count(),
            avg_sentence_length: sample.avg_sentence_length(),
        },
        advanced_metrics: metrics,
        language_patterns: patterns,
        ai_indicators: card.ai_indicators,
        human_indicators: card.human_indicators,
    };

    (ai_probability, human_probability, insights)
}
