// Verdict utilities
// Verdicts only band the probabilities for display; they never change them.

use crate::models::Verdict;

/// Text verdicts need a stronger lead than image verdicts to count as high confidence
pub const TEXT_HIGH_CONFIDENCE: f64 = 0.75;
pub const IMAGE_HIGH_CONFIDENCE: f64 = 0.7;

const PERPLEXITY_LABEL_CUTOFF: f64 = 80.0;
const BURSTINESS_LABEL_CUTOFF: f64 = 0.2;
const COMPLEXITY_LABEL_CUTOFF: f64 = 0.5;

/// Spread between the two probabilities, in [0, 1]
pub fn confidence(a: f64, b: f64) -> f64 {
    (a - b).abs().clamp(0.0, 1.0)
}

fn band(ai: f64, other: f64, high: f64) -> Verdict {
    if other > high {
        Verdict::HighConfidenceHuman
    } else if ai > high {
        Verdict::HighConfidenceAi
    } else if other > ai {
        Verdict::LikelyHuman
    } else {
        Verdict::LikelyAi
    }
}

pub fn text_verdict(ai_probability: f64, human_probability: f64) -> Verdict {
    band(ai_probability, human_probability, TEXT_HIGH_CONFIDENCE)
}

pub fn image_verdict(ai_probability: f64, real_probability: f64) -> Verdict {
    band(ai_probability, real_probability, IMAGE_HIGH_CONFIDENCE)
}

pub fn perplexity_label(perplexity: f64) -> &'static str {
    if perplexity < PERPLEXITY_LABEL_CUTOFF {
        "Low (AI-like)"
    } else {
        "High (Human-like)"
    }
}

pub fn burstiness_label(burstiness: f64) -> &'static str {
    if burstiness < BURSTINESS_LABEL_CUTOFF {
        "Low (AI-like)"
    } else {
        "High (Human-like)"
    }
}

pub fn complexity_label(complexity: f64) -> &'static str {
    if complexity < COMPLEXITY_LABEL_CUTOFF {
        "Simple (AI-like)"
    } else {
        "Complex (Human-like)"
    }
}

pub fn text_summary(verdict: Verdict, language: &str, ai: f64, human: f64) -> String {
    match verdict {
        Verdict::HighConfidenceHuman => format!(
            "Strong evidence of natural writing patterns in {} ({:.1}% confidence)",
            language,
            human * 100.0
        ),
        Verdict::HighConfidenceAi => format!(
            "Clear AI writing patterns detected in {} ({:.1}% confidence)",
            language,
            ai * 100.0
        ),
        Verdict::LikelyHuman => format!(
            "Moderate confidence - appears natural in {} ({:.1}% confidence)",
            language,
            human * 100.0
        ),
        Verdict::LikelyAi => format!(
            "Moderate confidence - some AI patterns in {} ({:.1}% confidence)",
            language,
            ai * 100.0
        ),
    }
}

pub fn image_summary(verdict: Verdict, ai: f64, real: f64) -> String {
    match verdict {
        Verdict::HighConfidenceHuman => format!(
            "High confidence ({:.1}%) - This appears to be a genuine photograph",
            real * 100.0
        ),
        Verdict::HighConfidenceAi => format!(
            "High confidence ({:.1}%) - AI generation patterns detected",
            ai * 100.0
        ),
        Verdict::LikelyHuman => format!(
            "Low confidence ({:.1}%) - Likely real but uncertain",
            real * 100.0
        ),
        Verdict::LikelyAi => format!(
            "Low confidence ({:.1}%) - Some AI patterns detected",
            ai * 100.0
        ),
    }
}
