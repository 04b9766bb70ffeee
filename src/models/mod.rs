// Content Detector Data Models
// Shared request/response and report types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============ Language ============

/// Script-derived language code. `Hi`/`Mr` and `Bn`/`As` share Unicode blocks,
/// so detection can only ever report the first of each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Hi,
    Bn,
    Te,
    Ta,
    Ml,
    Mr,
    Gu,
    Kn,
    Pa,
    Or,
    As,
    Ur,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 13] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Bn,
        LanguageCode::Te,
        LanguageCode::Ta,
        LanguageCode::Ml,
        LanguageCode::Mr,
        LanguageCode::Gu,
        LanguageCode::Kn,
        LanguageCode::Pa,
        LanguageCode::Or,
        LanguageCode::As,
        LanguageCode::Ur,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Bn => "bn",
            LanguageCode::Te => "te",
            LanguageCode::Ta => "ta",
            LanguageCode::Ml => "ml",
            LanguageCode::Mr => "mr",
            LanguageCode::Gu => "gu",
            LanguageCode::Kn => "kn",
            LanguageCode::Pa => "pa",
            LanguageCode::Or => "or",
            LanguageCode::As => "as",
            LanguageCode::Ur => "ur",
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Bn => "Bengali",
            LanguageCode::Te => "Telugu",
            LanguageCode::Ta => "Tamil",
            LanguageCode::Ml => "Malayalam",
            LanguageCode::Mr => "Marathi",
            LanguageCode::Gu => "Gujarati",
            LanguageCode::Kn => "Kannada",
            LanguageCode::Pa => "Punjabi",
            LanguageCode::Or => "Odia",
            LanguageCode::As => "Assamese",
            LanguageCode::Ur => "Urdu",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LanguageCode::ALL
            .iter()
            .copied()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| format!("Unknown language code: {}", s))
    }
}

// ============ Pattern Analysis ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Formal,
    Emotional,
    Personal,
    Informal,
}

impl PatternCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Formal => "formal",
            PatternCategory::Emotional => "emotional",
            PatternCategory::Personal => "personal",
            PatternCategory::Informal => "informal",
        }
    }
}

/// Match counts per category; empty when the language has no pattern table.
pub type PatternCounts = BTreeMap<PatternCategory, usize>;

/// Count for a category, treating a missing entry as zero
pub fn pattern_count(counts: &PatternCounts, category: PatternCategory) -> usize {
    counts.get(&category).copied().unwrap_or(0)
}

// ============ Text Insights ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LexicalMetrics {
    pub perplexity: f64,
    pub burstiness: f64,
    pub syntactic_complexity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub detected: String,
    pub code: LanguageCode,
}

impl From<LanguageCode> for LanguageInfo {
    fn from(code: LanguageCode) -> Self {
        Self {
            detected: code.name().to_string(),
            code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BasicStats {
    pub characters: usize,
    pub words: usize,
    pub sentences: usize,
    /// Mean words per sentence; 0 when the text has no sentences
    pub avg_sentence_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInsights {
    pub language: LanguageInfo,
    pub basic_stats: BasicStats,
    pub advanced_metrics: LexicalMetrics,
    pub language_patterns: PatternCounts,
    pub ai_indicators: Vec<String>,
    pub human_indicators: Vec<String>,
}

// ============ Images ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Other,
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "other" => Ok(ImageFormat::Other),
            other => Err(format!("Unknown image format: {}", other)),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for packed RGB")]
    PixelBufferMismatch { expected: usize, actual: usize },
}

/// A decoded image: dimensions, source format and optional packed RGB8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSample {
    width: u32,
    height: u32,
    format: Option<ImageFormat>,
    pixels: Option<Vec<u8>>,
}

impl ImageSample {
    pub fn new(
        width: u32,
        height: u32,
        format: Option<ImageFormat>,
        pixels: Option<Vec<u8>>,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        if let Some(buf) = &pixels {
            let expected = width as usize * height as usize * 3;
            if buf.len() != expected {
                return Err(ImageError::PixelBufferMismatch {
                    expected,
                    actual: buf.len(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Image filled with a single RGB colour
    #[cfg(test)]
    pub(crate) fn solid(
        width: u32,
        height: u32,
        format: Option<ImageFormat>,
        rgb: [u8; 3],
    ) -> Result<Self, ImageError> {
        let count = width as usize * height as usize;
        let pixels = rgb.iter().copied().cycle().take(count * 3).collect();
        Self::new(width, height, format, Some(pixels))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// RGB triple at (x, y); `None` without pixel data or out of bounds
    pub(crate) fn rgb_at(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let buf = self.pixels.as_deref()?;
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        buf.get(idx..idx + 3).map(|p| [p[0], p[1], p[2]])
    }
}

// ============ Verdicts ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HighConfidenceHuman,
    HighConfidenceAi,
    LikelyHuman,
    LikelyAi,
}

impl Verdict {
    /// Translation key for the verdict headline
    pub fn label_key(&self) -> &'static str {
        match self {
            Verdict::HighConfidenceHuman => "high_confidence_human",
            Verdict::HighConfidenceAi => "high_confidence_ai",
            Verdict::LikelyHuman => "likely_human",
            Verdict::LikelyAi => "likely_ai",
        }
    }
}

// ============ Detection Requests ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetectRequest {
    pub text: String,
    #[serde(default)]
    pub ui_language: crate::services::UiLanguage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricLabels {
    pub perplexity: String,
    pub burstiness: String,
    pub syntactic_complexity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetectResponse {
    pub ai_probability: f64,
    pub human_probability: f64,
    pub confidence: f64,
    pub verdict: Verdict,
    pub verdict_label: String,
    pub summary: String,
    pub metric_labels: MetricLabels,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub insights: TextInsights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImageMethod {
    #[default]
    Heuristic,
    DeepLearning,
}

impl ImageMethod {
    pub fn label_key(&self) -> &'static str {
        match self {
            ImageMethod::Heuristic => "heuristic_analysis",
            ImageMethod::DeepLearning => "deep_learning",
        }
    }
}

impl FromStr for ImageMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ImageMethod::Heuristic),
            "deep-learning" | "deep_learning" | "cnn" => Ok(ImageMethod::DeepLearning),
            other => Err(format!("Unknown image method: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub method: String,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    pub analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetectResponse {
    pub ai_probability: f64,
    pub real_probability: f64,
    pub confidence: f64,
    pub verdict: Verdict,
    pub verdict_label: String,
    pub summary: String,
    pub report: ImageReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_round_trip_through_str() {
        for code in LanguageCode::ALL {
            assert_eq!(code.code().parse::<LanguageCode>().unwrap(), code);
        }
        assert!("xx".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_language_code_serializes_as_two_letters() {
        let json = serde_json::to_string(&LanguageCode::Hi).unwrap();
        assert_eq!(json, "\"hi\"");
    }

    #[test]
    fn test_image_sample_rejects_zero_dimension() {
        let err = ImageSample::new(0, 10, None, None).unwrap_err();
        assert_eq!(err, ImageError::ZeroDimension { width: 0, height: 10 });
    }

    #[test]
    fn test_image_sample_rejects_short_buffer() {
        let err = ImageSample::new(2, 2, None, Some(vec![0; 11])).unwrap_err();
        assert_eq!(
            err,
            ImageError::PixelBufferMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_solid_image_pixel_access() {
        let img = ImageSample::solid(3, 2, Some(ImageFormat::Png), [10, 20, 30]).unwrap();
        assert_eq!(img.pixels().map(|p| p.len()), Some(18));
        assert_eq!(img.rgb_at(2, 1), Some([10, 20, 30]));
        assert!((img.aspect_ratio() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_pattern_count_defaults_to_zero() {
        let mut counts = PatternCounts::new();
        counts.insert(PatternCategory::Formal, 2);
        assert_eq!(pattern_count(&counts, PatternCategory::Formal), 2);
        assert_eq!(pattern_count(&counts, PatternCategory::Informal), 0);
    }

    #[test]
    fn test_language_code_defaults_to_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn test_parse_image_method() {
        assert_eq!("deep-learning".parse::<ImageMethod>().unwrap(), ImageMethod::DeepLearning);
        assert_eq!("Heuristic".parse::<ImageMethod>().unwrap(), ImageMethod::Heuristic);
        assert!("magic".parse::<ImageMethod>().is_err());
    }
}
