// Command layer consumed by the UI (CLI) front end.
// Wraps the pure scorers with input checks, verdicts, localized labels and logging.

use crate::models::{
    ImageDetectResponse, ImageMethod, ImageReport, ImageSample, LanguageInfo, MetricLabels,
    TextDetectRequest, TextDetectResponse,
};
use crate::services::detection::verdict::{
    burstiness_label, complexity_label, confidence, image_summary, image_verdict,
    perplexity_label, text_summary, text_verdict,
};
use crate::services::detection::{
    analyze_image_characteristics, enhanced_text_analysis, image_inference, ImageClassifier,
};
use crate::services::i18n::{translate, UiLanguage};
use crate::services::language_detector::supported_languages;
use crate::services::text_processor::char_count;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Below this many characters metric reliability degrades; scoring still runs
pub const MIN_RELIABLE_CHARS: usize = 30;

/// Analyze a block of text. Blank input is the only rejected case.
pub fn detect_text(request: TextDetectRequest) -> Result<TextDetectResponse, String> {
    let ui = request.ui_language;
    let text = request.text.as_str();
    if text.trim().is_empty() {
        warn!("[DETECT_TEXT] empty input rejected");
        return Err(translate(ui, "empty_text").to_string());
    }

    let t0 = Instant::now();
    let mut warnings = Vec::new();
    let chars = char_count(text);
    if char_count(text.trim()) < MIN_RELIABLE_CHARS {
        warn!(chars, "[DETECT_TEXT] short input, metrics unreliable");
        warnings.push(translate(ui, "short_text_warning").to_string());
    }

    let (ai, human, insights) = enhanced_text_analysis(text);
    let verdict = text_verdict(ai, human);
    let metrics = insights.advanced_metrics;

    debug!(
        perplexity = metrics.perplexity,
        burstiness = metrics.burstiness,
        complexity = metrics.syntactic_complexity,
        patterns = insights.language_patterns.len(),
        "[DETECT_TEXT] metrics computed"
    );
    info!(
        chars,
        language = insights.language.code.code(),
        ai_probability = ai,
        verdict = ?verdict,
        elapsed_us = t0.elapsed().as_micros() as u64,
        "[DETECT_TEXT] analysis complete"
    );

    Ok(TextDetectResponse {
        ai_probability: ai,
        human_probability: human,
        confidence: confidence(ai, human),
        verdict,
        verdict_label: translate(ui, verdict.label_key()).to_string(),
        summary: text_summary(verdict, &insights.language.detected, ai, human),
        metric_labels: MetricLabels {
            perplexity: perplexity_label(metrics.perplexity).to_string(),
            burstiness: burstiness_label(metrics.burstiness).to_string(),
            syntactic_complexity: complexity_label(metrics.syntactic_complexity).to_string(),
        },
        warnings,
        insights,
    })
}

/// Analyze a decoded image with the chosen method. `model` backs the
/// deep-learning path and is ignored by the heuristic one.
pub fn detect_image(
    image: &ImageSample,
    method: ImageMethod,
    ui_language: UiLanguage,
    model: &dyn ImageClassifier,
) -> ImageDetectResponse {
    let (ai, real, description) = match method {
        ImageMethod::Heuristic => {
            let (ai, real) = analyze_image_characteristics(image);
            (ai, real, "Heuristic analysis based on image characteristics")
        }
        ImageMethod::DeepLearning => {
            let (ai, real) = image_inference(image, model);
            (ai, real, "Deep learning analysis using custom CNN")
        }
    };
    let verdict = image_verdict(ai, real);

    info!(
        width = image.width(),
        height = image.height(),
        method = ?method,
        ai_probability = ai,
        verdict = ?verdict,
        "[DETECT_IMAGE] analysis complete"
    );

    ImageDetectResponse {
        ai_probability: ai,
        real_probability: real,
        confidence: confidence(ai, real),
        verdict,
        verdict_label: translate(ui_language, verdict.label_key()).to_string(),
        summary: image_summary(verdict, ai, real),
        report: ImageReport {
            method: translate(ui_language, method.label_key()).to_string(),
            width: image.width(),
            height: image.height(),
            aspect_ratio: image.aspect_ratio(),
            analysis: description.to_string(),
        },
    }
}

/// Languages the detector can recognise, in detection order
pub fn list_languages() -> Vec<LanguageInfo> {
    supported_languages().into_iter().map(LanguageInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageFormat, Verdict};
    use crate::services::PlaceholderCnn;

    fn request(text: &str, ui: UiLanguage) -> TextDetectRequest {
        TextDetectRequest {
            text: text.to_string(),
            ui_language: ui,
        }
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = detect_text(request("   \n", UiLanguage::En)).unwrap_err();
        assert_eq!(err, "Please enter some text to analyze.");
    }

    #[test]
    fn test_short_text_warns_but_scores() {
        let resp = detect_text(request("Short note.", UiLanguage::En)).unwrap();
        assert_eq!(resp.warnings.len(), 1);
        assert!((resp.ai_probability + resp.human_probability - 1.0).abs() < 1e-12);
        assert!((resp.confidence - (resp.ai_probability - resp.human_probability).abs()).abs() < 1e-12);
    }

    #[test]
    fn test_hindi_ui_labels() {
        let text = "The system is good. The system is good. The system is good. The system is good.";
        let resp = detect_text(request(text, UiLanguage::Hi)).unwrap();
        assert!(resp.warnings.is_empty());
        assert_eq!(resp.verdict_label, translate(UiLanguage::Hi, resp.verdict.label_key()));
        assert_eq!(resp.metric_labels.perplexity, "Low (AI-like)");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let resp = detect_text(request("Just a few words here to check output.", UiLanguage::En)).unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("aiProbability").is_some());
        assert!(json["insights"].get("basicStats").is_some());
    }

    #[test]
    fn test_detect_image_heuristic() {
        let img = ImageSample::solid(512, 512, Some(ImageFormat::Jpeg), [90, 90, 90]).unwrap();
        let model = PlaceholderCnn::default();
        let resp = detect_image(&img, ImageMethod::Heuristic, UiLanguage::En, &model);
        assert!(resp.ai_probability > 0.6);
        assert_eq!(resp.report.method, "Heuristic Analysis");
        assert_eq!(resp.report.width, 512);
        assert_eq!(resp.verdict, Verdict::LikelyAi);
    }

    #[test]
    fn test_detect_image_deep_learning_is_a_distribution() {
        let img = ImageSample::solid(30, 20, None, [1, 2, 3]).unwrap();
        let model = PlaceholderCnn::with_seed(3);
        let resp = detect_image(&img, ImageMethod::DeepLearning, UiLanguage::Hi, &model);
        assert!((resp.ai_probability + resp.real_probability - 1.0).abs() < 1e-12);
        assert_eq!(resp.report.method, "डीप लर्निंग विश्लेषण");
    }

    #[test]
    fn test_list_languages() {
        let langs = list_languages();
        assert_eq!(langs.len(), 13);
        assert_eq!(langs[1].detected, "Hindi");
    }
}
