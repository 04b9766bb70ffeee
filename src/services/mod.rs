// Content Detector Core Services

pub mod text_processor;
pub mod language_detector;
pub mod config_store;
pub mod i18n;
pub mod detection;

pub use text_processor::*;
pub use language_detector::{detect_language, supported_languages};
pub use config_store::*;
pub use i18n::{translate, UiLanguage};

// Re-export detection module functions
pub use detection::{
    analyze_burstiness,
    analyze_image_characteristics,
    analyze_multilingual_patterns,
    analyze_syntactic_complexity,
    calculate_perplexity,
    compute_lexical_metrics,
    enhanced_text_analysis,
    image_inference,
    ImageClassifier,
    PlaceholderCnn,
};
