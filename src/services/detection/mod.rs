// Detection Module
// Heuristic AI-content detection organized into specialized submodules:
// - lexical: perplexity proxy, burstiness and syntactic complexity
// - patterns: language-specific lexical marker counts
// - text_scorer: combines text signals into probabilities and indicators
// - image_heuristics: metadata-based image scoring
// - image_model: placeholder network inference path
// - verdict: display bands and summaries for probability pairs

pub mod lexical;
pub mod patterns;
pub mod text_scorer;
pub mod image_heuristics;
pub mod image_model;
pub mod verdict;

// Re-export commonly used functions
pub use lexical::{
    analyze_burstiness,
    analyze_syntactic_complexity,
    calculate_perplexity,
    compute_lexical_metrics,
};
pub use patterns::{analyze_multilingual_patterns, has_pattern_table};
pub use text_scorer::enhanced_text_analysis;
pub use image_heuristics::analyze_image_characteristics;
pub use image_model::{image_inference, ImageClassifier, PlaceholderCnn};
pub use verdict::{confidence, image_verdict, text_verdict};
