// UI translations
// Static English/Hindi label tables; missing Hindi entries fall back to English.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    #[default]
    En,
    Hi,
}

impl UiLanguage {
    pub fn code(&self) -> &'static str {
        match self {
            UiLanguage::En => "en",
            UiLanguage::Hi => "hi",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            UiLanguage::En => "English",
            UiLanguage::Hi => "हिन्दी",
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UiLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(UiLanguage::En),
            "hi" => Ok(UiLanguage::Hi),
            other => Err(format!("Unsupported UI language: {}", other)),
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("title", "🤖 AI Content Detector"),
    ("subtitle", "Advanced detection for AI-generated images and text"),
    ("image_header", "AI-Generated Image Detection"),
    ("real_photo", "Real Photo Probability"),
    ("ai_generated", "AI-Generated Probability"),
    ("confidence", "Confidence"),
    ("high_confidence_human", "HIGH CONFIDENCE - HUMAN WRITTEN"),
    ("high_confidence_ai", "HIGH CONFIDENCE - AI GENERATED"),
    ("likely_human", "LIKELY HUMAN WRITTEN"),
    ("likely_ai", "LIKELY AI GENERATED"),
    ("detailed_analysis", "Detailed Analysis"),
    ("method", "Method"),
    ("image_size", "Image Size"),
    ("aspect_ratio", "Aspect Ratio"),
    ("analysis", "Analysis"),
    ("supported_languages", "Supported Languages"),
    ("detected_language", "Detected Language"),
    ("human_written", "Human-Written"),
    ("advanced_metrics", "Advanced Text Metrics"),
    ("perplexity", "Perplexity"),
    ("burstiness", "Burstiness"),
    ("complexity", "Complexity"),
    ("ai_indicators", "AI Indicators Found"),
    ("human_indicators", "Human Indicators Found"),
    ("language_analysis", "Language-Specific Analysis"),
    ("no_ai_indicators", "No strong AI indicators detected"),
    ("limited_human_patterns", "Limited human writing patterns"),
    ("language_patterns", "Language Patterns Detected"),
    ("text_statistics", "Text Statistics"),
    ("characters", "Characters"),
    ("words", "Words"),
    ("sentences", "Sentences"),
    ("avg_sentence_length", "Avg. Sentence Length"),
    ("heuristic_analysis", "Heuristic Analysis"),
    ("deep_learning", "Deep Learning Analysis"),
    ("short_text_warning", "For best results, please provide at least 30 characters of text."),
    ("empty_text", "Please enter some text to analyze."),
    ("footer", "Advanced AI Content Detector | Multi-Lingual Support • 22+ Indian Languages"),
    ("language", "Language"),
];

const HI: &[(&str, &str)] = &[
    ("title", "🤖 एआई कंटेंट डिटेक्टर"),
    ("subtitle", "एआई-जनित छवियों और पाठ के लिए उन्नत पहचान"),
    ("image_header", "एआई-जनित छवि पहचान"),
    ("real_photo", "वास्तविक फोटो संभावना"),
    ("ai_generated", "एआई-जनित संभावना"),
    ("confidence", "विश्वसनीयता"),
    ("high_confidence_human", "उच्च विश्वास - मानव लिखित"),
    ("high_confidence_ai", "उच्च विश्वास - एआई जनित"),
    ("likely_human", "संभावित मानव लिखित"),
    ("likely_ai", "संभावित एआई जनित"),
    ("detailed_analysis", "विस्तृत विश्लेषण"),
    ("method", "विधि"),
    ("image_size", "छवि आकार"),
    ("aspect_ratio", "पहलू अनुपात"),
    ("analysis", "विश्लेषण"),
    ("supported_languages", "समर्थित भाषाएँ"),
    ("detected_language", "पहचानी गई भाषा"),
    ("human_written", "मानव-लिखित"),
    ("advanced_metrics", "उन्नत पाठ मेट्रिक्स"),
    ("perplexity", "पेरप्लेक्सिटी"),
    ("burstiness", "बर्स्टिनेस"),
    ("complexity", "जटिलता"),
    ("ai_indicators", "एआई संकेतक मिले"),
    ("human_indicators", "मानव संकेतक मिले"),
    ("language_analysis", "भाषा-विशिष्ट विश्लेषण"),
    ("no_ai_indicators", "कोई मजबूत एआई संकेतक नहीं मिले"),
    ("limited_human_patterns", "सीमित मानव लेखन पैटर्न"),
    ("language_patterns", "भाषा पैटर्न मिले"),
    ("text_statistics", "पाठ आंकड़े"),
    ("characters", "वर्ण"),
    ("words", "शब्द"),
    ("sentences", "वाक्य"),
    ("avg_sentence_length", "औसत वाक्य लंबाई"),
    ("heuristic_analysis", "ह्युरिस्टिक विश्लेषण"),
    ("deep_learning", "डीप लर्निंग विश्लेषण"),
    ("footer", "उन्नत एआई कंटेंट डिटेक्टर | बहुभाषी समर्थन • 22+ भारतीय भाषाएँ"),
    ("language", "भाषा"),
];

fn table(lang: UiLanguage) -> &'static [(&'static str, &'static str)] {
    match lang {
        UiLanguage::En => EN,
        UiLanguage::Hi => HI,
    }
}

fn lookup(lang: UiLanguage, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Label for `key` in `lang`, falling back to English, then to the key itself
pub fn translate<'a>(lang: UiLanguage, key: &'a str) -> &'a str {
    let found: Option<&'a str> = lookup(lang, key).or_else(|| lookup(UiLanguage::En, key));
    found.unwrap_or(key)
}
