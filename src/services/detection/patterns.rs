// Language-specific lexical pattern matching
// Only Hindi ships a marker table; other languages yield an empty mapping.
// Markers are delimited by the regex crate's Unicode `\b`, which treats Devanagari
// vowel signs, anusvara and visarga as word characters. Markers ending in a mark
// (मैं, अतः, खुशी) therefore match before a space, and हम never matches inside
// हमेशा. Engines that class combining marks as non-word characters count these
// differently; whole-word counting is the intended behavior here.

use crate::models::{LanguageCode, PatternCategory, PatternCounts};
use regex::Regex;
use std::sync::OnceLock;

struct PatternTable {
    entries: Vec<(PatternCategory, Regex)>,
}

fn build_table(entries: &[(PatternCategory, &[&str])]) -> PatternTable {
    PatternTable {
        entries: entries
            .iter()
            .map(|(category, markers)| {
                let alternation = markers
                    .iter()
                    .map(|m| regex::escape(m))
                    .collect::<Vec<_>>()
                    .join("|");
                let re = Regex::new(&format!(r"\b(?:{})\b", alternation))
                    .expect("pattern table regex");
                (*category, re)
            })
            .collect(),
    }
}

fn hindi_table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        build_table(&[
            (
                PatternCategory::Formal,
                &["हालांकि", "इसके अलावा", "इस प्रकार", "परिणामस्वरूप", "अतः"],
            ),
            (
                PatternCategory::Emotional,
                &["प्यार", "खुशी", "दुख", "गुस्सा", "आश्चर्य", "वाह", "अद्भुत"],
            ),
            (
                PatternCategory::Personal,
                &["मैं", "मेरा", "हम", "हमारा", "तुम", "आप"],
            ),
            (
                PatternCategory::Informal,
                &["हाहा", "वाह", "अरे", "यार", "कमाल"],
            ),
        ])
    })
}

fn table_for(language: LanguageCode) -> Option<&'static PatternTable> {
    match language {
        LanguageCode::Hi => Some(hindi_table()),
        _ => None,
    }
}

/// Count non-overlapping marker matches per category for `language`
pub fn analyze_multilingual_patterns(text: &str, language: LanguageCode) -> PatternCounts {
    let Some(table) = table_for(language) else {
        return PatternCounts::new();
    };

    table
        .entries
        .iter()
        .map(|(category, re)| (*category, re.find_iter(text).count()))
        .collect()
}

/// Whether `language` has a registered pattern table
pub fn has_pattern_table(language: LanguageCode) -> bool {
    table_for(language).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pattern_count;

    #[test]
    fn test_unknown_language_is_empty() {
        assert!(analyze_multilingual_patterns("anything", LanguageCode::En).is_empty());
        assert!(analyze_multilingual_patterns("আমি", LanguageCode::Bn).is_empty());
    }

    #[test]
    fn test_hindi_reports_all_categories() {
        let counts = analyze_multilingual_patterns("", LanguageCode::Hi);
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&n| n == 0));
    }

    #[test]
    fn test_hindi_personal_and_informal() {
        let text = "अरे यार, मैं और तुम कल मिलेंगे। आप भी आना।";
        let counts = analyze_multilingual_patterns(text, LanguageCode::Hi);
        assert_eq!(pattern_count(&counts, PatternCategory::Personal), 3);
        assert_eq!(pattern_count(&counts, PatternCategory::Informal), 2);
        assert_eq!(pattern_count(&counts, PatternCategory::Formal), 0);
    }

    #[test]
    fn test_hindi_multiword_formal_marker() {
        let text = "इसके अलावा यह सही है। इस प्रकार हम आगे बढ़ते हैं। अतः काम पूरा हुआ।";
        let counts = analyze_multilingual_patterns(text, LanguageCode::Hi);
        assert_eq!(pattern_count(&counts, PatternCategory::Formal), 3);
    }

    #[test]
    fn test_marker_inside_longer_word_is_ignored() {
        // "हमेशा" starts with "हम" but is a different word
        let counts = analyze_multilingual_patterns("हमेशा", LanguageCode::Hi);
        assert_eq!(pattern_count(&counts, PatternCategory::Personal), 0);
    }

    #[test]
    fn test_shared_marker_counts_in_both_categories() {
        let counts = analyze_multilingual_patterns("वाह!", LanguageCode::Hi);
        assert_eq!(pattern_count(&counts, PatternCategory::Emotional), 1);
        assert_eq!(pattern_count(&counts, PatternCategory::Informal), 1);
    }

    #[test]
    fn test_markers_ending_in_signs_match_before_space() {
        let counts = analyze_multilingual_patterns("मैं खुशी से आया, अतः हालांकि ठीक है", LanguageCode::Hi);
        assert_eq!(pattern_count(&counts, PatternCategory::Personal), 1);
        assert_eq!(pattern_count(&counts, PatternCategory::Emotional), 1);
        assert_eq!(pattern_count(&counts, PatternCategory::Formal), 2);
    }

    #[test]
    fn test_has_pattern_table() {
        assert!(has_pattern_table(LanguageCode::Hi));
        assert!(!has_pattern_table(LanguageCode::Mr));
    }
}
