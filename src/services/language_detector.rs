// Script-based language detection
// First script block present in the text wins; table order matters because
// Marathi shares Devanagari with Hindi and Assamese shares the Bengali block.

use crate::models::LanguageCode;
use std::ops::RangeInclusive;

const SCRIPT_TABLE: [(LanguageCode, RangeInclusive<char>); 12] = [
    (LanguageCode::Hi, '\u{0900}'..='\u{097F}'),
    (LanguageCode::Bn, '\u{0980}'..='\u{09FF}'),
    (LanguageCode::Te, '\u{0C00}'..='\u{0C7F}'),
    (LanguageCode::Ta, '\u{0B80}'..='\u{0BFF}'),
    (LanguageCode::Ml, '\u{0D00}'..='\u{0D7F}'),
    (LanguageCode::Mr, '\u{0900}'..='\u{097F}'),
    (LanguageCode::Gu, '\u{0A80}'..='\u{0AFF}'),
    (LanguageCode::Kn, '\u{0C80}'..='\u{0CFF}'),
    (LanguageCode::Pa, '\u{0A00}'..='\u{0A7F}'),
    (LanguageCode::Or, '\u{0B00}'..='\u{0B7F}'),
    (LanguageCode::As, '\u{0980}'..='\u{09FF}'),
    (LanguageCode::Ur, '\u{0600}'..='\u{06FF}'),
];

/// Detect the language of `text` from the Unicode blocks it uses.
/// Falls back to English when no listed script is present.
pub fn detect_language(text: &str) -> LanguageCode {
    SCRIPT_TABLE
        .iter()
        .find(|(_, range)| text.chars().any(|c| range.contains(&c)))
        .map(|(code, _)| *code)
        .unwrap_or_default()
}

/// Languages with a script entry, in detection order
pub fn supported_languages() -> Vec<LanguageCode> {
    std::iter::once(LanguageCode::En)
        .chain(SCRIPT_TABLE.iter().map(|(code, _)| *code))
        .collect()
}
