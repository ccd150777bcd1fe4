use crate::keywords;
use crate::models::KeywordHits;
use regex::Regex;

/// Count how many DISTINCT keywords from `keywords` appear in `text` as a
/// whole word or whole phrase. Each keyword contributes at most 1 no matter
/// how often it occurs; substrings never match ("noncorrosive" is not a
/// "corrosion" hit).
pub fn count_keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|kw| {
            let pattern = format!(r"\b{}\b", regex::escape(kw));
            Regex::new(&pattern)
                .expect("regex construction invariant: escaped constant pattern")
                .is_match(text)
        })
        .count()
}

/// Match all four keyword tables against the same normalized text.
pub fn match_all(normalized: &str) -> KeywordHits {
    KeywordHits {
        critical: count_keyword_hits(normalized, keywords::CRITICAL_HIGH_KEYWORDS),
        high: count_keyword_hits(normalized, keywords::HIGH_RISK_KEYWORDS),
        medium: count_keyword_hits(normalized, keywords::MEDIUM_RISK_KEYWORDS),
        low: count_keyword_hits(normalized, keywords::LOW_RISK_KEYWORDS),
    }
}
