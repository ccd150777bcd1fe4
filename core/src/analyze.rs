use crate::classify::classify;
use crate::matcher::match_all;
use crate::models::{AnalysisResult, KeywordHits};
use crate::normalize::normalize;
use crate::recommend::recommend_action;
use crate::summary::{build_summary, hits_annotation, DEFAULT_MAX_LEN};

/// Run the whole pipeline on one description:
/// normalize, match the four keyword tables, classify, recommend, summarize.
/// Pure and total; identical input always yields an identical result.
pub fn analyze_description(description: &str) -> AnalysisResult {
    analyze_description_with_len(description, DEFAULT_MAX_LEN)
}

pub fn analyze_description_with_len(description: &str, max_len: usize) -> AnalysisResult {
    let normalized = normalize(description);
    let hits = match_all(&normalized);
    let risk_level = classify(hits);

    // The summary is built from the original text, not the normalized copy.
    let summary = build_summary(description, max_len) + &hits_annotation(hits);

    AnalysisResult {
        summary,
        risk_level,
        recommended_action: recommend_action(risk_level).to_string(),
    }
}

/// Hit counts for a description, exposed for diagnostics and tests.
pub fn keyword_hits(description: &str) -> KeywordHits {
    match_all(&normalize(description))
}
