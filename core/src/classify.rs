use crate::models::{KeywordHits, RiskLevel};

/// Ordered rule chain over the hit counts; the first matching rule wins.
/// Note the high-tier threshold: a single high-risk hit with no critical and
/// no medium hits stays LOW. That threshold is part of the shipped rule set
/// and must not be lowered without a product decision.
pub fn classify(hits: KeywordHits) -> RiskLevel {
    if hits.critical > 0 {
        RiskLevel::High
    } else if hits.high >= 2 {
        RiskLevel::High
    } else if hits.medium > 0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
