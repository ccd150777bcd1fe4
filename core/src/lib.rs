//! Keyword-based risk analysis for free-text inspection descriptions.
//! One synchronous pipeline: normalize, count keyword hits, classify,
//! recommend, summarize. No state survives a call.

pub mod analyze;
pub mod classify;
pub mod keywords;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod recommend;
pub mod report;
pub mod summary;

pub use analyze::analyze_description;
