//! Fixed keyword tables driving the risk rules.
//! All entries are stored lowercase; matching happens on normalized text.

/// Any single hit here forces a HIGH rating.
pub const CRITICAL_HIGH_KEYWORDS: &[&str] = &["fire", "explosion", "flood"];

pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "crack",
    "fire",
    "leak",
    "gas",
    "short circuit",
    "overheating",
    "smoke",
    "burn",
    "structural damage",
    "advanced corrosion",
    "severe corrosion",
    "heavy corrosion",
];

pub const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "wear",
    "loose",
    "noise",
    "vibration",
    "minor leak",
    "rust",
    "degraded",
    "misaligned",
    "corroded",
    "corroding",
    "corrosion",
];

pub const LOW_RISK_KEYWORDS: &[&str] = &["dust", "dirty", "cosmetic", "paint", "label missing"];
