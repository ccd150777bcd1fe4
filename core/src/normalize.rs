/// Lowercase and trim an inspection description before keyword matching.
/// Locale-independent case fold so matching is deterministic across platforms.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}
