use crate::models::KeywordHits;

pub const DEFAULT_MAX_LEN: usize = 160;

/// Truncate the ORIGINAL (non-normalized) description for display. Lengths
/// are counted in chars, not bytes. Text within the window is returned
/// trimmed but otherwise untouched; longer text is cut at the last whitespace
/// inside the window (dropping the trailing partial word) and marked with an
/// ellipsis. A window with no whitespace at all is kept whole.
pub fn build_summary(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let window: String = text.chars().take(max_len).collect();
    let head = match window.rfind(char::is_whitespace) {
        Some(idx) => &window[..idx],
        None => window.as_str(),
    };
    format!("{head}...")
}

/// The metadata line appended to every summary. The critical count is
/// deliberately absent here, so a HIGH rating driven purely by critical
/// keywords still displays high:0.
pub fn hits_annotation(hits: KeywordHits) -> String {
    format!(
        "\n(keyword hits — high:{}, medium:{}, low:{})",
        hits.high, hits.medium, hits.low
    )
}
