//! Codec for list-valued columns stored as JSON text.
//!
//! Decoding is total: blank, NULL-ish, or malformed stored text yields an
//! empty sequence so a damaged row can never poison a read path.

/// Serializes `items` for storage, dropping blank entries first.
pub fn encode(items: &[String]) -> String {
    let kept: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    serde_json::to_string(&kept).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored value back into its ordered list.
pub fn decode(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}
