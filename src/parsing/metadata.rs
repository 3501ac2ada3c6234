//! Key/value pairs from metadata lines.

/// Split the content of a metadata line on its first colon. Keys are
/// trimmed and lower-cased, values trimmed. Returns None for a line with no
/// colon or with nothing before it.
pub fn read_metadata(content: &str) -> Option<(String, String)> {
    let (key, value) = content.split_once(':')?;

    let key = key
        .trim()
        .to_lowercase();
    if key.is_empty() {
        return None;
    }

    Some((
        key,
        value
            .trim()
            .to_string(),
    ))
}
