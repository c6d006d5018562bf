// Output formatting: terminal summaries for fingerprints, comparisons and
// drift series.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Render a frequency key so whitespace and control characters stay visible
/// in a table column.
pub fn display_key(key: &str, max_chars: usize) -> String {
    match key {
        " " => "<space>".to_string(),
        "\n" => "<newline>".to_string(),
        "\t" => "<tab>".to_string(),
        _ if key.chars().any(char::is_control) => key.escape_default().to_string(),
        _ => truncate_chars(key, max_chars),
    }
}
