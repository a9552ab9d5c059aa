use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Characters stripped by [`trim_edges`].
pub const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Strip space, tab, newline and carriage return from both ends.
///
/// Unlike [`str::trim`], other Unicode whitespace is kept.
pub fn trim_edges(text: &str) -> &str {
    text.trim_matches(&TRIM_CHARS[..])
}

/// Shorten `text` to at most `max_width` terminal columns for log output.
pub fn preview(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const MARKER: &str = "…";
    let budget = max_width.saturating_sub(MARKER.width());
    let mut shown = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        shown.push(ch);
        used += w;
    }

    shown.push_str(MARKER);
    shown
}
