//! Text fitting helpers shared by the launch widgets.
//!
//! All widths are in characters.

// ============================================================================
// Truncation
// ============================================================================

/// Ellipsis appended to shortened text.
pub const ELLIPSIS: char = '…';

/// Shortens `text` to at most `max_len` characters, ending in an ellipsis
/// when anything was cut.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_with_ellipsis("FalconSat", 6), "Falco…");
/// assert_eq!(truncate_with_ellipsis("Dragon", 6), "Dragon");
/// ```
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_len - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

// ============================================================================
// Wrapping
// ============================================================================

/// Word-wraps `text` into lines of at most `width` characters and keeps the
/// first `max_lines`. When lines were dropped the last kept line ends in an
/// ellipsis. Words longer than a line are split.
#[must_use]
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut rest = word;
        while !rest.is_empty() {
            let rest_len = rest.chars().count();
            let separator = usize::from(current_len > 0);

            if current_len + separator + rest_len <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(rest);
                current_len += separator + rest_len;
                break;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            let split = rest.char_indices().nth(width).map_or(rest.len(), |(i, _)| i);
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let mut clipped: String = last.chars().take(width - 1).collect();
            clipped.truncate(clipped.trim_end().len());
            clipped.push(ELLIPSIS);
            *last = clipped;
        }
    }
    lines
}

// ============================================================================
// Tests
// ============================================================================
