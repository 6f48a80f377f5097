//! String helpers for rendering chat content.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// One-line preview of a message: first non-blank line, truncated.
pub fn preview(text: &str, max_len: usize) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    truncate(line, max_len)
}

/// Format an amount as dollars with two decimals (`$5.99`).
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
