// src/core/sanitize.rs

/// Collapse whitespace runs to single spaces and trim. Text collected from
/// the parser keeps source newlines and indentation; marker matching wants
/// one flat line.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
