//! Formatting utilities used for CLI and export outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to `width` display columns (not bytes, not chars).
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

/// Cut `s` to at most `width` display columns, ending with "…" when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// "42 spots left", "1 spot left", "Sold out".
pub fn spots_label(spots_left: i64) -> String {
    match spots_left {
        n if n <= 0 => "Sold out".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{} spots left", n),
    }
}

pub fn seats_label(seats: u8) -> String {
    if seats == 1 {
        "1 seat".to_string()
    } else {
        format!("{} seats", seats)
    }
}
