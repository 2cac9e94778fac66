//! Width-aware text helpers for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK text
//! and emoji occupy their real on-screen width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps prose at word boundaries so no line exceeds `max_width` columns.
///
/// Existing line breaks are kept and blank lines survive as empty strings.
/// Words wider than the limit are split across lines.
#[must_use]
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let width = max_width.max(1);
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0_usize;

        for word in source_line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let separator = usize::from(current_width > 0);

            if current_width + separator + word_width <= width {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += separator + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for ch in word.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + char_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += char_width;
            }
        }

        lines.push(current);
    }

    lines
}

/// Clips `line` to `width` columns and pads it with spaces to exactly that
/// width.
#[must_use]
pub fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(width);
    let mut visible = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible + char_width > width {
            break;
        }
        output.push(ch);
        visible += char_width;
    }

    output.push_str(&" ".repeat(width - visible));
    output
}
