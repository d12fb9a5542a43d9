//! Display-width text layout helpers.
//!
//! The page is built as one virtual line buffer, so scroll offsets and
//! section positions need exact wrapped line counts up front. That rules
//! out the widget-level wrap, which never reports how many lines it made.

use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps text to `width` display columns, breaking at word boundaries.
/// Words wider than a whole line are hard-broken. Blank input lines are
/// kept so paragraph gaps survive.
pub fn wrap_plain(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }
    let mut out = Vec::new();
    for line in text.split('\n') {
        wrap_line(line, width, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if line.trim().is_empty() {
        out.push(String::new());
        return;
    }
    let mut current = String::new();
    let mut current_width = 0usize;
    for word in line.split_whitespace() {
        let word_width = word.width();
        if current_width == 0 {
            if word_width > width {
                hard_break(word, width, &mut current, &mut current_width, out);
            } else {
                current.push_str(word);
                current_width = word_width;
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            current_width = 0;
            if word_width > width {
                hard_break(word, width, &mut current, &mut current_width, out);
            } else {
                current.push_str(word);
                current_width = word_width;
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Pads a line on the left so it sits centered in `width` columns.
pub fn centered(line: Line<'static>, width: u16) -> Line<'static> {
    let text_width: usize = line
        .spans
        .iter()
        .map(|s| s.content.as_ref().width())
        .sum();
    let pad = (width as usize).saturating_sub(text_width) / 2;
    if pad == 0 {
        return line;
    }
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans)
}

fn hard_break(
    word: &str,
    width: usize,
    current: &mut String,
    current_width: &mut usize,
    out: &mut Vec<String>,
) {
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if *current_width + ch_width > width && *current_width > 0 {
            out.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(ch);
        *current_width += ch_width;
    }
}
