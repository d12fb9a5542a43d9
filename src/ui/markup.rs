use ratatui::prelude::*;
use ratatui::style::{Modifier, Style};

/// The five characters that must never pass into markup unescaped, with
/// their entity forms. `&` is listed first so escaping runs it first and
/// parsing never double-decodes.
const ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

const OPEN_TAGS: [&str; 2] = ["<b>", "<strong>"];
const CLOSE_TAGS: [&str; 2] = ["</b>", "</strong>"];

/// Escapes visitor-supplied text for interpolation into a markup template.
///
/// After escaping, the text can only ever render as literal characters;
/// `parse_markup` will find no tags and decode every entity back.
pub fn escape_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ENTITIES.iter().find(|(_, plain)| *plain == ch) {
            Some((entity, _)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Parse markup-templated text into styled spans.
///
/// Only `<b>` and `<strong>` (and their closers) are markup; they toggle
/// bold on the base style. Any other `<...>` sequence is literal text, and
/// the five known entities decode to their plain characters.
pub fn parse_markup(text: &str, base_style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current_style = base_style;
    let mut current_text = String::new();
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'<' => {
                let rest = &text[i..];
                if let Some(tag) = OPEN_TAGS.iter().find(|t| rest.starts_with(**t)) {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
                    }
                    current_style = current_style.add_modifier(Modifier::BOLD);
                    i += tag.len();
                } else if let Some(tag) = CLOSE_TAGS.iter().find(|t| rest.starts_with(**t)) {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut current_text), current_style));
                    }
                    current_style = current_style.remove_modifier(Modifier::BOLD);
                    i += tag.len();
                } else {
                    current_text.push('<');
                    i += 1;
                }
            }
            b'&' => {
                let rest = &text[i..];
                match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
                    Some((entity, plain)) => {
                        current_text.push(*plain);
                        i += entity.len();
                    }
                    None => {
                        current_text.push('&');
                        i += 1;
                    }
                }
            }
            _ => {
                // i only ever advances by whole characters, so this slice
                // always starts on a char boundary.
                if let Some(ch) = text[i..].chars().next() {
                    current_text.push(ch);
                    i += ch.len_utf8();
                } else {
                    break;
                }
            }
        }
    }

    if !current_text.is_empty() {
        spans.push(Span::styled(current_text, current_style));
    }

    if spans.is_empty() {
        spans.push(Span::styled(String::new(), base_style));
    }

    spans
}
