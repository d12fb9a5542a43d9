//! Renders guestbook entries into page lines.
//!
//! Visitor text goes through one of two doors: plain text becomes raw
//! spans that the markup parser never sees, and text interpolated into a
//! markup template is escaped first. Nothing a visitor typed reaches
//! `parse_markup` unescaped.

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::guestbook::entry::GuestEntry;
use crate::guestbook::store::Guestbook;
use crate::ui::markup::{escape_markup, parse_markup};
use crate::ui::theme::Theme;
use crate::ui::wrap;

const INDENT: &str = "   ";

/// Avatar for a gender label. Matching is case-insensitive and anything
/// unrecognized gets the neutral face, so every input maps to a glyph.
pub fn avatar_glyph(gender: &str) -> &'static str {
    match gender.to_lowercase().as_str() {
        "laki-laki" | "male" => "👨",
        "perempuan" | "female" => "👩",
        _ => "🧑",
    }
}

/// One rendered entry. Cards stay separate so the caller can stagger
/// their reveal.
pub struct MessageCard {
    pub lines: Vec<Line<'static>>,
}

/// Renders the whole book in its display order, newest first.
pub fn cards(book: &Guestbook, width: u16) -> Vec<MessageCard> {
    book.entries().map(|entry| card(entry, width)).collect()
}

fn card(entry: &GuestEntry, width: u16) -> MessageCard {
    let mut lines = Vec::new();
    let body_width = (width as usize).saturating_sub(INDENT.len()).max(8);

    // Header row: avatar and sender name
    let name = if entry.name.is_empty() {
        "Pengirim"
    } else {
        entry.name.as_str()
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{} ", avatar_glyph(&entry.gender))),
        Span::styled(name.to_string(), Theme::card_name()),
    ]));

    // Detail row: phone and birthdate, templated with a bold icon. Both
    // values are escaped before they touch the template.
    let phone = detail_spans("📞", &entry.phone);
    let birth = detail_spans("🎂", &entry.birthdate);
    if spans_width(&phone) + 2 + spans_width(&birth) <= body_width {
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(phone);
        spans.push(Span::raw("  "));
        spans.extend(birth);
        lines.push(Line::from(spans));
    } else {
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(phone);
        lines.push(Line::from(spans));
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(birth);
        lines.push(Line::from(spans));
    }

    // Body: label, then the message as plain text
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            "💭 Pesan:",
            Theme::card_detail().add_modifier(Modifier::BOLD),
        ),
    ]));
    for body_line in wrap::wrap_plain(&entry.message, body_width) {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(body_line, Theme::body_text()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("⏰ {}", entry.timestamp), Theme::timestamp()),
    ]));

    MessageCard { lines }
}

fn detail_spans(icon: &str, value: &str) -> Vec<Span<'static>> {
    let shown = if value.is_empty() { "-" } else { value };
    parse_markup(
        &format!("<b>{icon}</b> {}", escape_markup(shown)),
        Theme::card_detail(),
    )
}

fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.as_ref().width()).sum()
}

/// The whole inbox as page lines: the empty-state block when nothing has
/// been sent yet, otherwise the cards separated by blank lines. Pure in
/// the book's contents and the width.
pub fn render_list(book: &Guestbook, width: u16) -> Vec<Line<'static>> {
    if book.is_empty() {
        return empty_state(width);
    }
    let mut lines = Vec::new();
    for card in cards(book, width) {
        lines.extend(card.lines);
        lines.push(Line::default());
    }
    lines
}

/// What the list shows while nobody has written yet.
pub fn empty_state(width: u16) -> Vec<Line<'static>> {
    vec![
        wrap::centered(Line::from(Span::styled("📬", Theme::empty_state())), width),
        wrap::centered(
            Line::from(Span::styled(
                "Belum ada pesan yang masuk.",
                Theme::empty_state(),
            )),
            width,
        ),
        wrap::centered(
            Line::from(Span::styled(
                "Jadilah yang pertama mengirim pesan!",
                Theme::empty_state(),
            )),
            width,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, gender: &str, message: &str) -> GuestEntry {
        GuestEntry {
            name: name.to_string(),
            phone: "08123456789".to_string(),
            birthdate: "Sabtu, 15 Januari 2000".to_string(),
            gender: gender.to_string(),
            message: message.to_string(),
            timestamp: "Senin, 1 September 2025 14.30".to_string(),
        }
    }

    fn flatten(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
                    + "\n"
            })
            .collect()
    }

    #[test]
    fn test_card_shows_all_entry_parts() {
        let card = card(&entry("Budi", "Laki-laki", "Halo semua!"), 60);
        let text = flatten(&card.lines);
        assert!(text.starts_with("👨 Budi\n"));
        assert!(text.contains("📞 08123456789"));
        assert!(text.contains("🎂 Sabtu, 15 Januari 2000"));
        assert!(text.contains("💭 Pesan:"));
        assert!(text.contains("Halo semua!"));
        assert!(text.contains("⏰ Senin, 1 September 2025 14.30"));
    }

    #[test]
    fn test_hostile_message_body_stays_literal() {
        let hostile = r#"<script>alert('x')</script> & <b>tebal</b>"#;
        let card = card(&entry("Budi", "Laki-laki", hostile), 120);
        assert!(flatten(&card.lines).contains(hostile));
    }

    #[test]
    fn test_hostile_phone_cannot_reach_the_template() {
        let mut e = entry("Budi", "Laki-laki", "Halo");
        e.phone = "<b>666</b>".to_string();
        let card = card(&e, 80);
        let text = flatten(&card.lines);
        assert!(text.contains("<b>666</b>"));
        // The tags render as text instead of bolding anything
        for line in &card.lines {
            for span in &line.spans {
                if span.content.contains("666") {
                    assert!(!span.style.add_modifier.contains(Modifier::BOLD));
                }
            }
        }
    }

    #[test]
    fn test_avatar_glyph_is_total() {
        assert_eq!(avatar_glyph("Laki-laki"), "👨");
        assert_eq!(avatar_glyph("MALE"), "👨");
        assert_eq!(avatar_glyph("Perempuan"), "👩");
        assert_eq!(avatar_glyph("female"), "👩");
        assert_eq!(avatar_glyph(""), "🧑");
        assert_eq!(avatar_glyph("lainnya"), "🧑");
        assert_eq!(avatar_glyph("王"), "🧑");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let mut e = entry("", "Perempuan", "Hai");
        e.phone = String::new();
        e.birthdate = String::new();
        let card = card(&e, 60);
        let text = flatten(&card.lines);
        assert!(text.starts_with("👩 Pengirim\n"));
        assert!(text.contains("📞 -"));
        assert!(text.contains("🎂 -"));
    }

    #[test]
    fn test_narrow_width_splits_the_detail_row() {
        let card = card(&entry("Budi", "Laki-laki", "Halo"), 24);
        let text = flatten(&card.lines);
        let phone_line = text.lines().position(|l| l.contains("📞"));
        let birth_line = text.lines().position(|l| l.contains("🎂"));
        assert_ne!(phone_line, birth_line);
    }

    #[test]
    fn test_long_message_wraps_within_width() {
        let long = "kata ".repeat(40);
        let card = card(&entry("Budi", "Laki-laki", long.trim()), 30);
        for line in &card.lines {
            let width: usize = line.spans.iter().map(|s| s.content.as_ref().width()).sum();
            assert!(width <= 30, "line too wide: {width}");
        }
    }

    #[test]
    fn test_cards_follow_store_order() {
        let mut book = Guestbook::new();
        book.record(entry("pertama", "Laki-laki", "a"));
        book.record(entry("kedua", "Perempuan", "b"));
        let cards = cards(&book, 60);
        assert_eq!(cards.len(), 2);
        assert!(flatten(&cards[0].lines).contains("kedua"));
        assert!(flatten(&cards[1].lines).contains("pertama"));
    }

    #[test]
    fn test_render_list_of_empty_book_is_just_the_empty_state() {
        let book = Guestbook::new();
        assert_eq!(render_list(&book, 60), empty_state(60));
        assert!(!flatten(&render_list(&book, 60)).contains("⏰"));
    }

    #[test]
    fn test_render_list_shows_every_entry() {
        let mut book = Guestbook::new();
        book.record(entry("Budi", "Laki-laki", "a"));
        book.record(entry("Siti", "Perempuan", "b"));
        let text = flatten(&render_list(&book, 60));
        assert!(text.contains("Budi"));
        assert!(text.contains("Siti"));
        assert!(!text.contains("Belum ada pesan yang masuk."));
    }

    #[test]
    fn test_render_list_is_idempotent() {
        let mut book = Guestbook::new();
        book.record(entry("Budi", "Laki-laki", "Halo semua!"));
        book.record(entry("Siti", "Perempuan", "Hai juga."));
        assert_eq!(render_list(&book, 48), render_list(&book, 48));
        let empty = Guestbook::new();
        assert_eq!(render_list(&empty, 48), render_list(&empty, 48));
    }

    #[test]
    fn test_empty_state_invites_first_message() {
        let text = flatten(&empty_state(40));
        assert!(text.contains("📬"));
        assert!(text.contains("Belum ada pesan yang masuk."));
        assert!(text.contains("Jadilah yang pertama mengirim pesan!"));
    }
}
