//! One-line status strip along the bottom edge.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, Focus};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if !state.visitor.is_empty() {
        parts.push(Span::styled(
            format!(" 👤 {} ", state.visitor),
            Style::default()
                .fg(Theme::ACCENT_GREEN)
                .bg(Theme::BG_ELEVATED),
        ));
    }

    parts.push(Span::styled(
        format!(" ✉ {} pesan ", state.guestbook.len()),
        Theme::status_bar(),
    ));

    if state.is_sending() {
        parts.push(Span::styled(
            " | ⏳ Mengirim... ",
            Style::default()
                .fg(Theme::ACCENT_AMBER)
                .bg(Theme::BG_ELEVATED),
        ));
    }

    let hints = if state.gate.visible {
        " Ketik nama Anda lalu tekan Enter "
    } else {
        match state.focus {
            Focus::Page => " 1-4 bagian | ↑↓ gulir | Tab formulir | q keluar ",
            Focus::Form => " Tab bidang berikutnya | Enter kirim | Esc kembali ",
        }
    };
    parts.push(Span::styled(hints, Theme::status_bar()));

    let focus_name = if state.gate.visible {
        "MASUK"
    } else {
        match state.focus {
            Focus::Page => "HALAMAN",
            Focus::Form => "FORMULIR",
        }
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.as_ref().width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.width() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default()
            .fg(Theme::ACCENT_AMBER)
            .bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
