//! The welcome gate: a centered popup asking for the visitor's name.
//!
//! While visible it sits over everything else and owns the keyboard.

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::state::AppState;
use crate::ui::form;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.gate.visible {
        return;
    }

    let area = frame.area();
    let popup_w = 46u16.min(area.width.saturating_sub(4));
    let popup_h = 9u16.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    // Rejected submits flash the border red for half a second
    let border = if state.gate.flash_active(Instant::now()) {
        Theme::border_error()
    } else {
        Theme::border_focused()
    };
    let block = Block::default()
        .title(" 👋 Selamat Datang! ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(border)
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 6 || inner.width < 20 {
        return;
    }

    let row = |offset: u16| Rect::new(inner.x + 1, inner.y + offset, inner.width.saturating_sub(2), 1);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Siapa nama Anda?",
            Theme::body_text(),
        ))),
        row(1),
    );

    let mut input = vec![Span::styled("❯ ", Style::default().fg(Theme::ACCENT_AMBER))];
    input.extend(form::cursor_spans(&state.gate.input));
    frame.render_widget(Paragraph::new(Line::from(input)), row(3));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tekan Enter untuk melanjutkan",
            Theme::placeholder(),
        ))),
        row(5),
    );
}
