//! Transient notification toast, floated into the top-right corner.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, NoticeKind};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(notice) = &state.notice else {
        return;
    };
    let area = frame.area();
    if area.height < 7 || area.width < 12 {
        return;
    }

    // Past its timeout the toast dims for the slide-out window instead
    // of vanishing abruptly
    let timeout = Duration::from_secs(state.config.behavior.notice_timeout_secs);
    let style = if notice.age(Instant::now()) >= timeout {
        Theme::notice_fading()
    } else {
        match notice.kind {
            NoticeKind::Success => Theme::notice_success(),
            NoticeKind::Error => Theme::notice_error(),
        }
    };

    let text = format!(" {} ", notice.text);
    let w = (text.width() as u16 + 2).min(area.width.saturating_sub(2));
    let toast = Rect::new(area.width.saturating_sub(w + 1), 3, w, 3);

    frame.render_widget(Clear, toast);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .style(style);
    let inner = block.inner(toast);
    frame.render_widget(block, toast);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), inner);
}
