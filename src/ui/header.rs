//! Fixed navigation bar across the top of the page.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, Section};
use crate::ui::theme::Theme;

/// Scroll depth past which the bar switches to its elevated color, the
/// way the page header picks up a shadow once it floats over content.
const ELEVATE_AFTER: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, active: Section) {
    let bar = if state.scroll_y > ELEVATE_AFTER {
        Theme::header_bar_elevated()
    } else {
        Theme::header_bar()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .style(bar);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let brand = format!(" {}", state.config.profile.owner);
    let mut nav: Vec<Span> = Vec::new();
    for section in Section::ALL {
        let style = if section == active {
            Theme::nav_active()
        } else {
            Theme::nav_link()
        };
        nav.push(Span::styled(
            format!("[{}] {}", section.index() + 1, section.label()),
            style,
        ));
        nav.push(Span::raw("  "));
    }
    let nav_width: usize = nav.iter().map(|s| s.content.as_ref().width()).sum();
    let pad = (inner.width as usize).saturating_sub(brand.width() + nav_width);

    let mut spans = vec![Span::styled(brand, Theme::title())];
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(nav);
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
