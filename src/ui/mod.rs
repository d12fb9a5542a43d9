//! Terminal rendering.
//!
//! `render` draws the whole screen from immutable state. Anything that
//! changes state, including scroll animation, happens in the handler;
//! the render pass only decides how the current state looks.

mod form;
mod header;
mod home;
pub mod layout;
mod markup;
mod messages;
mod modal;
mod notice;
pub mod page;
mod portfolio;
mod profile;
mod status_bar;
mod theme;
mod wrap;

use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::app::state::AppState;
use self::page::PageContent;
use self::theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BG_DARK)),
        area,
    );

    let inner = layout::page_inner(app_layout.page);
    let page = PageContent::build(state, inner.width);
    let scroll = state.scroll_y.min(page.max_scroll(inner.height as usize));

    header::render(frame, app_layout.header, state, page.active_section(scroll));
    render_page(frame, app_layout.page, inner, &page, scroll);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays go last so they sit on top of the page
    notice::render(frame, state);
    modal::render(frame, state);
}

fn render_page(frame: &mut Frame, outer: Rect, inner: Rect, page: &PageContent, scroll: usize) {
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let start = scroll.min(page.lines.len());
    let end = (start + inner.height as usize).min(page.lines.len());
    let visible: Vec<Line> = page.lines[start..end].to_vec();
    frame.render_widget(Paragraph::new(visible), inner);

    let mut bar = ScrollbarState::new(page.lines.len()).position(scroll);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track()),
        outer,
        &mut bar,
    );
}
