use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub page: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical: nav header | the page | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with nav links
            Constraint::Min(5),    // The scrolling page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        page: chunks[1],
        status_bar: chunks[2],
    }
}

/// The page rect inset by its horizontal gutters. Scroll geometry and the
/// render pass both wrap against this width, so they must agree on it.
pub fn page_inner(page: Rect) -> Rect {
    page.inner(Margin {
        horizontal: 2,
        vertical: 0,
    })
}
