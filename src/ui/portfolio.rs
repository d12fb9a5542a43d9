//! Portfolio section: one card per configured project.
//!
//! Cards are returned separately rather than as a flat list so the page
//! can stagger their reveal.

use ratatui::prelude::*;

use crate::config::{ProfileConfig, ProjectConfig};
use crate::ui::theme::Theme;
use crate::ui::wrap;

pub fn cards(profile: &ProfileConfig, width: u16) -> Vec<Vec<Line<'static>>> {
    profile
        .projects
        .iter()
        .map(|project| card(project, width))
        .collect()
}

fn card(project: &ProjectConfig, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("▪ ", Style::default().fg(Theme::ACCENT_AMBER)),
        Span::styled(
            project.title.clone(),
            Theme::body_text().add_modifier(Modifier::BOLD),
        ),
    ])];
    let body_width = (width as usize).saturating_sub(2);
    for row in wrap::wrap_plain(&project.summary, body_width) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(row, Theme::body_text()),
        ]));
    }
    if let Some(link) = &project.link {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("🔗 {link}"), Theme::link()),
        ]));
    }
    lines
}
