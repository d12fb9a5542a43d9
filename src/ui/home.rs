//! Hero section content.

use ratatui::prelude::*;

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::ui::wrap;

pub fn lines(state: &AppState, width: u16) -> Vec<Line<'static>> {
    let greeting = if state.visitor.is_empty() {
        "Welcome To My Portfolio".to_string()
    } else {
        format!("Hi {}, Welcome To My Portfolio", state.visitor)
    };
    let profile = &state.config.profile;
    vec![
        Line::default(),
        wrap::centered(
            Line::from(Span::styled(greeting, Theme::hero_title())),
            width,
        ),
        Line::default(),
        wrap::centered(
            Line::from(Span::styled(
                profile.owner.clone(),
                Theme::body_text().add_modifier(Modifier::BOLD),
            )),
            width,
        ),
        wrap::centered(
            Line::from(Span::styled(profile.tagline.clone(), Theme::tagline())),
            width,
        ),
        Line::default(),
        wrap::centered(
            Line::from(Span::styled(
                "▸ Lihat karya saya: tekan [3]",
                Theme::link(),
            )),
            width,
        ),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

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
    fn test_greeting_without_a_visitor() {
        let state = AppState::new(AppConfig::default());
        let text = flatten(&lines(&state, 80));
        assert!(text.contains("Welcome To My Portfolio"));
        assert!(!text.contains("Hi "));
    }

    #[test]
    fn test_greeting_names_the_visitor() {
        let mut state = AppState::new(AppConfig::default());
        state.visitor = "Rina".to_string();
        let text = flatten(&lines(&state, 80));
        assert!(text.contains("Hi Rina, Welcome To My Portfolio"));
    }

    #[test]
    fn test_owner_and_tagline_come_from_config() {
        let state = AppState::new(AppConfig::default());
        let text = flatten(&lines(&state, 80));
        assert!(text.contains(&state.config.profile.owner));
        assert!(text.contains(&state.config.profile.tagline));
    }
}
