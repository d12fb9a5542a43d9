use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(16, 17, 28);
    pub const BG_SURFACE: Color = Color::Rgb(24, 26, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(33, 36, 54);
    /// The page's signature gradient endpoints.
    pub const ACCENT_INDIGO: Color = Color::Rgb(102, 126, 234);
    pub const ACCENT_VIOLET: Color = Color::Rgb(118, 75, 162);
    pub const ACCENT_AMBER: Color = Color::Rgb(247, 181, 56);
    pub const ACCENT_GREEN: Color = Color::Rgb(76, 175, 80);
    pub const ACCENT_ROSE: Color = Color::Rgb(255, 107, 107);
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 237, 245);
    pub const TEXT_SECONDARY: Color = Color::Rgb(168, 173, 196);
    pub const TEXT_MUTED: Color = Color::Rgb(98, 103, 130);
    pub const BORDER_DIM: Color = Color::Rgb(58, 62, 88);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO)
    }

    pub fn border_error() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::ACCENT_VIOLET)
    }

    pub fn header_bar_elevated() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::ACCENT_INDIGO)
    }

    pub fn nav_link() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hero_title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tagline() -> Style {
        Style::default()
            .fg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn section_title() -> Style {
        Style::default()
            .fg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_rule() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn field_label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn field_label_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn input_cursor() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::ACCENT_VIOLET)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_sending() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn card_name() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_detail() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn empty_state() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn notice_success() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notice_error() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::ACCENT_ROSE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notice_fading() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
