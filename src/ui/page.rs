//! The whole page as one scrollable column of lines.
//!
//! Both the input handler and the render pass build a `PageContent` from
//! the same state and width, so scroll targets computed on key presses
//! always agree with what ends up on screen.

use std::ops::Range;

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::app::state::{AppState, Section};
use crate::ui::theme::Theme;
use crate::ui::{form, home, messages, portfolio, profile};

/// How many rows of a section must be visible before its nav link
/// lights up.
const ACTIVE_PEEK: usize = 4;

/// Ticks between one portfolio card starting to brighten and the next.
const CARD_STAGGER_TICKS: u64 = 2;

/// Ticks a freshly revealed block spends at half brightness.
const REVEAL_FADE_TICKS: u64 = 6;

pub struct PageContent {
    pub lines: Vec<Line<'static>>,
    /// Line ranges of the four sections, in page order, covering the
    /// whole buffer without gaps.
    pub sections: [Range<usize>; 4],
    /// Index of the inbox heading inside the message section.
    pub list_start: usize,
}

impl PageContent {
    pub fn build(state: &AppState, width: u16) -> Self {
        let profile_cfg = &state.config.profile;
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(heading(Section::Home, width));
        lines.extend(home::lines(state, width));

        let profile_start = lines.len();
        lines.push(heading(Section::Profile, width));
        lines.push(Line::default());
        lines.extend(brightened(
            profile::lines(profile_cfg, width),
            phase(state, Section::Profile, 0),
        ));

        let portfolio_start = lines.len();
        lines.push(heading(Section::Portfolio, width));
        lines.push(Line::default());
        for (i, card) in portfolio::cards(profile_cfg, width).into_iter().enumerate() {
            let stagger = CARD_STAGGER_TICKS * i as u64;
            lines.extend(brightened(card, phase(state, Section::Portfolio, stagger)));
            lines.push(Line::default());
        }

        let message_start = lines.len();
        lines.push(heading(Section::Message, width));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Kirim Pesan untuk Saya",
            Theme::section_title(),
        )));
        lines.push(Line::default());
        lines.extend(form::lines(state));
        lines.push(Line::default());
        let list_start = lines.len();
        lines.push(Line::from(Span::styled(
            format!("Pesan Masuk ({})", state.guestbook.len()),
            Theme::section_title(),
        )));
        lines.push(Line::default());
        lines.extend(messages::render_list(&state.guestbook, width));
        lines.push(Line::default());

        let total = lines.len();
        Self {
            lines,
            sections: [
                0..profile_start,
                profile_start..portfolio_start,
                portfolio_start..message_start,
                message_start..total,
            ],
            list_start,
        }
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, view: usize) -> usize {
        self.lines.len().saturating_sub(view)
    }

    /// Scroll offset that puts a section heading near the top of the
    /// viewport, with one line of breathing room above it.
    pub fn section_top(&self, section: Section) -> usize {
        self.sections[section.index()].start.saturating_sub(1)
    }

    /// The section the viewport is currently showing, probed a few rows
    /// below the top edge so a heading peeking in counts as entered.
    pub fn active_section(&self, scroll_y: usize) -> Section {
        let probe = scroll_y + ACTIVE_PEEK;
        for section in Section::ALL {
            if self.sections[section.index()].contains(&probe) {
                return section;
            }
        }
        Section::Message
    }
}

fn heading(section: Section, width: u16) -> Line<'static> {
    let title = format!("{} {}", icon(section), section.label());
    let fill = (width as usize).saturating_sub(title.width() + 4);
    Line::from(vec![
        Span::styled("── ", Theme::section_rule()),
        Span::styled(title, Theme::section_title()),
        Span::styled(format!(" {}", "─".repeat(fill)), Theme::section_rule()),
    ])
}

fn icon(section: Section) -> &'static str {
    match section {
        Section::Home => "🏠",
        Section::Profile => "👤",
        Section::Portfolio => "💼",
        Section::Message => "💬",
    }
}

/// Where a block is in its reveal: still dark, half lit, or settled.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Reveal {
    Hidden,
    Fading,
    Visible,
}

fn phase(state: &AppState, section: Section, stagger: u64) -> Reveal {
    if !state.animations() {
        return Reveal::Visible;
    }
    match state.revealed_at[section.index()] {
        None => Reveal::Hidden,
        Some(revealed) => {
            let since = state.tick_count.saturating_sub(revealed);
            if since < stagger {
                Reveal::Hidden
            } else if since < stagger + REVEAL_FADE_TICKS {
                Reveal::Fading
            } else {
                Reveal::Visible
            }
        }
    }
}

fn brightened(lines: Vec<Line<'static>>, phase: Reveal) -> Vec<Line<'static>> {
    let color = match phase {
        Reveal::Visible => return lines,
        Reveal::Fading => Theme::TEXT_SECONDARY,
        Reveal::Hidden => Theme::TEXT_MUTED,
    };
    lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| {
                    let style = span.style.fg(color);
                    Span::styled(span.content, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::guestbook::entry::{EntryDraft, GuestEntry};
    use chrono::{Local, TimeZone};

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn flatten(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn find_line<'a>(page: &'a PageContent, needle: &str) -> &'a Line<'static> {
        page.lines
            .iter()
            .find(|l| flatten(l).contains(needle))
            .unwrap_or_else(|| panic!("no line containing {needle:?}"))
    }

    fn record(state: &mut AppState, name: &str, message: &str) {
        let draft = EntryDraft {
            name: name.to_string(),
            phone: "08123456789".to_string(),
            birthdate: "2000-01-15".to_string(),
            gender: "Laki-laki".to_string(),
            message: message.to_string(),
        };
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
        state.guestbook.record(GuestEntry::from_draft(draft, at));
    }

    #[test]
    fn test_sections_tile_the_whole_buffer() {
        let page = PageContent::build(&state(), 80);
        assert_eq!(page.sections[0].start, 0);
        for i in 0..3 {
            assert_eq!(page.sections[i].end, page.sections[i + 1].start);
            assert!(!page.sections[i].is_empty());
        }
        assert_eq!(page.sections[3].end, page.lines.len());
    }

    #[test]
    fn test_active_section_tracks_scroll() {
        let page = PageContent::build(&state(), 80);
        assert_eq!(page.active_section(0), Section::Home);
        let portfolio_top = page.section_top(Section::Portfolio);
        assert_eq!(page.active_section(portfolio_top), Section::Portfolio);
        assert_eq!(page.active_section(page.lines.len()), Section::Message);
    }

    #[test]
    fn test_home_top_is_the_first_line() {
        let page = PageContent::build(&state(), 80);
        assert_eq!(page.section_top(Section::Home), 0);
    }

    #[test]
    fn test_list_start_points_at_the_inbox_heading() {
        let page = PageContent::build(&state(), 80);
        assert!(page.sections[3].contains(&page.list_start));
        assert!(flatten(&page.lines[page.list_start]).starts_with("Pesan Masuk (0)"));
    }

    #[test]
    fn test_inbox_heading_counts_messages() {
        let mut state = state();
        record(&mut state, "Budi", "Halo!");
        record(&mut state, "Siti", "Mantap!");
        let page = PageContent::build(&state, 80);
        assert!(flatten(&page.lines[page.list_start]).starts_with("Pesan Masuk (2)"));
    }

    #[test]
    fn test_empty_inbox_invites_the_first_message() {
        let page = PageContent::build(&state(), 80);
        let text: String = page.lines.iter().map(flatten).collect();
        assert!(text.contains("Belum ada pesan yang masuk."));
        assert!(text.contains("Jadilah yang pertama mengirim pesan!"));
    }

    #[test]
    fn test_recorded_messages_replace_the_empty_state() {
        let mut state = state();
        record(&mut state, "Budi", "Halo!");
        let page = PageContent::build(&state, 80);
        let text: String = page.lines.iter().map(flatten).collect();
        assert!(text.contains("Budi"));
        assert!(!text.contains("Belum ada pesan yang masuk."));
    }

    #[test]
    fn test_unrevealed_profile_content_is_dark() {
        let state = state();
        let page = PageContent::build(&state, 80);
        let first_paragraph = page.sections[1].start + 2;
        for span in &page.lines[first_paragraph].spans {
            assert_eq!(span.style.fg, Some(Theme::TEXT_MUTED));
        }
    }

    #[test]
    fn test_settled_profile_content_is_fully_lit() {
        let mut state = state();
        state.revealed_at[Section::Profile.index()] = Some(0);
        state.tick_count = 100;
        let page = PageContent::build(&state, 80);
        let first_paragraph = page.sections[1].start + 2;
        let fg = page.lines[first_paragraph].spans[0].style.fg;
        assert_eq!(fg, Some(Theme::TEXT_PRIMARY));
    }

    #[test]
    fn test_portfolio_cards_brighten_one_after_another() {
        let mut state = state();
        state.revealed_at[Section::Portfolio.index()] = Some(40);
        state.tick_count = 40;
        let page = PageContent::build(&state, 80);
        let first = find_line(&page, "▪ Resep Nusantara");
        let last = find_line(&page, "▪ Jadwal Sholat CLI");
        assert_eq!(first.spans[0].style.fg, Some(Theme::TEXT_SECONDARY));
        assert_eq!(last.spans[0].style.fg, Some(Theme::TEXT_MUTED));
    }

    #[test]
    fn test_disabling_animations_skips_the_reveal() {
        let mut state = state();
        state.config.behavior.animations = false;
        let page = PageContent::build(&state, 80);
        let first_paragraph = page.sections[1].start + 2;
        let fg = page.lines[first_paragraph].spans[0].style.fg;
        assert_eq!(fg, Some(Theme::TEXT_PRIMARY));
    }

    #[test]
    fn test_headings_never_dim() {
        let state = state();
        let page = PageContent::build(&state, 80);
        let heading = &page.lines[page.sections[1].start];
        assert!(flatten(heading).contains("Profile"));
        assert_ne!(heading.spans[1].style.fg, Some(Theme::TEXT_MUTED));
    }

    #[test]
    fn test_narrow_widths_still_build() {
        let mut state = state();
        record(&mut state, "Budi", "Pesan yang cukup panjang supaya terbungkus.");
        for width in [10u16, 30, 80] {
            let page = PageContent::build(&state, width);
            assert!(page.lines.len() > 20);
        }
    }

    #[test]
    fn test_max_scroll_hits_zero_for_tall_viewports() {
        let page = PageContent::build(&state(), 80);
        assert_eq!(page.max_scroll(10_000), 0);
        let view = 20;
        assert_eq!(page.max_scroll(view), page.lines.len() - view);
    }
}
