//! Profile section content, wrapped to the page width.

use ratatui::prelude::*;

use crate::config::ProfileConfig;
use crate::ui::theme::Theme;
use crate::ui::wrap;

pub fn lines(profile: &ProfileConfig, width: u16) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for (i, paragraph) in profile.about.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }
        for row in wrap::wrap_plain(paragraph, width as usize) {
            out.push(Line::from(Span::styled(row, Theme::body_text())));
        }
    }
    out.push(Line::default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    fn profile() -> ProfileConfig {
        ProfileConfig {
            about: vec![
                "Paragraf pertama tentang saya.".to_string(),
                "Paragraf kedua yang jauh lebih panjang supaya pasti terbungkus pada lebar sempit."
                    .to_string(),
            ],
            ..ProfileConfig::default()
        }
    }

    #[test]
    fn test_paragraphs_are_separated_by_a_blank_line() {
        let rendered = lines(&profile(), 80);
        let blank = rendered
            .iter()
            .position(|l| l.spans.iter().all(|s| s.content.is_empty()));
        assert!(blank.is_some());
        assert!(blank.unwrap() > 0);
    }

    #[test]
    fn test_rows_respect_the_width() {
        for line in lines(&profile(), 24) {
            let w: usize = line.spans.iter().map(|s| s.content.as_ref().width()).sum();
            assert!(w <= 24, "row too wide: {w}");
        }
    }
}
