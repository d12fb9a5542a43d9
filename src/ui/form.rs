//! The message form, rendered as page lines with an inline cursor.

use ratatui::prelude::*;

use crate::app::state::{AppState, Focus, FormField, InputField};
use crate::guestbook::entry::Gender;
use crate::ui::theme::Theme;

const LABEL_WIDTH: usize = 14;

pub fn lines(state: &AppState) -> Vec<Line<'static>> {
    let in_form = state.focus == Focus::Form;
    let focus = state.form.focus;
    let focused = |field: FormField| in_form && focus == field;

    vec![
        text_field(FormField::Name, &state.form.name, focused(FormField::Name), None),
        text_field(
            FormField::Phone,
            &state.form.phone,
            focused(FormField::Phone),
            None,
        ),
        text_field(
            FormField::Birthdate,
            &state.form.birthdate,
            focused(FormField::Birthdate),
            Some("YYYY-MM-DD"),
        ),
        gender_field(state.form.gender, focused(FormField::Gender)),
        text_field(
            FormField::Message,
            &state.form.message,
            focused(FormField::Message),
            None,
        ),
        Line::default(),
        submit_row(state, focused(FormField::Submit)),
    ]
}

fn label_span(field: FormField, focused: bool) -> Span<'static> {
    let style = if focused {
        Theme::field_label_focused()
    } else {
        Theme::field_label()
    };
    Span::styled(
        format!("{:<width$}", field.label(), width = LABEL_WIDTH),
        style,
    )
}

fn chevron(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_AMBER))
    } else {
        Span::raw("  ")
    }
}

fn text_field(
    field: FormField,
    input: &InputField,
    focused: bool,
    placeholder: Option<&'static str>,
) -> Line<'static> {
    let mut spans = vec![label_span(field, focused), chevron(focused)];
    if focused {
        spans.extend(cursor_spans(input));
    } else if input.text.is_empty() {
        if let Some(hint) = placeholder {
            spans.push(Span::styled(hint, Theme::placeholder()));
        }
    } else {
        spans.push(Span::styled(input.text.clone(), Theme::input_text()));
    }
    Line::from(spans)
}

/// Splits the text at the cursor so the character under it renders
/// reversed; at the end of the text the cursor is a reversed space.
pub(crate) fn cursor_spans(input: &InputField) -> Vec<Span<'static>> {
    let text = &input.text;
    let at = input.cursor.min(text.len());
    let mut spans = Vec::new();
    if at > 0 {
        spans.push(Span::styled(text[..at].to_string(), Theme::input_text()));
    }
    match text[at..].chars().next() {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), Theme::input_cursor()));
            let rest = at + c.len_utf8();
            if rest < text.len() {
                spans.push(Span::styled(text[rest..].to_string(), Theme::input_text()));
            }
        }
        None => spans.push(Span::styled(" ", Theme::input_cursor())),
    }
    spans
}

fn gender_field(selected: Option<Gender>, focused: bool) -> Line<'static> {
    let option = |gender: Gender| {
        let mark = if selected == Some(gender) {
            "(•)"
        } else {
            "( )"
        };
        let style = if selected == Some(gender) {
            Theme::input_text().add_modifier(Modifier::BOLD)
        } else if focused {
            Theme::input_text()
        } else {
            Theme::field_label()
        };
        Span::styled(format!("{mark} {}", gender.label()), style)
    };
    Line::from(vec![
        label_span(FormField::Gender, focused),
        chevron(focused),
        option(Gender::LakiLaki),
        Span::raw("   "),
        option(Gender::Perempuan),
    ])
}

fn submit_row(state: &AppState, focused: bool) -> Line<'static> {
    let (label, style) = if state.is_sending() {
        ("  ⏳ Mengirim...  ", Theme::button_sending())
    } else if focused {
        ("  Kirim  ", Theme::button_focused())
    } else {
        ("  Kirim  ", Theme::button())
    };
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(label, style),
    ])
}
