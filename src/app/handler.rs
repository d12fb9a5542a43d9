use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::guestbook::entry::{Gender, GuestEntry};
use crate::guestbook::validate::{self, Field};
use crate::ui::layout;
use crate::ui::page::PageContent;
use chrono::Local;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Lines a mouse wheel notch scrolls.
const WHEEL_STEP: usize = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent);
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.viewport = (w, h);
            state.dirty = true;
        }
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // The name gate captures all input while visible
    if state.gate.visible {
        handle_gate_key(state, key);
        return;
    }

    match state.focus {
        Focus::Form => handle_form_key(state, key),
        Focus::Page => handle_page_key(state, key),
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.gate.visible {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.snap_to(state.scroll_y.saturating_sub(WHEEL_STEP));
        }
        MouseEventKind::ScrollDown => {
            let (width, view) = page_size(state);
            let page = PageContent::build(state, width);
            state.snap_to((state.scroll_y + WHEEL_STEP).min(page.max_scroll(view)));
        }
        _ => {}
    }
}

fn handle_gate_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_name(state),
        KeyCode::Backspace => state.gate.input.delete_back(),
        KeyCode::Delete => state.gate.input.delete_forward(),
        KeyCode::Left => state.gate.input.move_left(),
        KeyCode::Right => state.gate.input.move_right(),
        KeyCode::Home => state.gate.input.move_home(),
        KeyCode::End => state.gate.input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.gate.input.move_home(),
                    'e' => state.gate.input.move_end(),
                    'w' => state.gate.input.delete_word_back(),
                    'u' => state.gate.input.clear(),
                    _ => {}
                }
            } else {
                state.gate.input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn submit_name(state: &mut AppState) {
    let name = state.gate.input.text.trim().to_string();
    if name.is_empty() {
        state.gate.error_flash = Some(Instant::now());
        state.notify(
            NoticeKind::Error,
            "❌ Silakan masukkan nama Anda terlebih dahulu!",
        );
        return;
    }
    let welcome = format!("🎉 Selamat datang {name}! Selamat menjelajahi portfolio saya.");
    tracing::info!(visitor = %name, "visitor introduced themselves");
    state.visitor = name;
    state.gate.visible = false;
    state.notify(NoticeKind::Success, welcome);
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    let (width, view) = page_size(state);
    let page = PageContent::build(state, width);
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char(c @ '1'..='4') => {
            let section = Section::ALL[c as usize - '1' as usize];
            state.glide_to(page.section_top(section));
        }
        KeyCode::Left => {
            let current = page.active_section(state.scroll_y);
            state.glide_to(page.section_top(current.prev()));
        }
        KeyCode::Right => {
            let current = page.active_section(state.scroll_y);
            state.glide_to(page.section_top(current.next()));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.snap_to(state.scroll_y.saturating_sub(1));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.snap_to((state.scroll_y + 1).min(page.max_scroll(view)));
        }
        KeyCode::PageUp => state.snap_to(state.scroll_y.saturating_sub(view)),
        KeyCode::PageDown => {
            state.snap_to((state.scroll_y + view).min(page.max_scroll(view)));
        }
        KeyCode::Home => state.snap_to(0),
        KeyCode::End => state.snap_to(page.max_scroll(view)),
        KeyCode::Tab | KeyCode::Enter => {
            state.focus = Focus::Form;
            state.glide_to(page.section_top(Section::Message));
        }
        _ => {}
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.focus = Focus::Page;
            return;
        }
        KeyCode::Tab => {
            state.form.focus = if key.modifiers.contains(KeyModifiers::SHIFT) {
                state.form.focus.prev()
            } else {
                state.form.focus.next()
            };
            return;
        }
        KeyCode::BackTab => {
            state.form.focus = state.form.focus.prev();
            return;
        }
        _ => {}
    }

    match state.form.focus {
        FormField::Gender => handle_gender_key(state, key),
        FormField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit_form(state),
            KeyCode::Up => state.form.focus = state.form.focus.prev(),
            KeyCode::Down => state.form.focus = state.form.focus.next(),
            _ => {}
        },
        _ => handle_text_field_key(state, key),
    }
}

fn handle_gender_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down => state.form.focus = state.form.focus.next(),
        KeyCode::Up => state.form.focus = state.form.focus.prev(),
        KeyCode::Left => state.form.gender = Some(Gender::LakiLaki),
        KeyCode::Right => state.form.gender = Some(Gender::Perempuan),
        KeyCode::Char(' ') => {
            state.form.gender = Some(match state.form.gender {
                Some(Gender::LakiLaki) => Gender::Perempuan,
                _ => Gender::LakiLaki,
            });
        }
        _ => {}
    }
}

fn handle_text_field_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Down => {
            state.form.focus = state.form.focus.next();
            return;
        }
        KeyCode::Up => {
            state.form.focus = state.form.focus.prev();
            return;
        }
        _ => {}
    }
    let focus = state.form.focus;
    let Some(input) = state.form.field_mut(focus) else {
        return;
    };
    match key.code {
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'w' => input.delete_word_back(),
                    'u' => input.clear(),
                    _ => {}
                }
            } else {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn submit_form(state: &mut AppState) {
    if state.is_sending() && state.config.behavior.block_double_send {
        return;
    }
    match validate::validate(
        &state.form.name.text,
        &state.form.phone.text,
        &state.form.birthdate.text,
        state.form.gender,
        &state.form.message.text,
    ) {
        Ok(draft) => {
            let delay = Duration::from_millis(state.config.behavior.send_delay_ms);
            state.pending_send = Some(PendingSend {
                draft,
                settle_at: Instant::now() + delay,
            });
            state.dirty = true;
            tracing::debug!("message accepted, waiting out the send delay");
        }
        Err(err) => {
            state.form.focus = match err.field() {
                Field::Name => FormField::Name,
                Field::Phone => FormField::Phone,
                Field::Birthdate => FormField::Birthdate,
                Field::Gender => FormField::Gender,
                Field::Message => FormField::Message,
            };
            state.notify(NoticeKind::Error, err.to_string());
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    let now = Instant::now();

    // Expire the gate's error flash
    if let Some(at) = state.gate.error_flash {
        if now.duration_since(at) >= GATE_FLASH {
            state.gate.error_flash = None;
            state.dirty = true;
        }
    }

    // Drop the notification once its timeout and slide-out have run
    let timeout = Duration::from_secs(state.config.behavior.notice_timeout_secs);
    let expired = state
        .notice
        .as_ref()
        .map(|n| n.age(now) >= timeout + NOTICE_SLIDE_OUT)
        .unwrap_or(false);
    if expired {
        state.notice = None;
        state.dirty = true;
    }

    settle_pending(state, now);

    // Step the glide toward its target, covering a third of the distance
    // per tick so it eases out
    if state.scroll_y != state.scroll_target {
        let y = state.scroll_y as isize;
        let target = state.scroll_target as isize;
        let step = ((target - y).abs() / 3).max(1);
        state.scroll_y = if target > y {
            (y + step) as usize
        } else {
            (y - step) as usize
        };
        state.dirty = true;
    }

    mark_reveals(state);

    if state.is_animating(now) {
        state.dirty = true;
    }
}

/// Lands the in-flight message once its delay has passed. Settling at most
/// once is guaranteed by taking the pending slot before touching the store.
pub fn settle_pending(state: &mut AppState, now: Instant) {
    let due = state
        .pending_send
        .as_ref()
        .map(|p| now >= p.settle_at)
        .unwrap_or(false);
    if !due {
        return;
    }
    let Some(pending) = state.pending_send.take() else {
        return;
    };
    let entry = GuestEntry::from_draft(pending.draft, Local::now());
    state.guestbook.record(entry);
    state.form.reset();
    state.notify(
        NoticeKind::Success,
        "✅ Pesan berhasil dikirim! Terima kasih atas pesan Anda.",
    );
    // Bring the list into view so the new message shows at the top of it
    let (width, _) = page_size(state);
    let page = PageContent::build(state, width);
    state.glide_to(page.list_start.saturating_sub(1));
    tracing::info!(total = state.guestbook.len(), "message recorded");
}

/// Marks sections as revealed once they scroll into view. Render dims a
/// section until a few ticks after its mark, which is what makes content
/// fade in as the visitor scrolls down.
fn mark_reveals(state: &mut AppState) {
    if state.all_revealed() {
        return;
    }
    let (width, view) = page_size(state);
    let page = PageContent::build(state, width);
    let limit = state.scroll_y + view.saturating_sub(2);
    let tick = state.tick_count;
    for section in Section::ALL {
        let i = section.index();
        if state.revealed_at[i].is_none() && page.sections[i].start < limit {
            state.revealed_at[i] = Some(tick);
            state.dirty = true;
        }
    }
}

fn page_size(state: &AppState) -> (u16, usize) {
    let (w, h) = state.viewport;
    let layout = layout::compute_layout(Rect::new(0, 0, w, h));
    let inner = layout::page_inner(layout.page);
    (inner.width, inner.height as usize)
}
