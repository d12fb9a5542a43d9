use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::guestbook::entry::{EntryDraft, Gender};
use crate::guestbook::store::Guestbook;

/// How long the gate input flashes after an empty submit.
pub const GATE_FLASH: Duration = Duration::from_millis(500);

/// Slide-out tail a notification shows before it is removed.
pub const NOTICE_SLIDE_OUT: Duration = Duration::from_millis(500);

/// How long a freshly revealed section keeps animating, in ticks.
pub const REVEAL_SETTLE_TICKS: u64 = 30;

/// The four sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Profile,
    Portfolio,
    Message,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Profile,
        Section::Portfolio,
        Section::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Profile => "Profile",
            Section::Portfolio => "Portfolio",
            Section::Message => "Message",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Profile => 1,
            Section::Portfolio => 2,
            Section::Message => 3,
        }
    }

    pub fn next(self) -> Section {
        match self {
            Section::Home => Section::Profile,
            Section::Profile => Section::Portfolio,
            Section::Portfolio => Section::Message,
            Section::Message => Section::Message,
        }
    }

    pub fn prev(self) -> Section {
        match self {
            Section::Home => Section::Home,
            Section::Profile => Section::Home,
            Section::Portfolio => Section::Profile,
            Section::Message => Section::Portfolio,
        }
    }
}

/// Which part of the page owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Form,
}

/// Fields of the message form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Birthdate,
    Gender,
    Message,
    Submit,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Phone,
            FormField::Phone => FormField::Birthdate,
            FormField::Birthdate => FormField::Gender,
            FormField::Gender => FormField::Message,
            FormField::Message => FormField::Submit,
            FormField::Submit => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Submit,
            FormField::Phone => FormField::Name,
            FormField::Birthdate => FormField::Phone,
            FormField::Gender => FormField::Birthdate,
            FormField::Message => FormField::Gender,
            FormField::Submit => FormField::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nama",
            FormField::Phone => "Nomor Telepon",
            FormField::Birthdate => "Tanggal Lahir",
            FormField::Gender => "Jenis Kelamin",
            FormField::Message => "Pesan",
            FormField::Submit => "Kirim",
        }
    }
}

/// A single-line text input with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct InputField {
    pub text: String,
    pub cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

/// The name prompt shown over the page until the visitor introduces
/// themselves. It captures all input while visible.
#[derive(Debug)]
pub struct GateState {
    pub visible: bool,
    pub input: InputField,
    /// Set on an empty submit; the input border flashes until it expires.
    pub error_flash: Option<Instant>,
}

impl GateState {
    pub fn new() -> Self {
        Self {
            visible: true,
            input: InputField::new(),
            error_flash: None,
        }
    }

    pub fn flash_active(&self, now: Instant) -> bool {
        self.error_flash
            .map(|at| now.duration_since(at) < GATE_FLASH)
            .unwrap_or(false)
    }
}

/// The message form fields and which one has focus.
#[derive(Debug)]
pub struct FormState {
    pub name: InputField,
    pub phone: InputField,
    pub birthdate: InputField,
    pub message: InputField,
    pub gender: Option<Gender>,
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: InputField::new(),
            phone: InputField::new(),
            birthdate: InputField::new(),
            message: InputField::new(),
            gender: None,
            focus: FormField::Name,
        }
    }

    /// The text input under a field, if it has one.
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut InputField> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Phone => Some(&mut self.phone),
            FormField::Birthdate => Some(&mut self.birthdate),
            FormField::Message => Some(&mut self.message),
            FormField::Gender | FormField::Submit => None,
        }
    }

    /// Clears every field after a successful send.
    pub fn reset(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.birthdate.clear();
        self.message.clear();
        self.gender = None;
        self.focus = FormField::Name;
    }
}

/// A validated draft waiting out its send delay. The draft was captured
/// when the visitor pressed send; later edits to the form do not touch it.
#[derive(Debug)]
pub struct PendingSend {
    pub draft: EntryDraft,
    pub settle_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast in the top-right corner. Only one shows at a time; a new one
/// replaces whatever is there.
#[derive(Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

impl Notice {
    pub fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.shown_at)
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// Name given at the gate; empty until then.
    pub visitor: String,
    pub guestbook: Guestbook,
    pub gate: GateState,
    pub form: FormState,
    pub focus: Focus,
    pub pending_send: Option<PendingSend>,
    pub notice: Option<Notice>,
    /// Scroll offset into the page buffer, in lines.
    pub scroll_y: usize,
    /// Where the glide is headed; equal to `scroll_y` when idle.
    pub scroll_target: usize,
    /// Terminal size, updated on resize.
    pub viewport: (u16, u16),
    /// Tick at which each section first scrolled into view.
    pub revealed_at: [Option<u64>; 4],
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            visitor: String::new(),
            guestbook: Guestbook::new(),
            gate: GateState::new(),
            form: FormState::new(),
            focus: Focus::Page,
            pending_send: None,
            notice: None,
            scroll_y: 0,
            scroll_target: 0,
            viewport: (80, 24),
            revealed_at: [None; 4],
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Replaces the current notification, restarting its timeout.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn animations(&self) -> bool {
        self.config.behavior.animations
    }

    /// Starts a glide toward `line`, or jumps straight there when
    /// animations are off.
    pub fn glide_to(&mut self, line: usize) {
        self.scroll_target = line;
        if !self.animations() {
            self.scroll_y = line;
        }
        self.dirty = true;
    }

    /// Moves immediately, cancelling any glide in progress.
    pub fn snap_to(&mut self, line: usize) {
        self.scroll_y = line;
        self.scroll_target = line;
        self.dirty = true;
    }

    pub fn is_sending(&self) -> bool {
        self.pending_send.is_some()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed_at.iter().all(|r| r.is_some())
    }

    /// Whether anything on screen is mid-animation and needs tick redraws.
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.scroll_y != self.scroll_target {
            return true;
        }
        if self.pending_send.is_some() || self.notice.is_some() {
            return true;
        }
        if self.gate.visible && self.gate.flash_active(now) {
            return true;
        }
        if !self.animations() {
            return false;
        }
        self.revealed_at
            .iter()
            .flatten()
            .any(|at| self.tick_count.saturating_sub(*at) < REVEAL_SETTLE_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_respects_char_boundaries() {
        let mut input = InputField::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hllo");
        input.insert_char('a');
        assert_eq!(input.text, "hallo");
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputField::new();
        for c in "salam kenal ya".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "salam kenal ");
        input.delete_word_back();
        assert_eq!(input.text, "salam ");
    }

    #[test]
    fn test_form_focus_cycles_through_all_fields() {
        let mut field = FormField::Name;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(seen.len(), 6);
        assert!(seen.contains(&FormField::Gender));
        assert!(seen.contains(&FormField::Submit));
        assert_eq!(FormField::Name.prev(), FormField::Submit);
    }

    #[test]
    fn test_form_reset_clears_everything() {
        let mut form = FormState::new();
        form.name.insert_char('x');
        form.message.insert_char('y');
        form.gender = Some(Gender::Perempuan);
        form.focus = FormField::Submit;
        form.reset();
        assert!(form.name.text.is_empty());
        assert!(form.message.text.is_empty());
        assert_eq!(form.gender, None);
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn test_section_order_and_bounds() {
        assert_eq!(Section::Home.next(), Section::Profile);
        assert_eq!(Section::Message.next(), Section::Message);
        assert_eq!(Section::Home.prev(), Section::Home);
        assert_eq!(Section::Portfolio.prev(), Section::Profile);
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
