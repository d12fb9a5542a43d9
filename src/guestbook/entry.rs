//! Value types for guestbook messages.

use chrono::{DateTime, Local};

use crate::guestbook::datefmt;

/// Gender choice on the message form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    LakiLaki,
    Perempuan,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::LakiLaki => "Laki-laki",
            Gender::Perempuan => "Perempuan",
        }
    }
}

/// A validated form submission, captured at the moment the visitor pressed
/// send. The form fields may be edited or cleared afterwards without
/// affecting a draft already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub phone: String,
    pub birthdate: String,
    pub gender: String,
    pub message: String,
}

/// An accepted guestbook entry as the list renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestEntry {
    pub name: String,
    pub phone: String,
    pub birthdate: String,
    pub gender: String,
    pub message: String,
    pub timestamp: String,
}

impl GuestEntry {
    /// Finalizes a draft once its send delay has elapsed. The birthdate is
    /// expanded to the long form here and the capture time is stamped, so
    /// the stored entry never changes after this point.
    pub fn from_draft(draft: EntryDraft, accepted_at: DateTime<Local>) -> Self {
        Self {
            name: draft.name,
            phone: draft.phone,
            birthdate: datefmt::long_date(&draft.birthdate),
            gender: draft.gender,
            message: draft.message,
            timestamp: datefmt::timestamp(accepted_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_draft_expands_birthdate_and_stamps_time() {
        let draft = EntryDraft {
            name: "Budi".to_string(),
            phone: "08123456789".to_string(),
            birthdate: "2000-01-15".to_string(),
            gender: Gender::LakiLaki.label().to_string(),
            message: "Halo!".to_string(),
        };
        let at = Local.with_ymd_and_hms(2025, 9, 1, 14, 30, 0).unwrap();
        let entry = GuestEntry::from_draft(draft, at);
        assert_eq!(entry.name, "Budi");
        assert_eq!(entry.birthdate, "Sabtu, 15 Januari 2000");
        assert_eq!(entry.timestamp, "Senin, 1 September 2025 14.30");
    }

    #[test]
    fn test_from_draft_keeps_unparseable_birthdate_verbatim() {
        let draft = EntryDraft {
            name: "Siti".to_string(),
            phone: String::new(),
            birthdate: "besok".to_string(),
            gender: Gender::Perempuan.label().to_string(),
            message: "Hai".to_string(),
        };
        let at = Local.with_ymd_and_hms(2025, 9, 1, 8, 0, 0).unwrap();
        let entry = GuestEntry::from_draft(draft, at);
        assert_eq!(entry.birthdate, "besok");
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::LakiLaki.label(), "Laki-laki");
        assert_eq!(Gender::Perempuan.label(), "Perempuan");
    }
}
