//! Form validation for guestbook submissions.
//!
//! Rules run in a fixed order and the first failure wins, so the visitor is
//! always pointed at one field at a time. All text inputs are trimmed before
//! any rule looks at them; the trimmed values are what gets stored.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::guestbook::entry::{EntryDraft, Gender};

/// Digits, `+`, `-`, spaces and parentheses, 6 to 20 characters total.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{6,20}$").expect("phone pattern compiles"));

/// Form field a validation failure points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Birthdate,
    Gender,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("❌ Nama harus diisi!")]
    NameRequired,
    #[error("❌ Nomor telepon harus diisi!")]
    PhoneRequired,
    #[error("❌ Tanggal lahir harus diisi!")]
    BirthdateRequired,
    #[error("❌ Jenis kelamin harus dipilih!")]
    GenderRequired,
    #[error("❌ Pesan harus diisi!")]
    MessageRequired,
    #[error("❌ Format nomor telepon tidak valid!")]
    PhoneFormat,
}

impl ValidationError {
    /// Which field should take focus after this failure.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::PhoneRequired | ValidationError::PhoneFormat => Field::Phone,
            ValidationError::BirthdateRequired => Field::Birthdate,
            ValidationError::GenderRequired => Field::Gender,
            ValidationError::MessageRequired => Field::Message,
        }
    }
}

/// Checks a submission and produces the draft that will be sent.
///
/// Presence is checked for every field before the phone format, so a form
/// with several problems reports the empty fields first.
pub fn validate(
    name: &str,
    phone: &str,
    birthdate: &str,
    gender: Option<Gender>,
    message: &str,
) -> Result<EntryDraft, ValidationError> {
    let name = name.trim();
    let phone = phone.trim();
    let birthdate = birthdate.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if phone.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if birthdate.is_empty() {
        return Err(ValidationError::BirthdateRequired);
    }
    let Some(gender) = gender else {
        return Err(ValidationError::GenderRequired);
    };
    if message.is_empty() {
        return Err(ValidationError::MessageRequired);
    }
    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::PhoneFormat);
    }

    Ok(EntryDraft {
        name: name.to_string(),
        phone: phone.to_string(),
        birthdate: birthdate.to_string(),
        gender: gender.label().to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> (String, String, String, Option<Gender>, String) {
        (
            "Budi".to_string(),
            "08123456789".to_string(),
            "2000-01-15".to_string(),
            Some(Gender::LakiLaki),
            "Halo, salam kenal!".to_string(),
        )
    }

    #[test]
    fn test_accepts_filled_form() {
        let (name, phone, birth, gender, message) = filled();
        let draft = validate(&name, &phone, &birth, gender, &message).unwrap();
        assert_eq!(draft.name, "Budi");
        assert_eq!(draft.gender, "Laki-laki");
    }

    #[test]
    fn test_rejects_missing_name_first() {
        // Everything else is also wrong, but the name rule runs first.
        let err = validate("", "", "", None, "").unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn test_rejects_each_missing_field_in_order() {
        let (name, phone, birth, gender, message) = filled();
        assert_eq!(
            validate(&name, "", "", None, "").unwrap_err(),
            ValidationError::PhoneRequired
        );
        assert_eq!(
            validate(&name, &phone, "", None, "").unwrap_err(),
            ValidationError::BirthdateRequired
        );
        assert_eq!(
            validate(&name, &phone, &birth, None, "").unwrap_err(),
            ValidationError::GenderRequired
        );
        assert_eq!(
            validate(&name, &phone, &birth, gender, "").unwrap_err(),
            ValidationError::MessageRequired
        );
        assert!(validate(&name, &phone, &birth, gender, &message).is_ok());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let (_, phone, birth, gender, message) = filled();
        assert_eq!(
            validate("   ", &phone, &birth, gender, &message).unwrap_err(),
            ValidationError::NameRequired
        );
        assert_eq!(
            validate("Budi", &phone, &birth, gender, " \t ").unwrap_err(),
            ValidationError::MessageRequired
        );
    }

    #[test]
    fn test_phone_format_checked_after_presence() {
        let (name, _, birth, gender, _) = filled();
        // Message missing outranks the bad phone format.
        assert_eq!(
            validate(&name, "abc", &birth, gender, "").unwrap_err(),
            ValidationError::MessageRequired
        );
        let err = validate(&name, "abc", &birth, gender, "Halo").unwrap_err();
        assert_eq!(err, ValidationError::PhoneFormat);
        assert_eq!(err.field(), Field::Phone);
    }

    #[test]
    fn test_phone_accepts_plus_dash_space_parens() {
        let (name, _, birth, gender, message) = filled();
        for phone in ["+62 812-3456-7890", "(021) 555-0123", "081234"] {
            assert!(
                validate(&name, phone, &birth, gender, &message).is_ok(),
                "expected {phone:?} to pass"
            );
        }
    }

    #[test]
    fn test_phone_rejects_letters_and_bad_lengths() {
        let (name, _, birth, gender, message) = filled();
        for phone in ["0812abc", "12345", "123456789012345678901"] {
            assert_eq!(
                validate(&name, phone, &birth, gender, &message).unwrap_err(),
                ValidationError::PhoneFormat,
                "expected {phone:?} to fail"
            );
        }
    }

    #[test]
    fn test_draft_keeps_trimmed_values() {
        let draft = validate(
            "  Budi  ",
            " 08123456789 ",
            " 2000-01-15 ",
            Some(Gender::Perempuan),
            "  Halo!  ",
        )
        .unwrap();
        assert_eq!(draft.name, "Budi");
        assert_eq!(draft.phone, "08123456789");
        assert_eq!(draft.birthdate, "2000-01-15");
        assert_eq!(draft.message, "Halo!");
    }
}
