//! Submit-time validation.
//!
//! Each field has an ordered list of rules and the first failing rule wins.
//! Fields are independent: every field is checked on every submit so the
//! screen can show all problems at once. Emptiness and length checks look at
//! the raw text; shape checks look at the trimmed text.

use crate::error::{FieldError, FormatKind};
use crate::types::{Birthdate, ContactEntry, RegisterState};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters in a name
pub const MIN_NAME_LEN: usize = 5;

/// Minimum number of characters in a phone number (not digits)
pub const MIN_PHONE_LEN: usize = 11;

/// Birth years later than `current year - TOO_RECENT_YEARS` are rejected outright
pub const TOO_RECENT_YEARS: i32 = 3;

/// Birth years from `current year - MINIMUM_AGE_YEARS` on are under age
pub const MINIMUM_AGE_YEARS: i32 = 15;

#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("email pattern is valid")
});

#[allow(clippy::expect_used)]
static WEB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:https?|rtsp)://)?",
        r"(?:(?:[a-z0-9](?:[a-z0-9\-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}|(?:[0-9]{1,3}\.){3}[0-9]{1,3})",
        r"(?::[0-9]{1,5})?",
        r"(?:[/?#]\S*)?$",
    ))
    .expect("web url pattern is valid")
});

#[allow(clippy::expect_used)]
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]+[\- .]*)?(\([0-9]+\)[\- .]*)?([0-9][0-9\- .]+[0-9])$")
        .expect("phone pattern is valid")
});

/// Checks the name field
#[must_use]
pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        Some(FieldError::Empty)
    } else if name.chars().count() < MIN_NAME_LEN {
        Some(FieldError::TooShort)
    } else {
        None
    }
}

/// Checks the website field
#[must_use]
pub fn validate_website(website: &str) -> Option<FieldError> {
    if website.is_empty() {
        Some(FieldError::Empty)
    } else if !WEB_URL_REGEX.is_match(website.trim()) {
        Some(FieldError::InvalidFormat(FormatKind::UrlLink))
    } else {
        None
    }
}

/// Checks one email value
#[must_use]
pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::Empty)
    } else if !EMAIL_REGEX.is_match(email.trim()) {
        Some(FieldError::InvalidFormat(FormatKind::Email))
    } else {
        None
    }
}

/// Checks one phone value
#[must_use]
pub fn validate_phone(phone: &str) -> Option<FieldError> {
    if phone.is_empty() {
        Some(FieldError::Empty)
    } else if phone.chars().count() < MIN_PHONE_LEN {
        Some(FieldError::PhoneTooShort)
    } else if !PHONE_REGEX.is_match(phone.trim()) {
        Some(FieldError::InvalidFormat(FormatKind::Phone))
    } else {
        None
    }
}

/// Checks the birthdate against the year of `today`
#[must_use]
pub fn validate_birthday(birthday: Option<&Birthdate>, today: NaiveDate) -> Option<FieldError> {
    let Some(birthday) = birthday else {
        return Some(FieldError::Empty);
    };

    let current_year = today.year();
    if birthday.year() > current_year - TOO_RECENT_YEARS {
        Some(FieldError::DateTooRecent)
    } else if birthday.year() >= current_year - MINIMUM_AGE_YEARS {
        Some(FieldError::BelowMinimumAge)
    } else {
        None
    }
}

/// Recomputes every error field of `state`
///
/// Errors from an earlier submit are discarded, never patched.
#[must_use]
pub fn validate(state: &RegisterState, today: NaiveDate) -> RegisterState {
    let check = |rule: fn(&str) -> Option<FieldError>| {
        move |_: usize, entry: ContactEntry| {
            let error = rule(&entry.value);
            entry.with_error(error)
        }
    };

    RegisterState {
        name_error: validate_name(&state.name),
        website_error: validate_website(&state.website),
        birthday_error: validate_birthday(state.birthday.as_ref(), today),
        emails: state.emails.map_entries(check(validate_email)),
        phones: state.phones.map_entries(check(validate_phone)),
        ..state.clone()
    }
}
