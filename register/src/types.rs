//! Domain types for the registration form.
//!
//! The form is a single snapshot (`RegisterState`) holding the scalar fields,
//! two entry lists (emails and phones), and the error produced for each
//! field by the last submit. Snapshots are values: every action produces a
//! new one.

use crate::error::{FieldError, RegisterError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format used to present a birthdate, e.g. `Jan 05 1990`
pub const BIRTHDATE_DISPLAY_FORMAT: &str = "%b %d %Y";

/// Text of the one-shot notice shown after a successful submit
pub const SUCCESS_MESSAGE: &str = "registered successfully";

/// Which entry list an action or error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// The email list
    Email,
    /// The phone list
    Phone,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Phone => f.write_str("phone"),
        }
    }
}

/// One email or phone row
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    /// The email address or phone number text
    pub value: String,
    /// Free-form tag ("home", "work", ...)
    pub label: String,
    /// Whether this is the preferred contact in its list
    pub is_primary: bool,
    /// Set by validation only
    pub error: Option<FieldError>,
}

impl ContactEntry {
    /// Creates a non-primary entry with no error
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            is_primary: false,
            error: None,
        }
    }

    /// The empty primary entry every list starts with
    #[must_use]
    pub fn primary() -> Self {
        Self {
            is_primary: true,
            ..Self::default()
        }
    }

    /// Returns this entry with `value` replaced
    #[must_use]
    pub fn with_value(self, value: String) -> Self {
        Self { value, ..self }
    }

    /// Returns this entry with `label` replaced
    #[must_use]
    pub fn with_label(self, label: String) -> Self {
        Self { label, ..self }
    }

    /// Returns this entry with the primary flag replaced
    #[must_use]
    pub fn with_primary(self, is_primary: bool) -> Self {
        Self { is_primary, ..self }
    }

    /// Returns this entry with the validation error replaced
    #[must_use]
    pub fn with_error(self, error: Option<FieldError>) -> Self {
        Self { error, ..self }
    }

    /// Whether the last submit flagged this entry
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Ordered, never-empty list of contact entries
///
/// Indices are positional: removing entry `i` shifts every later entry down
/// by one, so an index is only meaningful for the snapshot it was read from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContactEntry>", into = "Vec<ContactEntry>")]
pub struct EntryList {
    entries: Vec<ContactEntry>,
}

impl EntryList {
    /// A list holding one empty primary entry
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![ContactEntry::primary()],
        }
    }

    /// Builds a list from existing entries
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::EmptyEntryList`] if `entries` is empty.
    pub fn from_entries(entries: Vec<ContactEntry>) -> Result<Self, RegisterError> {
        if entries.is_empty() {
            return Err(RegisterError::EmptyEntryList);
        }
        Ok(Self { entries })
    }

    /// Number of entries (at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ContactEntry> {
        self.entries.get(index)
    }

    /// Iterates over the entries in display order
    pub fn iter(&self) -> std::slice::Iter<'_, ContactEntry> {
        self.entries.iter()
    }

    /// Position of the primary entry, if one is selected
    #[must_use]
    pub fn primary_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_primary)
    }

    /// Number of entries flagged as primary
    #[must_use]
    pub fn primary_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_primary).count()
    }

    /// Whether the row at `index` offers a delete affordance
    ///
    /// The primary row and a sole remaining row cannot be deleted from the UI.
    #[must_use]
    pub fn can_delete(&self, index: usize) -> bool {
        self.len() > 1 && self.get(index).is_some_and(|entry| !entry.is_primary)
    }

    /// Whether any entry carries a validation error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(ContactEntry::has_error)
    }

    /// New list with `f` applied to the entry at `index`; `None` if out of range
    pub(crate) fn updated(
        &self,
        index: usize,
        f: impl FnOnce(ContactEntry) -> ContactEntry,
    ) -> Option<Self> {
        let mut entries = self.entries.clone();
        let slot = entries.get_mut(index)?;
        *slot = f(std::mem::take(slot));
        Some(Self { entries })
    }

    /// New list where only `index` may be primary, set to `is_primary`
    pub(crate) fn with_primary(&self, index: usize, is_primary: bool) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        Some(self.map_entries(|position, entry| {
            entry.with_primary(position == index && is_primary)
        }))
    }

    /// New list with an empty, non-primary entry appended
    pub(crate) fn pushed(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.push(ContactEntry::default());
        Self { entries }
    }

    /// New list without the entry at `index`; `None` if out of range or if it
    /// is the only entry
    pub(crate) fn removed(&self, index: usize) -> Option<Self> {
        if index >= self.len() || self.len() == 1 {
            return None;
        }
        let mut entries = self.entries.clone();
        entries.remove(index);
        Some(Self { entries })
    }

    /// New list with `f` applied to every entry
    pub(crate) fn map_entries(&self, f: impl Fn(usize, ContactEntry) -> ContactEntry) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .cloned()
                .enumerate()
                .map(|(position, entry)| f(position, entry))
                .collect(),
        }
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<ContactEntry>> for EntryList {
    type Error = RegisterError;

    fn try_from(entries: Vec<ContactEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<EntryList> for Vec<ContactEntry> {
    fn from(list: EntryList) -> Self {
        list.entries
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a ContactEntry;
    type IntoIter = std::slice::Iter<'a, ContactEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A birthdate picked by the user
///
/// Stored as a calendar date; the display string is derived from it and is
/// never parsed back for validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Wraps a calendar date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a birthdate from year, month and day; `None` if not a real date
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The calendar date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Calendar year of the date
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDATE_DISPLAY_FORMAT))
    }
}

impl FromStr for Birthdate {
    type Err = chrono::ParseError;

    /// Parses the display form (`Jan 05 1990`), as handed over by a date picker
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), BIRTHDATE_DISPLAY_FORMAT).map(Self)
    }
}

/// Where the screen is in its submit cycle, derived from the snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    /// No errors shown and no pending success notice
    Editing,
    /// The last submit found errors that are still displayed
    Validated,
    /// The last submit succeeded and the notice has not been acknowledged
    Submitted,
}

/// State of the registration form
///
/// Created once per screen session with [`RegisterState::default`] and
/// replaced by the reducer on every action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterState {
    /// Full name
    pub name: String,
    /// Error from the last submit for `name`
    pub name_error: Option<FieldError>,
    /// Website URL
    pub website: String,
    /// Error from the last submit for `website`
    pub website_error: Option<FieldError>,
    /// Picked birthdate, if any
    pub birthday: Option<Birthdate>,
    /// Error from the last submit for `birthday`
    pub birthday_error: Option<FieldError>,
    /// Email rows
    pub emails: EntryList,
    /// Phone rows
    pub phones: EntryList,
    /// Set by a clean submit, cleared once the notice is acknowledged
    pub submit_succeeded: bool,
}

impl RegisterState {
    /// Creates the initial form state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry list for `kind`
    #[must_use]
    pub const fn entries(&self, kind: ListKind) -> &EntryList {
        match kind {
            ListKind::Email => &self.emails,
            ListKind::Phone => &self.phones,
        }
    }

    /// Birthday as shown in the form, empty when none was picked
    #[must_use]
    pub fn birthday_display(&self) -> String {
        self.birthday.map(|date| date.to_string()).unwrap_or_default()
    }

    /// Number of fields and entries currently flagged
    #[must_use]
    pub fn error_count(&self) -> usize {
        let scalar = [&self.name_error, &self.website_error, &self.birthday_error]
            .into_iter()
            .filter(|error| error.is_some())
            .count();
        let listed = self
            .emails
            .iter()
            .chain(self.phones.iter())
            .filter(|entry| entry.has_error())
            .count();
        scalar + listed
    }

    /// Whether any field or entry is flagged
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// The screen phase this snapshot represents
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        if self.submit_succeeded {
            FormPhase::Submitted
        } else if self.has_errors() {
            FormPhase::Validated
        } else {
            FormPhase::Editing
        }
    }

    /// The success notice to show, if one is pending
    #[must_use]
    pub const fn success_notice(&self) -> Option<&'static str> {
        if self.submit_succeeded {
            Some(SUCCESS_MESSAGE)
        } else {
            None
        }
    }
}

/// Actions on one entry list (the same vocabulary for emails and phones)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryAction {
    /// The value text of a row was edited
    ValueChanged {
        /// Row position
        index: usize,
        /// New text
        value: String,
    },

    /// The label of a row was edited
    LabelChanged {
        /// Row position
        index: usize,
        /// New label
        label: String,
    },

    /// The primary checkbox of a row was toggled
    PrimaryChanged {
        /// Row position
        index: usize,
        /// New flag for this row; every other row is cleared
        is_primary: bool,
    },

    /// A new empty row was requested
    Add,

    /// A row was deleted
    Delete {
        /// Row position
        index: usize,
    },
}

/// Everything the registration screen can send to the reducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegisterAction {
    /// The name field was edited
    NameChanged(String),
    /// The website field was edited
    WebsiteChanged(String),
    /// The date picker committed a date
    BirthdateChanged(Birthdate),
    /// The picked date was cleared
    BirthdateCleared,
    /// An action on the email list
    Email(EntryAction),
    /// An action on the phone list
    Phone(EntryAction),
    /// The submit button was pressed
    SubmitClicked,
    /// The success notice was shown
    AcknowledgeSuccess,
}

impl RegisterAction {
    /// Wraps an entry action for the list `kind`
    #[must_use]
    pub fn entry(kind: ListKind, action: EntryAction) -> Self {
        match kind {
            ListKind::Email => Self::Email(action),
            ListKind::Phone => Self::Phone(action),
        }
    }
}
