//! Error types for the registration form.
//!
//! Two kinds of failure exist and they never mix:
//! - [`FieldError`] is data: the message shown under a field after submit.
//! - [`RegisterError`] is a rejected action (a caller bug such as a stale index).

use crate::types::ListKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which shape check a value failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatKind {
    /// Email address shape
    Email,
    /// Web URL shape
    UrlLink,
    /// Phone number shape
    Phone,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::UrlLink => f.write_str("url link"),
            Self::Phone => f.write_str("phone"),
        }
    }
}

/// Validation failure attached to a field; `Display` is the user-facing text
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    /// Nothing was entered
    #[error("can't be empty")]
    Empty,

    /// Name shorter than the minimum length
    #[error("too short")]
    TooShort,

    /// Value does not have the expected shape
    #[error("{0} format is not correct")]
    InvalidFormat(FormatKind),

    /// Phone shorter than the minimum length
    #[error("phone is 11 characters")]
    PhoneTooShort,

    /// Birth year too close to the current year to be real
    #[error("date too recent")]
    DateTooRecent,

    /// Birth year inside the minimum-age window
    #[error("below minimum age")]
    BelowMinimumAge,
}

/// Actions the reducer refuses to apply
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// An index that does not exist in the current snapshot of the list
    #[error("{list} index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange {
        /// List the action targeted
        list: ListKind,
        /// Requested position
        index: usize,
        /// Length of the list at the time of the action
        len: usize,
    },

    /// Deleting the only row would leave the list empty
    #[error("cannot delete the last {list} entry")]
    LastEntry {
        /// List the action targeted
        list: ListKind,
    },

    /// An entry list was built from no entries
    #[error("an entry list needs at least one entry")]
    EmptyEntryList,
}
