//! Reducer for one entry list (emails or phones).
//!
//! The same reducer serves both lists; it only differs in the [`ListKind`]
//! it reports in errors. The form reducer scopes one instance onto each list.

use crate::error::RegisterError;
use crate::types::{EntryAction, EntryList, ListKind};
use composable_register_core::reducer::Reducer;

/// Reducer for an [`EntryList`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryListReducer {
    kind: ListKind,
}

impl EntryListReducer {
    /// Creates a reducer for the list `kind`
    #[must_use]
    pub const fn new(kind: ListKind) -> Self {
        Self { kind }
    }

    fn out_of_range(&self, index: usize, entries: &EntryList) -> RegisterError {
        RegisterError::IndexOutOfRange {
            list: self.kind,
            index,
            len: entries.len(),
        }
    }
}

impl Reducer for EntryListReducer {
    type State = EntryList;
    type Action = EntryAction;
    type Environment = ();
    type Error = RegisterError;

    fn reduce(
        &self,
        entries: &Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> Result<Self::State, Self::Error> {
        match action {
            EntryAction::ValueChanged { index, value } => entries
                .updated(index, |entry| entry.with_value(value))
                .ok_or_else(|| self.out_of_range(index, entries)),

            EntryAction::LabelChanged { index, label } => entries
                .updated(index, |entry| entry.with_label(label))
                .ok_or_else(|| self.out_of_range(index, entries)),

            EntryAction::PrimaryChanged { index, is_primary } => entries
                .with_primary(index, is_primary)
                .ok_or_else(|| self.out_of_range(index, entries)),

            EntryAction::Add => Ok(entries.pushed()),

            EntryAction::Delete { index } => {
                if index >= entries.len() {
                    return Err(self.out_of_range(index, entries));
                }
                entries
                    .removed(index)
                    .ok_or(RegisterError::LastEntry { list: self.kind })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContactEntry;
    use composable_register_testing::{ReducerTest, assertions};

    fn reducer() -> EntryListReducer {
        EntryListReducer::new(ListKind::Email)
    }

    fn three_entries() -> EntryList {
        EntryList::from_entries(vec![
            ContactEntry::primary().with_value("a@b.com".to_string()),
            ContactEntry::new("c@d.com", "work"),
            ContactEntry::new("e@f.com", "home"),
        ])
        .unwrap()
    }

    #[test]
    fn value_change_touches_only_the_value() {
        let before = three_entries();
        let expected_other = before.get(0).cloned();

        ReducerTest::new(reducer())
            .with_env(())
            .given_state(before)
            .when_action(EntryAction::ValueChanged {
                index: 1,
                value: "x@y.org".to_string(),
            })
            .then_state(move |entries| {
                let edited = entries.get(1).unwrap();
                assert_eq!(edited.value, "x@y.org");
                assert_eq!(edited.label, "work");
                assert!(!edited.is_primary);
                assert_eq!(entries.get(0).cloned(), expected_other);
                assert_eq!(entries.len(), 3);
            })
            .run();
    }

    #[test]
    fn label_change_touches_only_the_label() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(three_entries())
            .when_action(EntryAction::LabelChanged {
                index: 0,
                label: "personal".to_string(),
            })
            .then_state(|entries| {
                let edited = entries.get(0).unwrap();
                assert_eq!(edited.label, "personal");
                assert_eq!(edited.value, "a@b.com");
                assert!(edited.is_primary);
            })
            .run();
    }

    #[test]
    fn primary_selection_clears_siblings() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(three_entries())
            .when_action(EntryAction::PrimaryChanged {
                index: 2,
                is_primary: true,
            })
            .then_state(|entries| {
                assert_eq!(entries.primary_index(), Some(2));
                assert_eq!(entries.primary_count(), 1);
            })
            .run();
    }

    #[test]
    fn primary_deselection_leaves_none() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(three_entries())
            .when_action(EntryAction::PrimaryChanged {
                index: 0,
                is_primary: false,
            })
            .then_state(|entries| assert_eq!(entries.primary_count(), 0))
            .run();
    }

    #[test]
    fn primary_converges_from_several_primaries() {
        let many = EntryList::from_entries(vec![
            ContactEntry::primary(),
            ContactEntry::primary(),
            ContactEntry::primary(),
        ])
        .unwrap();

        ReducerTest::new(reducer())
            .with_env(())
            .given_state(many)
            .when_action(EntryAction::PrimaryChanged {
                index: 1,
                is_primary: true,
            })
            .then_state(|entries| {
                assert_eq!(entries.primary_count(), 1);
                assert_eq!(entries.primary_index(), Some(1));
            })
            .run();
    }

    #[test]
    fn add_appends_empty_non_primary_row() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(EntryList::new())
            .when_action(EntryAction::Add)
            .then_state(|entries| {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries.get(1), Some(&ContactEntry::default()));
                assert_eq!(entries.primary_index(), Some(0));
            })
            .run();
    }

    #[test]
    fn delete_shifts_later_rows_down() {
        ReducerTest::new(reducer())
            .with_env(())
            .given_state(three_entries())
            .when_action(EntryAction::Delete { index: 1 })
            .then_state(|entries| {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries.get(1).map(|e| e.value.as_str()), Some("e@f.com"));
            })
            .run();
    }

    #[test]
    fn stale_index_is_rejected() {
        let entries = three_entries();
        for action in [
            EntryAction::ValueChanged {
                index: 3,
                value: String::new(),
            },
            EntryAction::LabelChanged {
                index: 7,
                label: String::new(),
            },
            EntryAction::PrimaryChanged {
                index: 3,
                is_primary: true,
            },
            EntryAction::Delete { index: 3 },
        ] {
            let error = assertions::assert_rejected(&reducer(), &entries, action, &());
            assert!(matches!(
                error,
                RegisterError::IndexOutOfRange {
                    list: ListKind::Email,
                    len: 3,
                    ..
                }
            ));
        }
    }

    #[test]
    fn out_of_range_reports_current_length() {
        let phones = EntryListReducer::new(ListKind::Phone);
        let grown = assertions::assert_accepted(&phones, &EntryList::new(), EntryAction::Add, &());

        let error = assertions::assert_rejected(
            &phones,
            &grown,
            EntryAction::ValueChanged {
                index: 2,
                value: "12345678901".to_string(),
            },
            &(),
        );
        assert_eq!(
            error,
            RegisterError::IndexOutOfRange {
                list: ListKind::Phone,
                index: 2,
                len: 2,
            }
        );
    }

    #[test]
    fn deleting_the_sole_row_is_rejected() {
        ReducerTest::new(EntryListReducer::new(ListKind::Phone))
            .with_env(())
            .given_state(EntryList::new())
            .when_action(EntryAction::Delete { index: 0 })
            .then_error(|error| {
                assert_eq!(
                    error,
                    &RegisterError::LastEntry {
                        list: ListKind::Phone
                    }
                );
            })
            .then_state(|entries| assert_eq!(entries.len(), 1))
            .run();
    }
}
