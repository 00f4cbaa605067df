//! Reducer logic for the registration form.
//!
//! Field edits replace one value, list actions are delegated to an
//! [`EntryListReducer`] scoped onto the matching list, and submit runs the
//! validator before deciding whether the form succeeded.

use crate::entries::EntryListReducer;
use crate::error::RegisterError;
use crate::types::{EntryAction, EntryList, ListKind, RegisterAction, RegisterState};
use crate::validation;
use composable_register_core::{
    composition::{ScopedReducer, scope_reducer},
    environment::Clock,
    reducer::Reducer,
};
use std::sync::Arc;

/// Environment dependencies for the registration reducer
#[derive(Clone)]
pub struct RegisterEnvironment {
    /// Clock providing the current year for birthday checks
    pub clock: Arc<dyn Clock>,
}

impl RegisterEnvironment {
    /// Creates a new `RegisterEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl std::fmt::Debug for RegisterEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterEnvironment")
            .finish_non_exhaustive()
    }
}

type EntriesScope = ScopedReducer<RegisterState, EntryList, EntryAction, (), EntryListReducer>;

fn emails_of(state: &RegisterState) -> &EntryList {
    &state.emails
}

fn with_emails(state: &RegisterState, emails: EntryList) -> RegisterState {
    RegisterState {
        emails,
        ..state.clone()
    }
}

fn phones_of(state: &RegisterState) -> &EntryList {
    &state.phones
}

fn with_phones(state: &RegisterState, phones: EntryList) -> RegisterState {
    RegisterState {
        phones,
        ..state.clone()
    }
}

/// Reducer for the registration form
#[derive(Debug)]
pub struct RegisterReducer {
    emails: EntriesScope,
    phones: EntriesScope,
}

impl RegisterReducer {
    /// Creates a new `RegisterReducer`
    #[must_use]
    pub fn new() -> Self {
        Self {
            emails: scope_reducer(EntryListReducer::new(ListKind::Email), emails_of, with_emails),
            phones: scope_reducer(EntryListReducer::new(ListKind::Phone), phones_of, with_phones),
        }
    }

    /// Runs validation and sets the success flag when nothing is flagged
    fn submit(state: &RegisterState, env: &RegisterEnvironment) -> RegisterState {
        let today = env.clock.now().date_naive();
        let validated = validation::validate(state, today);
        let error_count = validated.error_count();

        if error_count == 0 {
            tracing::info!("Registration form submitted");
            RegisterState {
                submit_succeeded: true,
                ..validated
            }
        } else {
            tracing::info!(error_count, "Registration form has validation errors");
            validated
        }
    }
}

impl Default for RegisterReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for RegisterReducer {
    type State = RegisterState;
    type Action = RegisterAction;
    type Environment = RegisterEnvironment;
    type Error = RegisterError;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Self::State, Self::Error> {
        match action {
            // ========== Field edits ==========
            RegisterAction::NameChanged(name) => Ok(RegisterState {
                name,
                ..state.clone()
            }),
            RegisterAction::WebsiteChanged(website) => Ok(RegisterState {
                website,
                ..state.clone()
            }),
            RegisterAction::BirthdateChanged(birthday) => Ok(RegisterState {
                birthday: Some(birthday),
                ..state.clone()
            }),
            RegisterAction::BirthdateCleared => Ok(RegisterState {
                birthday: None,
                ..state.clone()
            }),

            // ========== Entry lists ==========
            RegisterAction::Email(action) => self.emails.reduce(state, action, &()),
            RegisterAction::Phone(action) => self.phones.reduce(state, action, &()),

            // ========== Submit cycle ==========
            RegisterAction::SubmitClicked => Ok(Self::submit(state, env)),
            RegisterAction::AcknowledgeSuccess => Ok(RegisterState {
                submit_succeeded: false,
                ..state.clone()
            }),
        }
    }
}
