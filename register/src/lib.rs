//! Contact registration form built on the reducer architecture.
//!
//! The form collects a name, a list of emails, a list of phone numbers, a
//! website, and a birthdate, and validates everything when submitted. It
//! demonstrates:
//!
//! - A flat reducer over field edits and list operations
//! - One child reducer reused for two lists through `scope_reducer`
//! - Submit-time validation that recomputes every error at once
//! - Contract violations (stale indices) rejected instead of clamped
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```no_run
//! use composable_register_core::environment::SystemClock;
//! use composable_register_runtime::Store;
//! use register::{
//!     Birthdate, EntryAction, RegisterAction, RegisterEnvironment, RegisterReducer,
//!     RegisterState,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = RegisterEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(RegisterState::new(), RegisterReducer::new(), env);
//!
//! store.send(RegisterAction::NameChanged("Charlotte".to_string())).await?;
//! store
//!     .send(RegisterAction::Email(EntryAction::ValueChanged {
//!         index: 0,
//!         value: "c@example.com".to_string(),
//!     }))
//!     .await?;
//! store.send(RegisterAction::BirthdateChanged("Jan 05 1990".parse::<Birthdate>()?)).await?;
//! store.send(RegisterAction::SubmitClicked).await?;
//!
//! let state = store.snapshot().await;
//! println!("Phase: {:?}, errors: {}", state.phase(), state.error_count());
//! # Ok(())
//! # }
//! ```

pub mod entries;
pub mod error;
pub mod reducer;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use entries::EntryListReducer;
pub use error::{FieldError, FormatKind, RegisterError};
pub use reducer::{RegisterEnvironment, RegisterReducer};
pub use types::{
    Birthdate, ContactEntry, EntryAction, EntryList, FormPhase, ListKind, RegisterAction,
    RegisterState, SUCCESS_MESSAGE,
};
