//! # Composable Register Core
//!
//! Core traits and types for reducer-driven form state.
//!
//! This crate provides the fundamental abstractions for building screens whose
//! state is a plain value, advanced one action at a time by a pure reducer.
//!
//! ## Core Concepts
//!
//! - **State**: An owned snapshot of everything the screen shows
//! - **Action**: All possible inputs to a reducer (edits, list operations, submit)
//! - **Reducer**: Pure function `(&State, Action, &Environment) → Result<State, Error>`
//! - **Environment**: Injected dependencies via traits (the clock)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Snapshots are replaced, never mutated in place
//! - Contract violations fail fast instead of being clamped
//!
//! ## Example
//!
//! ```
//! use composable_register_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct NameState {
//!     name: String,
//! }
//!
//! enum NameAction {
//!     Changed(String),
//! }
//!
//! struct NameReducer;
//!
//! impl Reducer for NameReducer {
//!     type State = NameState;
//!     type Action = NameAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &NameState,
//!         action: NameAction,
//!         _env: &(),
//!     ) -> Result<NameState, Self::Error> {
//!         match action {
//!             NameAction::Changed(name) => Ok(NameState { name, ..state.clone() }),
//!         }
//!     }
//! }
//!
//! let before = NameState::default();
//! let after = NameReducer
//!     .reduce(&before, NameAction::Changed("Alice".to_string()), &())
//!     .unwrap_or_default();
//! assert_eq!(after.name, "Alice");
//! assert!(before.name.is_empty());
//! ```

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for screen logic
///
/// Reducers are pure functions: `(&State, Action, &Environment) → Result<State, Error>`
///
/// They contain all form logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for screen logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The snapshot this reducer advances
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Contract violations the reducer refuses to apply
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for RegisterReducer {
    ///     type State = RegisterState;
    ///     type Action = RegisterAction;
    ///     type Environment = RegisterEnvironment;
    ///     type Error = RegisterError;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &RegisterState,
    ///         action: RegisterAction,
    ///         env: &RegisterEnvironment,
    ///     ) -> Result<RegisterState, RegisterError> {
    ///         match action {
    ///             RegisterAction::NameChanged(name) => Ok(state.with_name(name)),
    ///             _ => Ok(state.clone()),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Contract violation raised instead of producing a state
        type Error;

        /// Reduce an action into the next state
        ///
        /// This is a pure function that:
        /// 1. Checks the action's preconditions against `state`
        /// 2. Builds the next snapshot without touching `state`
        ///
        /// # Arguments
        ///
        /// - `state`: The current snapshot
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action violates a precondition
        /// (for example a stale list index). No partial state is produced.
        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Self::State, Self::Error>;
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
