//! # Composable Register Runtime
//!
//! Runtime implementation for reducer-driven form state.
//!
//! This crate provides the Store that owns the current snapshot, runs the
//! reducer for each action, and publishes every accepted snapshot to
//! observers (the rendering layer).
//!
//! ## Core Components
//!
//! - **Store**: Holds the snapshot and serializes actions through the reducer
//! - **Snapshot channel**: A `watch` channel carrying the latest accepted state
//!
//! ## Example
//!
//! ```ignore
//! use composable_register_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field.clone()).await;
//! ```

use composable_register_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, PartialEq, Eq)]
    pub enum StoreError<E> {
        /// The reducer refused the action
        ///
        /// The stored snapshot is left exactly as it was before the send.
        #[error("Action rejected: {0}")]
        Rejected(E),
    }

    impl<E> StoreError<E> {
        /// The reducer error behind the rejection
        #[must_use]
        pub const fn reducer_error(&self) -> &E {
            match self {
                Self::Rejected(error) => error,
            }
        }
    }
}

pub use error::StoreError;

/// Store module - the runtime coordinator for a reducer
pub mod store {
    use super::{Arc, Reducer, RwLock, StoreError};
    use tokio::sync::watch;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; writers are serialized)
    /// 2. Reducer (screen logic)
    /// 3. Environment (injected dependencies)
    /// 4. Snapshot publishing (a `watch` channel for the rendering layer)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     RegisterState::default(),
    ///     RegisterReducer::new(),
    ///     RegisterEnvironment::new(Arc::new(SystemClock)),
    /// );
    ///
    /// store.send(RegisterAction::NameChanged("Alice".into())).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        snapshots: Arc<watch::Sender<S>>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                snapshots: Arc::clone(&self.snapshots),
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (screen logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (snapshots, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                snapshots: Arc::new(snapshots),
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. On success, replaces the stored snapshot and publishes it
        ///
        /// Concurrent `send()` calls serialize on the write lock, so every
        /// action is reduced against the snapshot produced by the previous one.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Rejected`] if the reducer refuses the action.
        /// The stored snapshot is unchanged and nothing is published.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError<R::Error>>
        where
            A: std::fmt::Debug,
            R::Error: std::fmt::Display,
        {
            let mut state = self.state.write().await;
            tracing::debug!(?action, "Reducing action");

            match self.reducer.reduce(&state, action, &self.environment) {
                Ok(next) => {
                    *state = next;
                    self.snapshots.send_replace(state.clone());
                    metrics::counter!("store.actions.processed").increment(1);
                    Ok(())
                },
                Err(error) => {
                    metrics::counter!("store.actions.rejected").increment(1);
                    tracing::warn!(%error, "Action rejected by reducer");
                    Err(StoreError::Rejected(error))
                },
            }
        }

        /// Read state via a closure
        ///
        /// The closure runs under the read lock; keep it short.
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Clone of the current snapshot
        pub async fn snapshot(&self) -> S {
            self.state(S::clone).await
        }

        /// Subscribe to accepted snapshots
        ///
        /// The receiver starts at the snapshot current at subscription time and
        /// only ever observes the latest value (intermediate snapshots may be
        /// skipped by a slow observer).
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshots.subscribe()
        }
    }
}

pub use store::Store;
