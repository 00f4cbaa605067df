//! Reducer composition utilities
//!
//! - **`scope_reducer`**: Focus a reducer on one part of a larger state
//!
//! A scoped reducer reads the child snapshot out of the parent, reduces it,
//! and rebuilds the parent around the new child. The parent passed in is
//! never modified, so a rejected child action leaves no trace.
//!
//! # Examples
//!
//! ```
//! use composable_register_core::reducer::Reducer;
//! use composable_register_core::composition::scope_reducer;
//!
//! #[derive(Clone, Default)]
//! struct TagsState {
//!     tags: Vec<String>,
//! }
//!
//! enum TagsAction {
//!     Push(String),
//! }
//!
//! struct TagsReducer;
//!
//! impl Reducer for TagsReducer {
//!     type State = TagsState;
//!     type Action = TagsAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(&self, state: &TagsState, action: TagsAction, _env: &()) -> Result<TagsState, Self::Error> {
//!         let TagsAction::Push(tag) = action;
//!         let mut tags = state.tags.clone();
//!         tags.push(tag);
//!         Ok(TagsState { tags })
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct ProfileState {
//!     tags: TagsState,
//!     name: String,
//! }
//!
//! let scoped = scope_reducer(
//!     TagsReducer,
//!     |profile: &ProfileState| &profile.tags,
//!     |profile: &ProfileState, tags: TagsState| ProfileState { tags, ..profile.clone() },
//! );
//!
//! let state = ProfileState::default();
//! let next = scoped
//!     .reduce(&state, TagsAction::Push("work".to_string()), &())
//!     .unwrap_or_default();
//! assert_eq!(next.tags.tags, vec!["work".to_string()]);
//! assert!(state.tags.tags.is_empty());
//! ```

use crate::reducer::Reducer;

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows the same child reducer to be reused for several fields of
/// the parent state (one scope per field).
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (part of `S`)
/// - `A`: The child action type
/// - `E`: The child environment type
/// - `R`: The child reducer
pub const fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
) -> ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> std::fmt::Debug for ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;
    type Error = R::Error;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Self::State, Self::Error> {
        let sub_state = (self.get_state)(state);
        let next_sub_state = self.reducer.reduce(sub_state, action, env)?;
        Ok((self.set_state)(state, next_sub_state))
    }
}
