//! # Composable Register Testing
//!
//! Testing utilities and helpers for reducer-driven form state.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducers
//! - Assertion helpers for reducer outcomes
//!
//! ## Example
//!
//! ```ignore
//! use composable_register_testing::{ReducerTest, test_clock};
//!
//! ReducerTest::new(RegisterReducer::new())
//!     .with_env(RegisterEnvironment::new(Arc::new(test_clock())))
//!     .given_state(RegisterState::default())
//!     .when_action(RegisterAction::NameChanged("Alice".into()))
//!     .then_state(|state| assert_eq!(state.name, "Alice"))
//!     .run();
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use composable_register_core::environment::Clock;


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, NaiveDate, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_register_testing::mocks::FixedClock;
    /// use composable_register_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }

        /// Create a fixed clock at midnight UTC on `date`
        #[must_use]
        pub fn on_date(date: NaiveDate) -> Self {
            Self::new(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};
