// Allow must_use_candidate since report accessors are often called for their
// side effect on the surrounding assertion flow
#![allow(clippy::must_use_candidate)]

//! The failure-reporting boundary.
//!
//! Assertions never decide what a failure *means*; they hand a formatted
//! diagnostic to a [`Report`] and return `false`. The host test harness is
//! reached through this trait, and two implementations ship with the crate:
//!
//! - [`Recorder`] - collects failures in memory, for soft-assertion flows
//!   and for testing assertion code itself
//! - [`PanicOnFailure`] - panics on the first failure, for use directly
//!   inside `#[test]` functions where aborting is the desired outcome
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::{assert_that, Recorder};
//!
//! let report = Recorder::new();
//! assert_that(&report, 1).equals(2);
//!
//! assert_eq!(report.failure_count(), 1);
//! assert!(report.last_failure().unwrap().contains("does not equal"));
//! ```

use parking_lot::Mutex;

/// A sink for assertion failures.
///
/// Implementations record the failure against the current test context.
/// Reporting a failure must not abort execution; the assertion's `bool`
/// return value is how callers stop early if they want to.
pub trait Report {
    /// Record a fully formatted failure message.
    fn report_failure(&self, message: &str);

    /// Mark the calling frame as assertion plumbing so the host attributes
    /// the failure to the caller's source location.
    ///
    /// The default implementation does nothing; hosts that track blame
    /// frames override it.
    fn mark_helper(&self) {}
}

/// A [`Report`] that collects failures in memory.
///
/// The recorder is thread-safe and never aborts, which makes it the natural
/// sink for "check everything, then decide" test flows.
///
/// # Example
///
/// ```rust
/// use testkit_assert::{assert_that, Recorder};
///
/// let report = Recorder::new();
/// assert_that(&report, "a").equals("b");
/// assert_that(&report, "c").equals("c");
///
/// assert_eq!(report.failure_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<String>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded failure messages, oldest first.
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    /// Get the number of recorded failures.
    pub fn failure_count(&self) -> usize {
        self.failures.lock().len()
    }

    /// Check if any failure has been recorded.
    pub fn has_failures(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    /// Get the most recent failure message.
    pub fn last_failure(&self) -> Option<String> {
        self.failures.lock().last().cloned()
    }

    /// Clear the recorded failures.
    pub fn reset(&self) {
        self.failures.lock().clear();
    }
}

impl Report for Recorder {
    fn report_failure(&self, message: &str) {
        self.failures.lock().push(message.to_owned());
    }
}

/// A [`Report`] that panics with the failure message.
///
/// This adapts the non-aborting assertion model to plain libtest, where a
/// panic is the only way to fail the current test. Note that this trades
/// away the "keep going after a failure" property; use [`Recorder`] when
/// you want that.
///
/// # Example
///
/// ```rust,should_panic
/// use testkit_assert::{assert_that, PanicOnFailure};
///
/// assert_that(&PanicOnFailure, 1).equals(2); // panics
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicOnFailure;

impl Report for PanicOnFailure {
    fn report_failure(&self, message: &str) {
        panic!("{message}");
    }
}
