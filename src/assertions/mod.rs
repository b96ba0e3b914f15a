//! Fluent assertion chains.
//!
//! This module provides the two assertion entry points and the chains they
//! return:
//!
//! - [`assert_that`] - start a [`ValueAssertion`] about a value
//! - [`assert_fn`] - start a [`FunctionAssertion`] about a closure
//!
//! A chain is single-use: construct it, optionally invert it with `not()`
//! or attach a message with `msg(...)`, then call exactly one terminal
//! check. Terminal checks return `true` when the expectation (after
//! inversion) holds; on `false` they have already handed a formatted
//! diagnostic to the [`Report`].
//!
//! # Value assertions
//!
//! ```rust
//! use testkit_assert::{assert_that, Recorder};
//!
//! let report = Recorder::new();
//!
//! assert_that(&report, Option::<i32>::None).is_nil();
//! assert_that(&report, vec!["a", "b"]).contains("a");
//! assert_that(&report, 2 + 2).equals(4);
//!
//! assert!(!report.has_failures());
//! ```
//!
//! # Function assertions
//!
//! ```rust
//! use std::time::Duration;
//! use testkit_assert::{assert_fn, Recorder};
//!
//! let report = Recorder::new();
//!
//! assert_fn(&report, || panic!("boom")).panics();
//! assert_fn(&report, || ()).promise().timeout(Duration::from_secs(1));
//!
//! assert!(!report.has_failures());
//! ```

mod func;
mod promise;
mod value;

pub use func::FunctionAssertion;
pub use promise::Promise;
pub use value::ValueAssertion;

use std::fmt;
use std::panic::Location;

use crate::message::Diagnostic;
use crate::report::Report;
use crate::subject::IntoSubject;

/// State shared by every assertion chain: the failure sink, the
/// `[file:line]` prefix captured at construction, the inversion flag, and
/// the optional caller-supplied message.
pub(crate) struct Context<'t> {
    report: &'t dyn Report,
    prefix: String,
    invert: bool,
    test_message: Option<String>,
}

impl<'t> Context<'t> {
    fn new(report: &'t dyn Report, location: &Location<'_>) -> Self {
        report.mark_helper();
        Self {
            report,
            prefix: format!("[{}:{}]", location.file(), location.line()),
            invert: false,
            test_message: None,
        }
    }

    /// Set the inversion flag. Each call sets it; there is no toggle-off.
    pub(crate) fn invert(&mut self) {
        self.invert = true;
    }

    pub(crate) fn inverted(&self) -> bool {
        self.invert
    }

    pub(crate) fn set_test_message(&mut self, message: String) {
        self.test_message = Some(message);
    }

    pub(crate) fn mark_helper(&self) {
        self.report.mark_helper();
    }

    /// Report a single-line failure.
    pub(crate) fn fail(&self, body: fmt::Arguments<'_>) {
        self.emit(body, false);
    }

    /// Report a failure whose body spans multiple lines.
    pub(crate) fn fail_multiline(&self, body: fmt::Arguments<'_>) {
        self.emit(body, true);
    }

    fn emit(&self, body: fmt::Arguments<'_>, multiline: bool) {
        self.report.mark_helper();
        let mut diagnostic = Diagnostic::new(self.prefix.clone(), body.to_string())
            .test_message(self.test_message.clone());
        if multiline {
            diagnostic = diagnostic.multiline();
        }
        self.report.report_failure(&diagnostic.render());
    }
}

/// Start an assertion about a value.
///
/// The caller's source location is captured here and prefixes every failure
/// message from the returned chain.
///
/// # Example
///
/// ```rust
/// use testkit_assert::{assert_that, Recorder};
///
/// let report = Recorder::new();
/// assert_that(&report, "hay in the stack").contains("hay");
/// assert!(!report.has_failures());
/// ```
#[track_caller]
pub fn assert_that<'t>(report: &'t dyn Report, subject: impl IntoSubject) -> ValueAssertion<'t> {
    ValueAssertion::new(Context::new(report, Location::caller()), subject.into_subject())
}

/// Start an assertion about a zero-argument closure.
///
/// The closure does not run until a terminal check executes it
/// ([`FunctionAssertion::panics`]) or hands it to a background thread
/// ([`FunctionAssertion::promise`]).
///
/// # Example
///
/// ```rust
/// use testkit_assert::{assert_fn, Recorder};
///
/// let report = Recorder::new();
/// assert_fn(&report, || panic!("expected")).panics();
/// assert!(!report.has_failures());
/// ```
#[track_caller]
pub fn assert_fn<'t, F: FnOnce()>(report: &'t dyn Report, func: F) -> FunctionAssertion<'t, F> {
    FunctionAssertion::new(Context::new(report, Location::caller()), func)
}
