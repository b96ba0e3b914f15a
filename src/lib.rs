//! # testkit-assert
//!
//! > Minimal fluent assertions with pluggable failure reporting
//!
//! **testkit-assert** lets test code express expectations and report
//! human-readable failures without aborting the test. Every terminal check
//! returns a `bool`, so control flow after a failure (return early or keep
//! going) stays with the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_assert::{assert_that, Recorder};
//!
//! let report = Recorder::new();
//!
//! assert_that(&report, true).is_true();
//! assert_that(&report, vec![1, 2, 3]).contains(2);
//! assert_that(&report, "hello").not().equals("goodbye");
//!
//! assert!(report.failures().is_empty());
//! ```
//!
//! ## Features
//!
//! - 🔎 **Value checks** - nil, boolean, equality, containment, key lookup
//! - 💥 **Panic checks** - assert that a closure panics (or doesn't)
//! - ⏱️ **Promises** - run a closure in the background and bound its runtime
//! - 🔌 **Pluggable reporting** - failures go to any [`Report`] implementation
//!
//! Failures render as `[file:line] message`, with the location captured at
//! the assertion call site via `#[track_caller]`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod message;
pub mod report;
pub mod subject;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_assert::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{assert_fn, assert_that};
    pub use crate::error::{Error, Result};
    pub use crate::report::{PanicOnFailure, Recorder, Report};
    pub use crate::subject::{IntoSubject, Kind, Subject};
}

// Re-exports
pub use assertions::{assert_fn, assert_that, FunctionAssertion, Promise, ValueAssertion};
pub use error::{Error, Result};
pub use message::Diagnostic;
pub use report::{PanicOnFailure, Recorder, Report};
pub use subject::{IntoSubject, Kind, Subject};
