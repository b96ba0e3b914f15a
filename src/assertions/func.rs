// Allow must_use_candidate since ignoring a terminal check's bool is the
// "report and keep going" usage this crate exists for
#![allow(clippy::must_use_candidate)]

//! Function assertion chains.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

use super::{Context, Promise};

/// An assertion about a zero-argument closure.
///
/// Created by [`assert_fn`](crate::assert_fn). The closure runs either
/// synchronously under [`panics`](Self::panics) or on a background thread
/// via [`promise`](Self::promise).
pub struct FunctionAssertion<'t, F> {
    ctx: Context<'t>,
    func: F,
}

impl<'t, F: FnOnce()> FunctionAssertion<'t, F> {
    pub(crate) fn new(ctx: Context<'t>, func: F) -> Self {
        Self { ctx, func }
    }

    /// Invert the assertion so the expected result is the opposite.
    ///
    /// Each call sets the flag; calling twice does not toggle it back.
    #[must_use]
    pub fn not(mut self) -> Self {
        self.ctx.invert();
        self
    }

    /// Attach a message printed with the failure, if the check fails.
    #[must_use]
    pub fn msg(mut self, message: impl fmt::Display) -> Self {
        self.ctx.set_test_message(message.to_string());
        self
    }

    /// Execute the closure and check that it panics.
    ///
    /// The panic is intercepted and converted into the check's result; it
    /// never propagates to the caller. Inverted, the check passes only if
    /// the closure completes normally.
    ///
    /// # Example
    ///
    /// ```rust
    /// use testkit_assert::{assert_fn, Recorder};
    ///
    /// let report = Recorder::new();
    /// assert_fn(&report, || panic!("boom")).panics();
    /// assert_fn(&report, || ()).not().panics();
    /// assert!(!report.has_failures());
    /// ```
    #[doc(alias = "panic")]
    pub fn panics(self) -> bool {
        self.ctx.mark_helper();
        let outcome = panic::catch_unwind(AssertUnwindSafe(self.func));
        match outcome {
            Ok(()) if !self.ctx.inverted() => {
                self.ctx.fail(format_args!("did not panic"));
                false
            }
            Err(payload) if self.ctx.inverted() => {
                self.ctx.fail(format_args!(
                    "code paniced with err: {}",
                    panic_message(payload.as_ref())
                ));
                false
            }
            _ => true,
        }
    }

    /// Launch the closure on a background thread and return a [`Promise`]
    /// tracking its completion.
    ///
    /// The caller resumes immediately; the closure runs to completion in
    /// the background and writes a single value into the promise's
    /// completion slot.
    pub fn promise(self) -> Promise<'t>
    where
        F: Send + 'static,
    {
        self.ctx.mark_helper();
        let (done_tx, done) = mpsc::sync_channel(1);
        let func = self.func;
        thread::spawn(move || {
            func();
            // The slot holds one value, so this send completes even when
            // nobody is left to read it.
            let _ = done_tx.send(true);
        });
        Promise::new(self.ctx, done)
    }
}

/// Best-effort rendering of a panic payload, which is an arbitrary boxed
/// value; `panic!` with a message produces a `&str` or `String`.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
