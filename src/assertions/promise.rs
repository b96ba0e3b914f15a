// Allow must_use_candidate since ignoring a terminal check's bool is the
// "report and keep going" usage this crate exists for
#![allow(clippy::must_use_candidate)]

//! Background completion handles for function assertions.

use std::fmt;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use super::Context;

/// A handle to a background-executed closure's eventual completion.
///
/// Created by [`FunctionAssertion::promise`](super::FunctionAssertion::promise).
/// Exactly one value is written into the completion slot, by the background
/// thread, when the closure returns. [`wait`](Self::wait) and
/// [`timeout`](Self::timeout) consume the handle, so the single-shot read
/// is enforced by ownership; there is no second read to define behavior
/// for.
///
/// A panic inside the promised closure terminates only its background
/// thread; no value is ever written, the handle observes the disconnect,
/// and treats it as completion. Panic checking belongs to
/// [`panics`](super::FunctionAssertion::panics), not to this handle.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use testkit_assert::{assert_fn, Recorder};
///
/// let report = Recorder::new();
///
/// assert_fn(&report, || {
///     std::thread::sleep(Duration::from_millis(5));
/// })
/// .promise()
/// .timeout(Duration::from_secs(1));
///
/// assert!(!report.has_failures());
/// ```
pub struct Promise<'t> {
    ctx: Context<'t>,
    done: Receiver<bool>,
}

impl<'t> Promise<'t> {
    pub(crate) fn new(ctx: Context<'t>, done: Receiver<bool>) -> Self {
        Self { ctx, done }
    }

    /// Invert the assertion so the expected result is the opposite.
    ///
    /// Only [`timeout`](Self::timeout) interprets the flag: inverted, it
    /// expects the closure to *outlast* the duration.
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

    /// Block until the background closure completes. Always returns `true`;
    /// completing is not itself a failure, only [`timeout`](Self::timeout)
    /// interprets duration.
    ///
    /// If the closure never returns, neither does this call.
    pub fn wait(self) -> bool {
        self.ctx.mark_helper();
        let _ = self.done.recv();
        true
    }

    /// Race the background closure against a timer.
    ///
    /// Non-inverted, the closure must finish within `duration`; inverted,
    /// it must still be running when the timer fires. Exactly one of
    /// {completion, timer} is observed. When the timer wins, the closure
    /// keeps running in the background and its completion is silently
    /// discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use testkit_assert::{assert_fn, Recorder};
    ///
    /// let report = Recorder::new();
    ///
    /// // Must take at least 5ms.
    /// assert_fn(&report, || {
    ///     std::thread::sleep(Duration::from_millis(50));
    /// })
    /// .promise()
    /// .not()
    /// .timeout(Duration::from_millis(5));
    ///
    /// assert!(!report.has_failures());
    /// ```
    pub fn timeout(self, duration: Duration) -> bool {
        self.ctx.mark_helper();
        match self.done.recv_timeout(duration) {
            // A disconnect means the closure ended without writing (it
            // panicked); either way it finished before the timer.
            Ok(_) | Err(RecvTimeoutError::Disconnected) => {
                if self.ctx.inverted() {
                    self.ctx.fail(format_args!(
                        "function didn't meet the minimum duration of {duration:?}"
                    ));
                    return false;
                }
                true
            }
            Err(RecvTimeoutError::Timeout) => {
                if self.ctx.inverted() {
                    return true;
                }
                self.ctx
                    .fail(format_args!("function reached timeout of {duration:?}"));
                false
            }
        }
    }
}
