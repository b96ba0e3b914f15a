// Allow must_use_candidate since ignoring a terminal check's bool is the
// "report and keep going" usage this crate exists for
#![allow(clippy::must_use_candidate)]

//! Value assertion chains.

use std::fmt;

use super::Context;
use crate::subject::{IntoSubject, Subject};

/// An assertion about a single value.
///
/// Created by [`assert_that`](crate::assert_that). The subject is fixed at
/// construction; only the inversion flag and the optional caller message
/// may change before the one terminal check.
///
/// Type-mismatch failures (a non-reference subject for [`is_nil`], a
/// non-boolean for [`is_true`], a non-map for [`has_key`]) ignore
/// inversion: a wrong type is never the expectation under test.
///
/// # Example
///
/// ```rust
/// use testkit_assert::{assert_that, Recorder};
///
/// let report = Recorder::new();
/// if !assert_that(&report, Some(3)).not().is_nil() {
///     return; // caller decides whether a failure is fatal
/// }
/// ```
///
/// [`is_nil`]: ValueAssertion::is_nil
/// [`is_true`]: ValueAssertion::is_true
/// [`has_key`]: ValueAssertion::has_key
pub struct ValueAssertion<'t> {
    ctx: Context<'t>,
    subject: Subject,
}

impl<'t> ValueAssertion<'t> {
    pub(crate) fn new(ctx: Context<'t>, subject: Subject) -> Self {
        Self { ctx, subject }
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
    ///
    /// Accepts anything displayable; use `format_args!` for formatting:
    ///
    /// ```rust
    /// use testkit_assert::{assert_that, Recorder};
    ///
    /// let report = Recorder::new();
    /// let case = 3;
    /// assert_that(&report, case).msg(format_args!("case {case}")).equals(3);
    /// ```
    #[must_use]
    pub fn msg(mut self, message: impl fmt::Display) -> Self {
        self.ctx.set_test_message(message.to_string());
        self
    }

    /// Check that the subject is a nil reference.
    ///
    /// Fails regardless of inversion when the subject is not a reference
    /// at all.
    pub fn is_nil(self) -> bool {
        self.ctx.mark_helper();
        let inverted = self.ctx.inverted();
        match self.subject {
            Subject::Ref(Some(got)) => {
                if inverted {
                    return true;
                }
                self.ctx
                    .fail_multiline(format_args!("expected nil; got:\n{got}"));
                false
            }
            Subject::Ref(None) => {
                if !inverted {
                    return true;
                }
                self.ctx.fail(format_args!("value is nil; expected not nil"));
                false
            }
            other => {
                self.ctx.fail(format_args!(
                    "value provided is not a pointer but is {}",
                    other.kind()
                ));
                false
            }
        }
    }

    /// Check that the subject is boolean `true`.
    ///
    /// Fails regardless of inversion when the subject is not a boolean.
    pub fn is_true(self) -> bool {
        self.ctx.mark_helper();
        match self.subject {
            Subject::Bool(value) => {
                if !self.ctx.inverted() && !value {
                    self.ctx.fail(format_args!("value is false; expected true"));
                    return false;
                }
                if self.ctx.inverted() && value {
                    self.ctx.fail(format_args!("value is true; expected false"));
                    return false;
                }
                true
            }
            other => {
                self.ctx
                    .fail(format_args!("value is not boolean; is {}", other.kind()));
                false
            }
        }
    }

    /// Check that the subject is boolean `false`.
    ///
    /// Equivalent to `not().is_true()`.
    pub fn is_false(self) -> bool {
        self.not().is_true()
    }

    /// Check structural equality between the subject and `expected`.
    pub fn equals(self, expected: impl IntoSubject) -> bool {
        self.ctx.mark_helper();
        let expected = expected.into_subject();
        let equal = self.subject == expected;

        if !self.ctx.inverted() && !equal {
            self.ctx.fail_multiline(format_args!(
                "{}\n\n\tdoes not equal\n\n{}",
                self.subject, expected
            ));
            return false;
        }

        if self.ctx.inverted() && equal {
            self.ctx
                .fail_multiline(format_args!("both values are:\n{expected}"));
            return false;
        }

        true
    }

    /// Reading alias for [`equals`](Self::equals).
    pub fn equal(self, expected: impl IntoSubject) -> bool {
        self.equals(expected)
    }

    /// Check that the subject contains `expected`.
    ///
    /// String and byte subjects match a string `expected` by substring;
    /// sequences match by element equality; maps match among their values,
    /// not their keys. A stream subject is drained into bytes first, and
    /// the consumed content stands in for the subject in the diagnostic.
    pub fn contains(mut self, expected: impl IntoSubject) -> bool {
        self.ctx.mark_helper();
        self.subject = self.subject.drain_stream();
        let expected = expected.into_subject();

        // Byte subjects are compared (and later displayed) as text.
        let mut as_text = None;
        let found = match (&self.subject, &expected) {
            (Subject::Str(subject), Subject::Str(needle)) => subject.contains(needle.as_str()),
            (Subject::Bytes(content), Subject::Str(needle)) => {
                let text = String::from_utf8_lossy(content).into_owned();
                let found = text.contains(needle.as_str());
                as_text = Some(Subject::Str(text));
                found
            }
            _ => self.subject.contains_element(&expected),
        };
        if let Some(text) = as_text {
            self.subject = text;
        }

        if !found && !self.ctx.inverted() {
            self.ctx.fail_multiline(format_args!(
                "{}\n\n\tdoes not contain\n\n{}",
                self.subject, expected
            ));
            return false;
        }

        if found && self.ctx.inverted() {
            self.ctx.fail_multiline(format_args!(
                "{}\n\n\tdoes contain\n\n{}",
                self.subject, expected
            ));
            return false;
        }

        true
    }

    /// Reading alias for [`contains`](Self::contains).
    pub fn contain(self, expected: impl IntoSubject) -> bool {
        self.contains(expected)
    }

    /// Check that the subject is a map with the given key.
    ///
    /// A nil subject, a non-map subject, or a key whose type differs from
    /// the map's key type reports a distinct `hasKey error: ...`
    /// diagnostic and returns `false`, bypassing the pass/fail framing.
    pub fn has_key(self, key: impl IntoSubject) -> bool {
        self.ctx.mark_helper();
        let key = key.into_subject();

        let found = match self.subject.key_lookup(&key) {
            Ok(found) => found,
            Err(err) => {
                self.ctx.fail(format_args!("hasKey error: {err}"));
                return false;
            }
        };

        // Single-line framing with embedded newlines, and the trailing
        // newline on the non-inverted message, kept for output
        // compatibility.
        if !found && !self.ctx.inverted() {
            self.ctx.fail(format_args!(
                "{}\n\n\tdoes not have key\n\n{}\n",
                self.subject, key
            ));
            return false;
        }

        if found && self.ctx.inverted() {
            self.ctx.fail(format_args!(
                "{}\n\n\tdoes have key\n\n{}",
                self.subject, key
            ));
            return false;
        }

        true
    }

    /// Reading alias for [`has_key`](Self::has_key).
    pub fn have_key(self, key: impl IntoSubject) -> bool {
        self.has_key(key)
    }
}

#[cfg(test)]
mod tests {
    use crate::assertions::assert_that;
    use crate::report::Recorder;
    use crate::subject::Subject;
    use std::collections::HashMap;

    fn last(report: &Recorder) -> String {
        report.last_failure().expect("expected a failure")
    }

    #[test]
    fn test_is_nil_passes_on_none() {
        let report = Recorder::new();
        assert!(assert_that(&report, Option::<i32>::None).is_nil());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_is_nil_rejects_non_pointers_regardless_of_inversion() {
        let report = Recorder::new();
        assert!(!assert_that(&report, "value").is_nil());
        assert!(last(&report).ends_with("value provided is not a pointer but is string"));

        assert!(!assert_that(&report, "value").not().is_nil());
        assert!(last(&report).ends_with("value provided is not a pointer but is string"));
    }

    #[test]
    fn test_is_nil_failure_dumps_the_pointee() {
        let report = Recorder::new();
        assert!(!assert_that(&report, Some("present")).is_nil());
        assert!(last(&report).ends_with("\nexpected nil; got:\npresent"));
    }

    #[test]
    fn test_not_is_nil() {
        let report = Recorder::new();
        assert!(assert_that(&report, Some(1)).not().is_nil());

        assert!(!assert_that(&report, Option::<i32>::None).not().is_nil());
        assert!(last(&report).ends_with("value is nil; expected not nil"));
    }

    #[test]
    fn test_is_true_and_is_false() {
        let report = Recorder::new();
        assert!(assert_that(&report, true).is_true());
        assert!(assert_that(&report, false).is_false());
        assert!(assert_that(&report, false).not().is_true());
        assert!(!report.has_failures());

        assert!(!assert_that(&report, false).is_true());
        assert!(last(&report).ends_with("value is false; expected true"));

        assert!(!assert_that(&report, true).not().is_true());
        assert!(last(&report).ends_with("value is true; expected false"));
    }

    #[test]
    fn test_is_true_rejects_non_booleans() {
        let report = Recorder::new();
        assert!(!assert_that(&report, 1).is_true());
        assert!(last(&report).ends_with("value is not boolean; is int"));
    }

    #[test]
    fn test_equals() {
        let report = Recorder::new();
        assert!(assert_that(&report, vec![1, 2]).equals(vec![1, 2]));
        assert!(assert_that(&report, "a").not().equals("b"));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_equals_mismatch_dump() {
        let report = Recorder::new();
        assert!(!assert_that(&report, vec!["got"]).equals("wanted"));
        assert!(last(&report).ends_with("\n[got]\n\n\tdoes not equal\n\nwanted"));
    }

    #[test]
    fn test_not_equals_match_dump() {
        let report = Recorder::new();
        assert!(!assert_that(&report, "same").not().equals("same"));
        assert!(last(&report).ends_with("\nboth values are:\nsame"));
    }

    #[test]
    fn test_contains_substring() {
        let report = Recorder::new();
        assert!(assert_that(&report, "hello world").contains("world"));
        assert!(assert_that(&report, "hello").not().contains("world"));
        assert!(!report.has_failures());

        assert!(!assert_that(&report, "hello").contains("world"));
        assert!(last(&report).ends_with("\nhello\n\n\tdoes not contain\n\nworld"));
    }

    #[test]
    fn test_contains_bytes_as_substring() {
        let report = Recorder::new();
        assert!(assert_that(&report, Subject::bytes(&b"hello world"[..])).contains("world"));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_contains_drains_readers() {
        let report = Recorder::new();
        let reader = Subject::reader(&b"streamed body"[..]);
        assert!(assert_that(&report, reader).contains("body"));
        assert!(!report.has_failures());

        let reader = Subject::reader(&b"streamed body"[..]);
        assert!(!assert_that(&report, reader).contains("missing"));
        // The drained content replaces the subject in the dump.
        assert!(last(&report).contains("streamed body"));
    }

    #[test]
    fn test_contains_sequence_membership() {
        let report = Recorder::new();
        assert!(assert_that(&report, vec!["a", "b"]).contains("a"));
        assert!(!assert_that(&report, vec!["a", "b"]).contains("c"));
        assert!(last(&report).ends_with("\n[a b]\n\n\tdoes not contain\n\nc"));
    }

    #[test]
    fn test_contains_map_values() {
        let report = Recorder::new();
        let mut map = HashMap::new();
        map.insert("gotKey", "got");

        assert!(assert_that(&report, map.clone()).contains("got"));
        assert!(!assert_that(&report, map).contains("gotKey"));
    }

    #[test]
    fn test_not_contains_present_dump() {
        let report = Recorder::new();
        assert!(!assert_that(&report, vec![1, 2]).not().contains(2));
        assert!(last(&report).ends_with("\n[1 2]\n\n\tdoes contain\n\n2"));
    }

    #[test]
    fn test_has_key() {
        let report = Recorder::new();
        let mut map = HashMap::new();
        map.insert("gotKey", "got");

        assert!(assert_that(&report, map.clone()).has_key("gotKey"));
        assert!(assert_that(&report, map.clone()).not().has_key("wantedKey"));
        assert!(!report.has_failures());

        // Matching key type, missing key: normal failure, not the error path.
        assert!(!assert_that(&report, map).has_key("wantedKey"));
        let failure = last(&report);
        assert!(!failure.contains("hasKey error"));
        assert!(failure.ends_with("\n\n\tdoes not have key\n\nwantedKey\n"));
    }

    #[test]
    fn test_has_key_error_paths() {
        let report = Recorder::new();

        assert!(!assert_that(&report, "text").has_key("k"));
        assert!(last(&report).ends_with("hasKey error: value of type string is not a map"));

        let map: HashMap<&str, i32> = HashMap::new();
        assert!(!assert_that(&report, map).has_key(7));
        assert!(last(&report)
            .ends_with("hasKey error: map is keyed by type string; key provided is type int"));

        assert!(!assert_that(&report, Option::<i32>::None).has_key("k"));
        assert!(last(&report).ends_with("hasKey error: value is nil"));
    }

    #[test]
    fn test_has_key_error_ignores_inversion() {
        let report = Recorder::new();
        assert!(!assert_that(&report, "text").not().has_key("k"));
        assert!(last(&report).contains("hasKey error"));
    }

    #[test]
    fn test_aliases_delegate() {
        let report = Recorder::new();
        let mut map = HashMap::new();
        map.insert("k", "v");

        assert!(assert_that(&report, 1).equal(1));
        assert!(assert_that(&report, vec![1]).contain(1));
        assert!(assert_that(&report, map).have_key("k"));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_terminal_checks_do_not_mutate_passing_subjects() {
        // Two independent chains over equal data agree; chains are
        // single-use so the subject cannot be observed mutating.
        let report = Recorder::new();
        let data = vec![1, 2, 3];
        assert!(assert_that(&report, data.clone()).contains(2));
        assert!(assert_that(&report, data).equals(vec![1, 2, 3]));
    }

    #[test]
    fn test_not_is_a_set_not_a_toggle() {
        let report = Recorder::new();
        assert!(!assert_that(&report, true).not().not().is_true());
        assert!(last(&report).ends_with("value is true; expected false"));
    }
}
