//! Error definitions
//!
//! This module provides the check-internal error type for testkit-assert.
//! These errors are never thrown past the assertion boundary; they are
//! rendered into the failure sink as a distinct `"... error: ..."`
//! diagnostic, and the check returns a failing result.

use thiserror::Error;

use crate::subject::Kind;

/// Check-internal errors surfaced by key lookup.
///
/// Unlike an ordinary expectation failure, these describe a subject that
/// cannot support the requested check at all, so they bypass the normal
/// pass/fail framing and ignore inversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key lookup against a nil reference.
    #[error("value is nil")]
    NilSubject,

    /// Key lookup against a subject that is not a map.
    #[error("value of type {0} is not a map")]
    NotAMap(Kind),

    /// Probe key type differs from the map's declared key type.
    #[error("map is keyed by type {map}; key provided is type {key}")]
    KeyTypeMismatch {
        /// The map's declared key type.
        map: Kind,
        /// The probe key's type.
        key: Kind,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_subject_display() {
        assert_eq!(Error::NilSubject.to_string(), "value is nil");
    }

    #[test]
    fn test_not_a_map_display() {
        assert_eq!(
            Error::NotAMap(Kind::Str).to_string(),
            "value of type string is not a map"
        );
    }

    #[test]
    fn test_key_type_mismatch_display() {
        let err = Error::KeyTypeMismatch {
            map: Kind::Str,
            key: Kind::Int,
        };
        assert_eq!(
            err.to_string(),
            "map is keyed by type string; key provided is type int"
        );
    }
}
