// Allow must_use_candidate since constructors here feed straight into
// assertion entry points
#![allow(clippy::must_use_candidate)]

//! The subject model: a closed set of shapes assertions know how to check.
//!
//! Go-style assertion libraries branch on runtime reflection; here the
//! accepted shapes are an explicit tagged variant, [`Subject`]. Anything a
//! check cannot handle surfaces as a type-mismatch failure naming the
//! subject's [`Kind`], instead of relying on implicit reflection.
//!
//! Most callers never build a `Subject` by hand; values convert through
//! [`IntoSubject`] at the assertion entry point:
//!
//! ```rust
//! use testkit_assert::{Kind, Subject, IntoSubject};
//!
//! assert_eq!(true.into_subject().kind(), Kind::Bool);
//! assert_eq!(Some(1).into_subject().kind(), Kind::Ref);
//! assert_eq!(vec!["a"].into_subject(), Subject::Seq(vec!["a".into_subject()]));
//! ```
//!
//! `Display` output deliberately mirrors Go's `%+v` rendering (bare
//! strings, `[a b c]` sequences, `map[k:v]` maps with sorted keys) so
//! diagnostic dumps stay byte-compatible with tooling that parses them.

mod convert;

pub use convert::{IntoSubject, KindOf};

use std::fmt;
use std::io::Read;

use crate::error::{Error, Result};

/// Type tag for a [`Subject`], used in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A boolean.
    Bool,
    /// A signed or unsigned integer.
    Int,
    /// A floating-point number.
    Float,
    /// A string.
    Str,
    /// Raw byte content.
    Bytes,
    /// A sequence of subjects.
    Seq,
    /// A key/value mapping.
    Map,
    /// A nilable reference.
    Ref,
    /// An unread byte stream.
    Stream,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Bytes => "bytes",
            Self::Seq => "slice",
            Self::Map => "map",
            Self::Ref => "pointer",
            Self::Stream => "reader",
        };
        f.write_str(name)
    }
}

/// A value under assertion.
///
/// The variants are the complete set of shapes the value checks accept.
/// Structural equality is tree equality; two streams never compare equal.
pub enum Subject {
    /// A boolean.
    Bool(bool),
    /// An integer, widened so every std integer type fits.
    Int(i128),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// Raw byte content; build with [`Subject::bytes`].
    Bytes(Vec<u8>),
    /// A sequence of subjects.
    Seq(Vec<Subject>),
    /// A key/value mapping with its declared key kind.
    Map {
        /// Key kind declared by the source map type, checked by key lookup
        /// even when the map is empty.
        key_kind: Kind,
        /// Entries sorted by rendered key.
        entries: Vec<(Subject, Subject)>,
    },
    /// A nilable reference; `None` is nil.
    Ref(Option<Box<Subject>>),
    /// An unread byte stream; drained to [`Subject::Bytes`] by containment
    /// checks. Build with [`Subject::reader`].
    Stream(Box<dyn Read>),
}

impl Subject {
    /// A nil reference.
    #[must_use]
    pub fn nil() -> Self {
        Self::Ref(None)
    }

    /// Byte content.
    ///
    /// Byte subjects match string containment by substring, like string
    /// subjects do.
    pub fn bytes(content: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(content.into())
    }

    /// An unread byte stream.
    ///
    /// The stream is drained in full the first time a containment check
    /// runs against it, and the consumed content replaces the subject for
    /// that call.
    pub fn reader(stream: impl Read + 'static) -> Self {
        Self::Stream(Box::new(stream))
    }

    /// A mapping with an explicit key kind; entries are sorted by rendered
    /// key so display output and equality are deterministic.
    pub fn mapping(
        key_kind: Kind,
        entries: impl IntoIterator<Item = (Subject, Subject)>,
    ) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_cached_key(|(key, _)| key.to_string());
        Self::Map { key_kind, entries }
    }

    /// The subject's type tag.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Bytes(_) => Kind::Bytes,
            Self::Seq(_) => Kind::Seq,
            Self::Map { .. } => Kind::Map,
            Self::Ref(_) => Kind::Ref,
            Self::Stream(_) => Kind::Stream,
        }
    }

    /// Drain a stream subject into its byte content.
    ///
    /// Non-stream subjects pass through unchanged. A stream that fails to
    /// read is kept as-is; it will simply not match anything.
    pub(crate) fn drain_stream(self) -> Self {
        match self {
            Self::Stream(mut stream) => {
                let mut content = Vec::new();
                match stream.read_to_end(&mut content) {
                    Ok(_) => Self::Bytes(content),
                    Err(_) => Self::Stream(stream),
                }
            }
            other => other,
        }
    }

    /// Membership by structural equality: sequence elements, map values
    /// (not keys), recursing through non-nil references.
    pub(crate) fn contains_element(&self, expected: &Self) -> bool {
        match self {
            Self::Ref(Some(inner)) => inner.contains_element(expected),
            Self::Seq(items) => items.iter().any(|item| item == expected),
            Self::Map { entries, .. } => entries.iter().any(|(_, value)| value == expected),
            _ => false,
        }
    }

    /// Look a key up in a map subject.
    ///
    /// # Errors
    ///
    /// Returns the check-internal error for nil subjects, non-map subjects,
    /// and probe keys whose kind differs from the map's declared key kind.
    pub(crate) fn key_lookup(&self, key: &Self) -> Result<bool> {
        match self {
            Self::Ref(None) => Err(Error::NilSubject),
            Self::Map { key_kind, entries } => {
                if *key_kind != key.kind() {
                    return Err(Error::KeyTypeMismatch {
                        map: *key_kind,
                        key: key.kind(),
                    });
                }
                Ok(entries.iter().any(|(entry_key, _)| entry_key == key))
            }
            other => Err(Error::NotAMap(other.kind())),
        }
    }
}

// Structural tree equality. Kept manual because streams carry no
// comparable state: a stream equals nothing, including another stream.
impl PartialEq for Subject {
    #[allow(clippy::float_cmp)] // bitwise-exact float equality is the contract
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map { entries: a, .. }, Self::Map { entries: b, .. }) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Bytes(content) => {
                f.write_str("[")?;
                for (i, byte) in content.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte}")?;
                }
                f.write_str("]")
            }
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map { entries, .. } => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("]")
            }
            Self::Ref(None) => f.write_str("<nil>"),
            Self::Ref(Some(inner)) => write!(f, "&{inner}"),
            Self::Stream(_) => f.write_str("<reader>"),
        }
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Bytes(content) => f.debug_tuple("Bytes").field(content).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Map { key_kind, entries } => f
                .debug_struct("Map")
                .field("key_kind", key_kind)
                .field("entries", entries)
                .finish(),
            Self::Ref(inner) => f.debug_tuple("Ref").field(inner).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
