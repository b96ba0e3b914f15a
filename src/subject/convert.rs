//! Conversions from std types into [`Subject`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{Kind, Subject};

/// Conversion into a [`Subject`].
///
/// Implemented for booleans, integers, floats, strings, `Vec`/slices,
/// `Option` (the nilable reference), and `HashMap`/`BTreeMap`. Byte content
/// and streams go through [`Subject::bytes`] and [`Subject::reader`], which
/// is why `u8`/`i8` are deliberately left out of the integer conversions.
pub trait IntoSubject {
    /// Convert `self` into a subject.
    fn into_subject(self) -> Subject;
}

/// Types with a statically known [`Kind`].
///
/// Used by the map conversions to record the declared key kind, so key-type
/// mismatches are detectable even for empty maps.
pub trait KindOf {
    /// The kind recorded for this type.
    const KIND: Kind;
}

impl IntoSubject for Subject {
    fn into_subject(self) -> Subject {
        self
    }
}

impl IntoSubject for bool {
    fn into_subject(self) -> Subject {
        Subject::Bool(self)
    }
}

impl KindOf for bool {
    const KIND: Kind = Kind::Bool;
}

macro_rules! int_into_subject {
    ($($ty:ty),+) => {
        $(
            impl IntoSubject for $ty {
                fn into_subject(self) -> Subject {
                    Subject::Int(i128::from(self))
                }
            }

            impl KindOf for $ty {
                const KIND: Kind = Kind::Int;
            }
        )+
    };
}

int_into_subject!(i16, i32, i64, u16, u32, u64);

impl IntoSubject for isize {
    fn into_subject(self) -> Subject {
        Subject::Int(self as i128)
    }
}

impl KindOf for isize {
    const KIND: Kind = Kind::Int;
}

impl IntoSubject for usize {
    fn into_subject(self) -> Subject {
        Subject::Int(self as i128)
    }
}

impl KindOf for usize {
    const KIND: Kind = Kind::Int;
}

impl IntoSubject for f32 {
    fn into_subject(self) -> Subject {
        Subject::Float(f64::from(self))
    }
}

impl IntoSubject for f64 {
    fn into_subject(self) -> Subject {
        Subject::Float(self)
    }
}

impl IntoSubject for &str {
    fn into_subject(self) -> Subject {
        Subject::Str(self.to_owned())
    }
}

impl KindOf for &str {
    const KIND: Kind = Kind::Str;
}

impl IntoSubject for String {
    fn into_subject(self) -> Subject {
        Subject::Str(self)
    }
}

impl KindOf for String {
    const KIND: Kind = Kind::Str;
}

impl<T: IntoSubject> IntoSubject for Vec<T> {
    fn into_subject(self) -> Subject {
        Subject::Seq(self.into_iter().map(IntoSubject::into_subject).collect())
    }
}

impl<T: IntoSubject + Clone> IntoSubject for &[T] {
    fn into_subject(self) -> Subject {
        Subject::Seq(
            self.iter()
                .cloned()
                .map(IntoSubject::into_subject)
                .collect(),
        )
    }
}

impl<T: IntoSubject> IntoSubject for Option<T> {
    fn into_subject(self) -> Subject {
        Subject::Ref(self.map(|inner| Box::new(inner.into_subject())))
    }
}

impl<K, V, S> IntoSubject for HashMap<K, V, S>
where
    K: IntoSubject + KindOf,
    V: IntoSubject,
    S: BuildHasher,
{
    fn into_subject(self) -> Subject {
        Subject::mapping(
            K::KIND,
            self.into_iter()
                .map(|(key, value)| (key.into_subject(), value.into_subject())),
        )
    }
}

impl<K, V> IntoSubject for BTreeMap<K, V>
where
    K: IntoSubject + KindOf,
    V: IntoSubject,
{
    fn into_subject(self) -> Subject {
        Subject::mapping(
            K::KIND,
            self.into_iter()
                .map(|(key, value)| (key.into_subject(), value.into_subject())),
        )
    }
}
