//! The closed type-tag vocabulary.
//!
//! A [`TypeTag`] is recorded next to every encoded payload and tells the
//! decoder which inversion rule to apply. The labels are the wire contract
//! between writers and readers: new labels can be added, existing ones must
//! never be renamed or removed.
//!
//! | Tag | Payload |
//! |-----|---------|
//! | `undefined` | absent |
//! | `bigint` | decimal string |
//! | `Date` | ISO-8601 UTC string, millisecond precision |
//! | `NaN` | absent |
//! | `Infinity` | absent |
//! | `-Infinity` | absent |
//! | `set` | array of elements |
//! | `regexp` | `/source/flags` string |
//! | `map` | array of `[key, value]` pairs |
//! | `object` | array of values, indexed by position |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A label from the closed type-tag vocabulary.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::TypeTag;
///
/// let tag: TypeTag = "-Infinity".parse().unwrap();
/// assert_eq!(tag, TypeTag::NegativeInfinity);
/// assert_eq!(tag.as_str(), "-Infinity");
/// assert!("symbol".parse::<TypeTag>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    BigInt,
    Date,
    NaN,
    Infinity,
    NegativeInfinity,
    Set,
    RegExp,
    Map,
    Object,
}

impl TypeTag {
    /// Every tag in the vocabulary.
    pub const ALL: [TypeTag; 10] = [
        TypeTag::Undefined,
        TypeTag::BigInt,
        TypeTag::Date,
        TypeTag::NaN,
        TypeTag::Infinity,
        TypeTag::NegativeInfinity,
        TypeTag::Set,
        TypeTag::RegExp,
        TypeTag::Map,
        TypeTag::Object,
    ];

    /// Returns the wire label of this tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::BigInt => "bigint",
            TypeTag::Date => "Date",
            TypeTag::NaN => "NaN",
            TypeTag::Infinity => "Infinity",
            TypeTag::NegativeInfinity => "-Infinity",
            TypeTag::Set => "set",
            TypeTag::RegExp => "regexp",
            TypeTag::Map => "map",
            TypeTag::Object => "object",
        }
    }

    /// Looks up a wire label. Labels are case-sensitive.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        TypeTag::ALL.into_iter().find(|tag| tag.as_str() == label)
    }

    /// Returns `true` for tags whose payload the caller's walk must build.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, TypeTag::Map | TypeTag::Object)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        TypeTag::from_label(s).ok_or_else(|| crate::Error::unknown_tag(s))
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        TypeTag::from_label(&label).ok_or_else(|| {
            let expected: Vec<&str> = TypeTag::ALL.iter().map(TypeTag::as_str).collect();
            serde::de::Error::custom(format!(
                "unknown type tag {:?}, expected one of {}",
                label,
                expected.join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in TypeTag::ALL.iter().enumerate() {
            for b in &TypeTag::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_from_label() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_label(tag.as_str()), Some(tag));
        }
        assert_eq!(TypeTag::from_label("date"), None);
        assert_eq!(TypeTag::from_label("Set"), None);
        assert_eq!(TypeTag::from_label(""), None);
    }

    #[test]
    fn test_container_tags() {
        let containers: Vec<_> = TypeTag::ALL
            .into_iter()
            .filter(TypeTag::is_container)
            .collect();
        assert_eq!(containers, vec![TypeTag::Map, TypeTag::Object]);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(TypeTag::Date.to_string(), "Date");
        assert_eq!(TypeTag::NegativeInfinity.to_string(), "-Infinity");
    }
}
