//! Array-like key detection.
//!
//! A plain object whose keys are exactly `"0", "1", ..., "n-1"` in enumeration
//! order cannot be told apart from an array once it has passed through a
//! JSON-only transport. The encoder uses [`object_has_array_like_keys`] to
//! spot such objects and tag them.

use crate::{CodecOptions, KeyParsing, ObjectMap};

/// Returns `true` if `keys`, in the order given, parse to `0, 1, ..., n-1`.
///
/// Keys are read with [`KeyParsing::Prefix`]. Any key that does not start
/// with an integer makes the whole set non-array-like. An empty key set is
/// array-like.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::are_keys_array_like;
///
/// assert!(are_keys_array_like(Vec::<&str>::new()));
/// assert!(are_keys_array_like(["0", "1", "2"]));
/// assert!(!are_keys_array_like(["1", "0"]));
/// assert!(!are_keys_array_like(["0", "2"]));
/// assert!(!are_keys_array_like(["a"]));
/// ```
#[must_use]
pub fn are_keys_array_like<I>(keys: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    are_keys_array_like_with_parsing(keys, KeyParsing::Prefix)
}

/// Like [`are_keys_array_like`], reading keys with `options.key_parsing`.
#[must_use]
pub fn are_keys_array_like_with_options<I>(keys: I, options: &CodecOptions) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    are_keys_array_like_with_parsing(keys, options.key_parsing)
}

fn are_keys_array_like_with_parsing<I>(keys: I, parsing: KeyParsing) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    // Stops at the first key that fails to parse or sits at the wrong position.
    keys.into_iter()
        .enumerate()
        .all(|(position, key)| match parsing.parse(key.as_ref()) {
            Some(index) => i64::try_from(position).is_ok_and(|p| p == index),
            None => false,
        })
}

/// Returns `true` if the object's own keys, in natural enumeration order, are
/// array-like.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{object_has_array_like_keys, value, Value};
///
/// let Value::Object(obj) = value!({ "1": "b", "0": "a" }) else { unreachable!() };
/// // Index keys enumerate in ascending order regardless of insertion order
/// assert!(object_has_array_like_keys(&obj));
///
/// let Value::Object(obj) = value!({ "0": "a", "name": "b" }) else { unreachable!() };
/// assert!(!object_has_array_like_keys(&obj));
/// ```
#[must_use]
pub fn object_has_array_like_keys(object: &ObjectMap) -> bool {
    are_keys_array_like(object.own_keys())
}

/// Like [`object_has_array_like_keys`], honoring `options.key_parsing`.
#[must_use]
pub fn object_has_array_like_keys_with_options(object: &ObjectMap, options: &CodecOptions) -> bool {
    are_keys_array_like_with_options(object.own_keys(), options)
}

/// Reads the leading base-10 integer of `key`.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// longest run of ASCII digits is taken and anything after it is ignored.
/// Returns `None` when no digit follows. Values beyond the `i64` range
/// saturate.
pub(crate) fn parse_int_prefix(key: &str) -> Option<i64> {
    let rest = key.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        let d = i64::from(digit - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -d } else { d });
    }

    seen.then_some(value)
}

/// Reads `key` as a canonical non-negative index: `"0"` or a digit string
/// without a leading zero. Anything else, including out-of-range values,
/// yields `None`.
pub(crate) fn parse_index_strict(key: &str) -> Option<i64> {
    let bytes = key.as_bytes();
    let canonical = match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    };
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("01"), Some(1));
        assert_eq!(parse_int_prefix("1e3"), Some(1));
        assert_eq!(parse_int_prefix("7abc"), Some(7));
        assert_eq!(parse_int_prefix("  3"), Some(3));
        assert_eq!(parse_int_prefix("-2"), Some(-2));
        assert_eq!(parse_int_prefix("+5"), Some(5));
        assert_eq!(parse_int_prefix("-0"), Some(0));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(" "), None);
        assert_eq!(parse_int_prefix(".5"), None);
    }

    #[test]
    fn test_parse_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_index_strict() {
        assert_eq!(parse_index_strict("0"), Some(0));
        assert_eq!(parse_index_strict("10"), Some(10));
        assert_eq!(parse_index_strict("01"), None);
        assert_eq!(parse_index_strict("1e3"), None);
        assert_eq!(parse_index_strict("-1"), None);
        assert_eq!(parse_index_strict(" 1"), None);
        assert_eq!(parse_index_strict(""), None);
        assert_eq!(parse_index_strict("99999999999999999999999"), None);
    }

    #[test]
    fn test_array_like_keys() {
        assert!(are_keys_array_like(Vec::<String>::new()));
        assert!(are_keys_array_like(["0"]));
        assert!(are_keys_array_like(["0", "1", "2"]));
        assert!(!are_keys_array_like(["1"]));
        assert!(!are_keys_array_like(["1", "0"]));
        assert!(!are_keys_array_like(["0", "2"]));
        assert!(!are_keys_array_like(["a"]));
        assert!(!are_keys_array_like(["0", "a"]));
        assert!(!are_keys_array_like(["-1"]));
    }

    #[test]
    fn test_prefix_looseness() {
        assert!(are_keys_array_like(["0", "01"]));
        assert!(are_keys_array_like(["0", "1e3"]));
        assert!(are_keys_array_like(["0a", "1b"]));
    }

    #[test]
    fn test_strict_parsing() {
        let options = CodecOptions::new().with_key_parsing(KeyParsing::Strict);
        assert!(are_keys_array_like_with_options(["0", "1"], &options));
        assert!(!are_keys_array_like_with_options(["0", "01"], &options));
        assert!(!are_keys_array_like_with_options(["0", "1e3"], &options));
        assert!(are_keys_array_like_with_options(Vec::<&str>::new(), &options));
    }

    #[test]
    fn test_object_keys_use_enumeration_order() {
        let mut obj = ObjectMap::new();
        obj.insert("2".to_string(), Value::from("c"));
        obj.insert("0".to_string(), Value::from("a"));
        obj.insert("1".to_string(), Value::from("b"));
        assert!(object_has_array_like_keys(&obj));

        obj.insert("x".to_string(), Value::Null);
        assert!(!object_has_array_like_keys(&obj));
    }

    #[test]
    fn test_object_with_leading_zero_key() {
        // "01" is not an index key, so it enumerates after "0" in insertion order
        let mut obj = ObjectMap::new();
        obj.insert("01".to_string(), Value::from(1));
        obj.insert("0".to_string(), Value::from(0));
        assert!(object_has_array_like_keys(&obj));

        let strict = CodecOptions::new().with_key_parsing(KeyParsing::Strict);
        assert!(!object_has_array_like_keys_with_options(&obj, &strict));
    }

    #[test]
    fn test_empty_object_is_array_like() {
        assert!(object_has_array_like_keys(&ObjectMap::new()));
    }
}
