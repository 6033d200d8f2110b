//! Leaf encoding.
//!
//! [`transform_value`] looks at a single value and decides whether plain JSON
//! can carry it. When it cannot, the value is replaced by a JSON-safe payload
//! and a [`TypeTag`] that says how to invert the replacement.
//!
//! ## Containers
//!
//! Maps and array-like objects hold values that may need tags of their own,
//! and tags are recorded per path by the caller's tree walk. The classifier
//! therefore only tags them and returns [`Transform::Deferred`]. The caller
//! builds the payload with [`expand_container`] and keeps walking into it.
//! [`encode_value`] does both steps for callers that do not track paths.
//!
//! ## Decision Order
//!
//! First match wins:
//!
//! 1. `undefined`
//! 2. big integer
//! 3. date
//! 4. NaN
//! 5. ±Infinity
//! 6. set
//! 7. regexp
//! 8. map (deferred)
//! 9. object with array-like keys (deferred)

use crate::keys::{object_has_array_like_keys, object_has_array_like_keys_with_options};
use crate::value::format_iso_millis;
use crate::{CodecOptions, Error, Result, TypeTag, Value};
use tracing::trace;

/// Outcome of classifying a value that needs a tag.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{transform_value, Transform, TypeTag, Value, ValueMap};
///
/// let t = transform_value(&Value::from(f64::NAN)).unwrap();
/// assert_eq!(t, Transform::Encoded { value: Value::Undefined, tag: TypeTag::NaN });
///
/// let t = transform_value(&Value::Map(ValueMap::new())).unwrap();
/// assert!(t.is_deferred());
/// assert_eq!(t.tag(), TypeTag::Map);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    /// The payload is complete. `Value::Undefined` stands for an absent payload.
    Encoded { value: Value, tag: TypeTag },
    /// A container was recognized; its payload has to be built by the caller,
    /// see [`expand_container`].
    Deferred { tag: TypeTag },
}

impl Transform {
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        match self {
            Transform::Encoded { tag, .. } | Transform::Deferred { tag } => *tag,
        }
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Transform::Deferred { .. })
    }
}

/// Classifies `value` and encodes it if plain JSON cannot carry it.
///
/// Returns `None` when no transform is needed. Never fails.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{transform_value, Transform, TypeTag, Value};
/// use num_bigint::BigInt;
///
/// let t = transform_value(&Value::BigInt(BigInt::from(10))).unwrap();
/// assert_eq!(t, Transform::Encoded { value: Value::from("10"), tag: TypeTag::BigInt });
///
/// assert!(transform_value(&Value::from("plain")).is_none());
/// ```
#[must_use]
pub fn transform_value(value: &Value) -> Option<Transform> {
    transform_value_with_options(value, &CodecOptions::default())
}

/// Like [`transform_value`], with explicit options.
#[must_use]
pub fn transform_value_with_options(value: &Value, options: &CodecOptions) -> Option<Transform> {
    let encoded = |value: Value, tag: TypeTag| Some(Transform::Encoded { value, tag });

    match value {
        Value::Undefined => encoded(Value::Undefined, TypeTag::Undefined),
        Value::BigInt(bi) => encoded(Value::String(bi.to_str_radix(10)), TypeTag::BigInt),
        Value::Date(dt) => encoded(Value::String(format_iso_millis(dt)), TypeTag::Date),
        Value::Number(n) if n.is_nan() => encoded(Value::Undefined, TypeTag::NaN),
        Value::Number(n) if n.is_infinite() => {
            let tag = if n.as_f64() > 0.0 {
                TypeTag::Infinity
            } else {
                TypeTag::NegativeInfinity
            };
            encoded(Value::Undefined, tag)
        }
        Value::Set(set) => encoded(Value::Array(set.iter().cloned().collect()), TypeTag::Set),
        Value::RegExp(re) => encoded(Value::String(re.to_string()), TypeTag::RegExp),
        Value::Map(map) => {
            trace!(entries = map.len(), "deferring map payload to caller");
            Some(Transform::Deferred { tag: TypeTag::Map })
        }
        Value::Object(obj) if object_has_array_like_keys_with_options(obj, options) => {
            trace!(keys = obj.len(), "deferring array-like object payload to caller");
            Some(Transform::Deferred {
                tag: TypeTag::Object,
            })
        }
        _ => None,
    }
}

/// Builds the payload for a container that [`transform_value`] deferred.
///
/// The expansion is one level deep; nested values are returned untouched for
/// the caller to walk.
///
/// - `map`: array of `[key, value]` pairs in iteration order
/// - `object`: array of the values in key order, keys dropped
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] for any value/tag combination the
/// classifier does not defer, including an object whose keys are not
/// array-like.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{expand_container, value, TypeTag};
///
/// let obj = value!({ "1": "b", "0": "a" });
/// let payload = expand_container(&obj, TypeTag::Object).unwrap();
/// assert_eq!(payload, value!(["a", "b"]));
/// ```
pub fn expand_container(value: &Value, tag: TypeTag) -> Result<Value> {
    match (value, tag) {
        (Value::Map(_), TypeTag::Map) => {
            container_payload(value).ok_or_else(|| unexpected_container(value, tag))
        }
        // Strictly parsed index keys also pass the prefix check.
        (Value::Object(obj), TypeTag::Object) if object_has_array_like_keys(obj) => {
            container_payload(value).ok_or_else(|| unexpected_container(value, tag))
        }
        _ => Err(unexpected_container(value, tag)),
    }
}

/// Classifies `value` and expands deferred containers in one step.
///
/// Returns the payload and tag, or `None` when no transform is needed. Nested
/// values are not visited.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{encode_value, TypeTag, Value, ValueMap};
///
/// let mut map = ValueMap::new();
/// map.insert(Value::from(1), Value::from("one"));
///
/// let (payload, tag) = encode_value(&Value::Map(map)).unwrap();
/// assert_eq!(tag, TypeTag::Map);
/// assert_eq!(payload, Value::Array(vec![Value::Array(vec![Value::from(1), Value::from("one")])]));
/// ```
#[must_use]
pub fn encode_value(value: &Value) -> Option<(Value, TypeTag)> {
    encode_value_with_options(value, &CodecOptions::default())
}

/// Like [`encode_value`], with explicit options.
#[must_use]
pub fn encode_value_with_options(value: &Value, options: &CodecOptions) -> Option<(Value, TypeTag)> {
    match transform_value_with_options(value, options)? {
        Transform::Encoded { value, tag } => Some((value, tag)),
        Transform::Deferred { tag } => container_payload(value).map(|payload| (payload, tag)),
    }
}

fn container_payload(value: &Value) -> Option<Value> {
    match value {
        Value::Map(map) => Some(Value::Array(
            map.iter()
                .map(|(k, v)| Value::Array(vec![k.clone(), v.clone()]))
                .collect(),
        )),
        Value::Object(obj) => Some(Value::Array(
            obj.own_entries().into_iter().map(|(_, v)| v.clone()).collect(),
        )),
        _ => None,
    }
}

fn unexpected_container(value: &Value, tag: TypeTag) -> Error {
    Error::invariant(format!(
        "{} value is never deferred as `{}`",
        value.kind(),
        tag
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyParsing, Number, ObjectMap, RegExp, ValueMap, ValueSet};
    use chrono::{TimeZone, Utc};
    use num_bigint::BigInt;

    fn encoded(value: &Value) -> (Value, TypeTag) {
        match transform_value(value) {
            Some(Transform::Encoded { value, tag }) => (value, tag),
            other => panic!("expected encoded leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_undefined() {
        assert_eq!(
            encoded(&Value::Undefined),
            (Value::Undefined, TypeTag::Undefined)
        );
    }

    #[test]
    fn test_bigint() {
        assert_eq!(
            encoded(&Value::BigInt(BigInt::from(10))),
            (Value::from("10"), TypeTag::BigInt)
        );
        let huge: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            encoded(&Value::BigInt(huge)),
            (
                Value::from("-123456789012345678901234567890"),
                TypeTag::BigInt
            )
        );
    }

    #[test]
    fn test_date() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            encoded(&Value::Date(dt)),
            (Value::from("2020-01-01T00:00:00.000Z"), TypeTag::Date)
        );

        let dt = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(
            encoded(&Value::Date(dt)).0,
            Value::from("2023-11-14T22:13:20.123Z")
        );
    }

    #[test]
    fn test_nan_both_spellings() {
        assert_eq!(
            encoded(&Value::Number(Number::NaN)),
            (Value::Undefined, TypeTag::NaN)
        );
        assert_eq!(
            encoded(&Value::from(f64::NAN)),
            (Value::Undefined, TypeTag::NaN)
        );
    }

    #[test]
    fn test_infinity_sign() {
        assert_eq!(encoded(&Value::Number(Number::Infinity)).1, TypeTag::Infinity);
        assert_eq!(encoded(&Value::from(f64::INFINITY)).1, TypeTag::Infinity);
        assert_eq!(
            encoded(&Value::Number(Number::NegativeInfinity)).1,
            TypeTag::NegativeInfinity
        );
        assert_eq!(
            encoded(&Value::from(f64::NEG_INFINITY)),
            (Value::Undefined, TypeTag::NegativeInfinity)
        );
    }

    #[test]
    fn test_set_keeps_insertion_order() {
        let set: ValueSet = [3, 1, 2].into_iter().map(Value::from).collect();
        assert_eq!(
            encoded(&Value::Set(set)),
            (crate::value!([3, 1, 2]), TypeTag::Set)
        );
    }

    #[test]
    fn test_set_elements_not_transformed() {
        let dt = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        let set: ValueSet = vec![Value::Date(dt)].into_iter().collect();
        let (payload, _) = encoded(&Value::Set(set));
        assert_eq!(payload, Value::Array(vec![Value::Date(dt)]));
    }

    #[test]
    fn test_regexp() {
        assert_eq!(
            encoded(&Value::RegExp(RegExp::new("ab+c", "gi"))),
            (Value::from("/ab+c/gi"), TypeTag::RegExp)
        );
    }

    #[test]
    fn test_map_is_deferred() {
        let t = transform_value(&Value::Map(ValueMap::new())).unwrap();
        assert_eq!(t, Transform::Deferred { tag: TypeTag::Map });
    }

    #[test]
    fn test_array_like_object_is_deferred() {
        let t = transform_value(&crate::value!({ "0": "a", "1": "b" })).unwrap();
        assert_eq!(t, Transform::Deferred { tag: TypeTag::Object });

        let t = transform_value(&Value::Object(ObjectMap::new())).unwrap();
        assert_eq!(t.tag(), TypeTag::Object);
    }

    #[test]
    fn test_no_transform() {
        for value in [
            Value::Null,
            Value::Bool(false),
            Value::from(0),
            Value::from(-1.5),
            Value::from(""),
            crate::value!([1, 2, 3]),
            crate::value!([]),
            crate::value!({ "a": 1 }),
            crate::value!({ "1": "x" }),
            crate::value!({ "0": "x", "b": 2 }),
        ] {
            assert_eq!(transform_value(&value), None, "{:?}", value);
        }
    }

    #[test]
    fn test_strict_key_parsing_option() {
        let mut obj = ObjectMap::new();
        obj.insert("0".to_string(), Value::from("a"));
        obj.insert("01".to_string(), Value::from("b"));
        let value = Value::Object(obj);

        assert!(transform_value(&value).is_some());
        let strict = CodecOptions::new().with_key_parsing(KeyParsing::Strict);
        assert!(transform_value_with_options(&value, &strict).is_none());
    }

    #[test]
    fn test_expand_map() {
        let mut map = ValueMap::new();
        map.insert(Value::from("b"), Value::from(2));
        map.insert(Value::from(1), Value::Undefined);

        let payload = expand_container(&Value::Map(map), TypeTag::Map).unwrap();
        assert_eq!(
            payload,
            Value::Array(vec![
                Value::Array(vec![Value::from("b"), Value::from(2)]),
                Value::Array(vec![Value::from(1), Value::Undefined]),
            ])
        );
    }

    #[test]
    fn test_expand_object_uses_index_order() {
        let mut obj = ObjectMap::new();
        obj.insert("2".to_string(), Value::from("c"));
        obj.insert("0".to_string(), Value::from("a"));
        obj.insert("1".to_string(), Value::from("b"));

        let payload = expand_container(&Value::Object(obj), TypeTag::Object).unwrap();
        assert_eq!(payload, crate::value!(["a", "b", "c"]));
    }

    #[test]
    fn test_expand_rejects_mismatch() {
        let err = expand_container(&Value::Map(ValueMap::new()), TypeTag::Object).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));

        let err = expand_container(&Value::from(1), TypeTag::Set).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));

        let err = expand_container(&crate::value!({ "a": 1 }), TypeTag::Object).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
    }

    #[test]
    fn test_encode_value_expands_containers() {
        let (payload, tag) = encode_value(&crate::value!({ "0": true })).unwrap();
        assert_eq!(tag, TypeTag::Object);
        assert_eq!(payload, crate::value!([true]));

        assert_eq!(encode_value(&Value::from("plain")), None);
    }
}
