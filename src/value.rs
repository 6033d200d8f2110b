//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum: every value the codec can encode
//! or reconstruct, including the ones plain JSON cannot carry (undefined,
//! big integers, dates, non-finite numbers, sets, maps, regular expressions).
//!
//! ## Core Types
//!
//! - [`Value`]: An enum representing any value (undefined, null, bool, number,
//!   string, bigint, date, regexp, array, object, set, map)
//! - [`Number`]: Numeric values including the special values (Infinity,
//!   -Infinity, NaN)
//!
//! ## JSON Safety
//!
//! `Value` implements [`Serialize`] only for the part of the model JSON can
//! represent. Big integers, dates, regexps, sets and maps refuse to serialize
//! and name the tag they need, so an untagged value can never be written out
//! lossily by accident. `Undefined` and non-finite numbers serialize as null,
//! the same as JSON stringification.
//!
//! ```rust
//! use serde_leaf::{value, Value};
//!
//! let safe = value!({ "id": 1, "tags": ["a", "b"] });
//! assert!(safe.is_json_safe());
//! assert_eq!(serde_json::to_string(&safe).unwrap(), r#"{"id":1,"tags":["a","b"]}"#);
//!
//! let big = Value::from(num_bigint::BigInt::from(10));
//! assert!(!big.is_json_safe());
//! assert!(serde_json::to_string(&big).is_err());
//! ```

use crate::{ObjectMap, RegExp, TypeTag, ValueMap, ValueSet};
use chrono::{DateTime, Datelike, SecondsFormat, SubsecRound, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed value.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{Number, Value};
///
/// let undefined = Value::Undefined;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(undefined.is_undefined());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    BigInt(BigInt),
    /// An instant. The `Date` tag stores milliseconds, so anything finer is
    /// dropped on encoding; [`Value::from`] truncates up front so that the
    /// value compares equal to its decoded form.
    Date(DateTime<Utc>),
    RegExp(RegExp),
    Array(Vec<Value>),
    Object(ObjectMap),
    Set(ValueSet),
    Map(ValueMap),
}

/// A numeric value that can be an integer, float, or special value.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::Infinity;
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert!(infinity.is_special());
/// ```
///
/// A `Float` holding NaN or an infinity compares equal to the matching special
/// variant, and NaN equals NaN.
#[derive(Clone, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is one of the explicit special variants.
    ///
    /// A `Float` holding a non-finite value is not special by this test; use
    /// [`Number::is_nan`] or [`Number::is_infinite`] to catch both spellings.
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Returns `true` for `NaN` and for a `Float` holding NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::Number;
    ///
    /// assert!(Number::NaN.is_nan());
    /// assert!(Number::Float(f64::NAN).is_nan());
    /// assert!(!Number::Float(1.0).is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Number::NaN => true,
            Number::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Returns `true` for either infinity, spelled as a variant or as a `Float`.
    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        match self {
            Number::Infinity | Number::NegativeInfinity => true,
            Number::Float(f) => f.is_infinite(),
            _ => false,
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range. Returns `None` for special values and
    /// out-of-range floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// SameValueZero: numeric comparison where NaN equals NaN and the two
    /// zeros are equal.
    fn same_value_zero(&self, other: &Number) -> bool {
        if let (Number::Integer(a), Number::Integer(b)) = (self, other) {
            return a == b;
        }
        let (a, b) = (self.as_f64(), other.as_f64());
        a == b || (a.is_nan() && b.is_nan())
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Integer(_), _) | (_, Number::Integer(_)) => false,
            _ => {
                let (a, b) = (self.as_f64(), other.as_f64());
                a == b || (a.is_nan() && b.is_nan())
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            Number::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(i64::from(value))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Returns `true` if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Value::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_regexp(&self) -> bool {
        matches!(self, Value::RegExp(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_regexp(&self) -> Option<&RegExp> {
        match self {
            Value::RegExp(re) => Some(re),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short lowercase name of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
        }
    }

    /// Returns `true` if this value, and everything nested in it, can be
    /// written as JSON and read back unchanged without a type tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::{value, Number, Value};
    ///
    /// assert!(value!([1, "two", null]).is_json_safe());
    /// assert!(!Value::Undefined.is_json_safe());
    /// assert!(!Value::Number(Number::NaN).is_json_safe());
    /// assert!(!Value::Array(vec![Value::Undefined]).is_json_safe());
    /// ```
    #[must_use]
    pub fn is_json_safe(&self) -> bool {
        match self {
            Value::Null | Value::Bool(_) | Value::String(_) => true,
            Value::Number(n) => !n.is_nan() && !n.is_infinite(),
            Value::Array(arr) => arr.iter().all(Value::is_json_safe),
            Value::Object(obj) => obj.values().all(Value::is_json_safe),
            Value::Undefined
            | Value::BigInt(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Set(_)
            | Value::Map(_) => false,
        }
    }

    /// SameValueZero equality, used for set membership and map keys.
    ///
    /// Numbers compare numerically (so `1` and `1.0` match), NaN matches NaN
    /// and `0.0` matches `-0.0`. Every other value compares structurally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::{Number, Value};
    ///
    /// assert!(Value::from(1).same_value_zero(&Value::from(1.0)));
    /// assert!(Value::Number(Number::NaN).same_value_zero(&Value::from(f64::NAN)));
    /// assert!(!Value::from(1).same_value_zero(&Value::from("1")));
    /// ```
    #[must_use]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.same_value_zero(b),
            _ => self == other,
        }
    }
}

/// Formats a date the way the `Date` tag stores it: UTC, millisecond
/// precision, `Z` suffix.
///
/// Years outside `0000..=9999` use the expanded form, a sign followed by six
/// digits (`+010000-01-01T00:00:00.000Z`, `-000001-01-01T00:00:00.000Z`).
pub(crate) fn format_iso_millis(dt: &DateTime<Utc>) -> String {
    let year = dt.year();
    if (0..=9999).contains(&year) {
        return dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}{}",
        sign,
        year.unsigned_abs(),
        dt.format("-%m-%dT%H:%M:%S%.3fZ")
    )
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::BigInt(bi) => write!(f, "{}n", bi),
            Value::Date(dt) => write!(f, "{}", format_iso_millis(dt)),
            Value::RegExp(re) => write!(f, "{}", re),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{:?}:{}", k, v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Set(set) => {
                write!(
                    f,
                    "Set({}) {{{}}}",
                    set.len(),
                    set.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Map(map) => {
                write!(
                    f,
                    "Map({}) {{{}}}",
                    map.len(),
                    map.iter()
                        .map(|(k, v)| format!("{} => {}", k, v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::BigInt(_) => Err(needs_tag(self, TypeTag::BigInt)),
            Value::Date(_) => Err(needs_tag(self, TypeTag::Date)),
            Value::RegExp(_) => Err(needs_tag(self, TypeTag::RegExp)),
            Value::Set(_) => Err(needs_tag(self, TypeTag::Set)),
            Value::Map(_) => Err(needs_tag(self, TypeTag::Map)),
        }
    }
}

fn needs_tag<E: serde::ser::Error>(value: &Value, tag: TypeTag) -> E {
    E::custom(format!(
        "{} value cannot be written as plain JSON, encode it with the `{}` tag",
        value.kind(),
        tag
    ))
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::Number(Number::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ObjectMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {}", value.kind())))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {}", value.kind())))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for BigInt {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::BigInt(bi) => Ok(bi),
            Value::Number(Number::Integer(i)) => Ok(BigInt::from(i)),
            _ => Err(crate::Error::custom(format!(
                "expected bigint, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Date(dt) => Ok(dt),
            _ => Err(crate::Error::custom(format!(
                "expected date, found {}",
                value.kind()
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<u64> for Value {
    /// Values above `i64::MAX` become big integers rather than lossy floats.
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<DateTime<Utc>> for Value {
    /// Truncates to whole milliseconds.
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value.trunc_subsecs(3))
    }
}

impl From<RegExp> for Value {
    fn from(value: RegExp) -> Self {
        Value::RegExp(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ObjectMap> for Value {
    fn from(value: ObjectMap) -> Self {
        Value::Object(value)
    }
}

impl From<ValueSet> for Value {
    fn from(value: ValueSet) -> Self {
        Value::Set(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` maps to `Undefined`.
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = Value::Number(Number::Float(42.0));
        assert_eq!(i64::try_from(value).unwrap(), 42);

        let value = Value::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_bigint() {
        let value = Value::BigInt(BigInt::from(7));
        assert_eq!(BigInt::try_from(value).unwrap(), BigInt::from(7));

        let value = Value::from(7);
        assert_eq!(BigInt::try_from(value).unwrap(), BigInt::from(7));

        assert!(BigInt::try_from(Value::from("7")).is_err());
    }

    #[test]
    fn test_from_u64_overflows_to_bigint() {
        assert_eq!(Value::from(5u64), Value::Number(Number::Integer(5)));
        assert_eq!(
            Value::from(u64::MAX),
            Value::BigInt(BigInt::from(u64::MAX))
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_number_special_checks() {
        assert!(Number::Float(f64::INFINITY).is_infinite());
        assert!(Number::NegativeInfinity.is_infinite());
        assert!(!Number::Float(f64::MAX).is_infinite());
        assert!(!Number::NaN.is_infinite());
        assert!(!Number::Infinity.is_nan());
    }

    #[test]
    fn test_same_value_zero_large_integers() {
        let a = Value::from(9_007_199_254_740_993i64);
        let b = Value::from(9_007_199_254_740_992i64);
        assert!(!a.same_value_zero(&b));
    }

    #[test]
    fn test_is_json_safe_nested() {
        let mut obj = ObjectMap::new();
        obj.insert("when".to_string(), Value::Date(Utc::now()));
        assert!(!Value::Object(obj).is_json_safe());
        assert!(Value::Object(ObjectMap::new()).is_json_safe());
        assert!(!Value::from(f64::INFINITY).is_json_safe());
    }

    #[test]
    fn test_display() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Value::Date(dt).to_string(), "2020-01-01T00:00:00.000Z");
        assert_eq!(Value::BigInt(BigInt::from(-10)).to_string(), "-10n");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(
            Value::RegExp(RegExp::new("a/b", "g")).to_string(),
            "/a/b/g"
        );

        let set: ValueSet = [1, 2].into_iter().map(Value::from).collect();
        assert_eq!(Value::Set(set).to_string(), "Set(2) {1,2}");
    }

    #[test]
    fn test_from_date_truncates_to_millis() {
        let precise = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let value = Value::from(precise);
        assert_eq!(value.to_string(), "2020-01-01T00:00:00.123Z");
        assert_eq!(
            value.as_date().unwrap().timestamp_subsec_nanos(),
            123_000_000
        );

        let (payload, tag) = crate::encode_value(&value).unwrap();
        assert_eq!(crate::untransform_value(payload, tag.as_str()).unwrap(), value);
    }

    #[test]
    fn test_raw_date_loses_sub_millis_on_encoding() {
        let precise = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let raw = Value::Date(precise);

        let (payload, tag) = crate::encode_value(&raw).unwrap();
        let decoded = crate::untransform_value(payload, tag.as_str()).unwrap();
        assert_ne!(decoded, raw);
        assert_eq!(decoded, Value::from(precise));
    }

    #[test]
    fn test_non_finite_float_equals_special_variant() {
        assert_eq!(Number::Float(f64::INFINITY), Number::Infinity);
        assert_eq!(Number::NegativeInfinity, Number::Float(f64::NEG_INFINITY));
        assert_eq!(Number::Float(f64::NAN), Number::NaN);
        assert_eq!(Number::Float(f64::NAN), Number::Float(f64::NAN));
        assert_ne!(Number::Float(f64::INFINITY), Number::NegativeInfinity);
        assert_ne!(Number::Integer(1), Number::Float(1.0));
        assert_eq!(Number::Float(0.0), Number::Float(-0.0));

        for original in [f64::INFINITY, f64::NEG_INFINITY] {
            let value = Value::from(original);
            let (payload, tag) = crate::encode_value(&value).unwrap();
            assert_eq!(crate::untransform_value(payload, tag.as_str()).unwrap(), value);
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Undefined.kind(), "undefined");
        assert_eq!(Value::Set(ValueSet::new()).kind(), "set");
        assert_eq!(Value::Map(ValueMap::new()).kind(), "map");
    }
}
