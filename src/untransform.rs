//! Leaf decoding.
//!
//! [`untransform_value`] is the left inverse of
//! [`transform_value`](crate::transform_value): given a payload and the tag it
//! was recorded with, it rebuilds the original value.
//!
//! A tag the decoder does not know is not an error by default; the payload is
//! returned unchanged so documents written by newer encoders still load. A
//! payload that does not have the shape its tag promises fails immediately
//! with [`Error::MalformedEncoding`].

use crate::{
    CodecOptions, Error, Number, ObjectMap, RegExp, Result, TypeTag, UnknownTagPolicy, Value,
    ValueMap, ValueSet,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use num_bigint::BigInt;
use tracing::debug;

/// Rebuilds a value from its payload and recorded tag.
///
/// Unrecognized tags return the payload unchanged.
///
/// # Errors
///
/// Returns [`Error::MalformedEncoding`] if the payload does not fit its tag.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{untransform_value, Value};
/// use num_bigint::BigInt;
///
/// let v = untransform_value(Value::from("10"), "bigint").unwrap();
/// assert_eq!(v, Value::BigInt(BigInt::from(10)));
///
/// let re = untransform_value(Value::from("/a/b/gi"), "regexp").unwrap();
/// assert_eq!(re.as_regexp().unwrap().source(), "a/b");
///
/// let same = untransform_value(Value::from(1), "some-future-tag").unwrap();
/// assert_eq!(same, Value::from(1));
/// ```
pub fn untransform_value(payload: Value, tag: &str) -> Result<Value> {
    untransform_value_with_options(payload, tag, &CodecOptions::default())
}

/// Like [`untransform_value`], with explicit options.
///
/// # Errors
///
/// Returns [`Error::MalformedEncoding`] if the payload does not fit its tag,
/// or [`Error::UnknownTag`] for an unrecognized tag under
/// [`UnknownTagPolicy::Reject`].
pub fn untransform_value_with_options(
    payload: Value,
    tag: &str,
    options: &CodecOptions,
) -> Result<Value> {
    match TypeTag::from_label(tag) {
        Some(tag) => untransform_tagged(payload, tag),
        None => match options.unknown_tags {
            UnknownTagPolicy::PassThrough => {
                debug!(tag, "unknown type tag, passing payload through");
                Ok(payload)
            }
            UnknownTagPolicy::Reject => Err(Error::unknown_tag(tag)),
        },
    }
}

/// Rebuilds a value from its payload and a known tag.
///
/// # Errors
///
/// Returns [`Error::MalformedEncoding`] if the payload does not fit `tag`.
pub fn untransform_tagged(payload: Value, tag: TypeTag) -> Result<Value> {
    match tag {
        TypeTag::Undefined => Ok(Value::Undefined),
        TypeTag::BigInt => decode_bigint(payload).map(Value::BigInt),
        TypeTag::Date => decode_date(payload).map(Value::Date),
        TypeTag::NaN => Ok(Value::Number(Number::NaN)),
        TypeTag::Infinity => Ok(Value::Number(Number::Infinity)),
        TypeTag::NegativeInfinity => Ok(Value::Number(Number::NegativeInfinity)),
        TypeTag::Set => match payload {
            Value::Array(items) => Ok(Value::Set(items.into_iter().collect::<ValueSet>())),
            other => Err(malformed(tag, format!("expected array, found {}", other.kind()))),
        },
        TypeTag::RegExp => match payload {
            Value::String(s) => s.parse::<RegExp>().map(Value::RegExp).map_err(|err| {
                debug!(%err, "rejecting regexp payload");
                err
            }),
            other => Err(malformed(tag, format!("expected string, found {}", other.kind()))),
        },
        TypeTag::Map => decode_map(payload).map(Value::Map),
        TypeTag::Object => match payload {
            Value::Array(items) => Ok(Value::Object(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item))
                    .collect::<ObjectMap>(),
            )),
            other => Err(malformed(tag, format!("expected array, found {}", other.kind()))),
        },
    }
}

fn decode_bigint(payload: Value) -> Result<BigInt> {
    match payload {
        Value::String(s) => {
            let trimmed = s.trim();
            let digits = trimmed.strip_prefix(&['-', '+'][..]).unwrap_or(trimmed);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(
                    TypeTag::BigInt,
                    format!("not a decimal integer: {:?}", s),
                ));
            }
            trimmed
                .parse::<BigInt>()
                .map_err(|e| malformed(TypeTag::BigInt, format!("{}: {:?}", e, s)))
        }
        Value::Number(Number::Integer(i)) => Ok(BigInt::from(i)),
        other => Err(malformed(
            TypeTag::BigInt,
            format!("expected string, found {}", other.kind()),
        )),
    }
}

fn decode_date(payload: Value) -> Result<DateTime<Utc>> {
    match payload {
        Value::String(s) => parse_iso_date(&s)
            .ok_or_else(|| malformed(TypeTag::Date, format!("not an ISO-8601 date: {:?}", s))),
        Value::Number(Number::Integer(ms)) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| malformed(TypeTag::Date, format!("timestamp out of range: {}", ms))),
        other => Err(malformed(
            TypeTag::Date,
            format!("expected string, found {}", other.kind()),
        )),
    }
}

/// Accepts full RFC 3339 timestamps, the expanded `±YYYYYY` year form, and
/// bare `YYYY-MM-DD` dates, which read as UTC midnight.
fn parse_iso_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = parse_expanded_year(s) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parses `+YYYYYY-MM-DDTHH:MM:SS.sssZ` and its negative-year counterpart.
/// `-000000` is not a valid year.
fn parse_expanded_year(s: &str) -> Option<DateTime<Utc>> {
    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = s.get(1..7)?;
    let rest = s.get(7..)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !rest.starts_with('-') {
        return None;
    }
    let year = sign * digits.parse::<i32>().ok()?;
    if year == 0 && sign < 0 {
        return None;
    }

    // 2000 is a leap year, so every month/day pair parses; the real year is
    // validated when the date is rebuilt.
    let stand_in = DateTime::parse_from_rfc3339(&format!("2000{}", rest)).ok()?;
    let local = stand_in.naive_local();
    let date = NaiveDate::from_ymd_opt(year, local.month(), local.day())?;
    let offset = Duration::seconds(i64::from(stand_in.offset().local_minus_utc()));
    let utc = date.and_time(local.time()).checked_sub_signed(offset)?;
    Some(Utc.from_utc_datetime(&utc))
}

/// Maps arrive as `[key, value]` pairs. Object payloads are also accepted, in
/// which case every key becomes a string key.
fn decode_map(payload: Value) -> Result<ValueMap> {
    match payload {
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Array(pair) if pair.len() == 2 => {
                    let mut pair = pair.into_iter();
                    match (pair.next(), pair.next()) {
                        (Some(key), Some(value)) => Ok((key, value)),
                        _ => Err(bad_map_entry(index)),
                    }
                }
                _ => Err(bad_map_entry(index)),
            })
            .collect(),
        Value::Object(obj) => Ok(obj
            .own_entries()
            .into_iter()
            .map(|(k, v)| (Value::from(k), v.clone()))
            .collect()),
        other => Err(malformed(
            TypeTag::Map,
            format!("expected array of entries, found {}", other.kind()),
        )),
    }
}

fn bad_map_entry(index: usize) -> Error {
    malformed(
        TypeTag::Map,
        format!("entry {} is not a [key, value] pair", index),
    )
}

fn malformed(tag: TypeTag, reason: String) -> Error {
    debug!(%tag, %reason, "rejecting malformed payload");
    Error::malformed(tag.as_str(), reason)
}
