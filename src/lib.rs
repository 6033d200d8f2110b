//! # serde_leaf
//!
//! A leaf codec that widens JSON to carry values JSON cannot represent.
//!
//! ## What does it do?
//!
//! Plain JSON has no `undefined`, no big integers, no dates, no NaN or
//! infinities, no sets, maps or regular expressions. It also loses the
//! difference between an array and an object whose keys happen to be
//! `"0".."n-1"`. This crate encodes each such value as a JSON-safe payload and
//! a short [`TypeTag`], and decodes the pair back into the exact original.
//!
//! The codec works on one value at a time. Walking a document, tracking paths,
//! and storing the tags next to the JSON are the caller's job.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_leaf = "0.1"
//! ```
//!
//! ### Encoding and Decoding a Leaf
//!
//! ```rust
//! use serde_leaf::{transform_value, untransform_value, Transform, TypeTag, Value};
//! use num_bigint::BigInt;
//!
//! let original = Value::BigInt(BigInt::from(10));
//!
//! let Some(Transform::Encoded { value, tag }) = transform_value(&original) else {
//!     panic!("big integers always need a tag");
//! };
//! assert_eq!(value, Value::from("10"));
//! assert_eq!(tag, TypeTag::BigInt);
//!
//! let restored = untransform_value(value, tag.as_str()).unwrap();
//! assert_eq!(restored, original);
//! ```
//!
//! ### Containers
//!
//! Maps and array-like objects may hold values that need tags of their own,
//! so the encoder defers them. The caller expands the container one level and
//! keeps walking into the payload:
//!
//! ```rust
//! use serde_leaf::{expand_container, transform_value, value, Transform, TypeTag};
//!
//! let obj = value!({ "0": "a", "1": undefined });
//! let transform = transform_value(&obj).unwrap();
//! assert_eq!(transform, Transform::Deferred { tag: TypeTag::Object });
//!
//! let payload = expand_container(&obj, transform.tag()).unwrap();
//! assert_eq!(payload, value!(["a", undefined]));
//! ```
//!
//! ### Tag Vocabulary
//!
//! | Tag         | Value                          | Payload                   |
//! |-------------|--------------------------------|---------------------------|
//! | `undefined` | `Value::Undefined`             | absent                    |
//! | `bigint`    | `Value::BigInt`                | decimal string            |
//! | `Date`      | `Value::Date`                  | ISO-8601, milliseconds    |
//! | `NaN`       | NaN                            | absent                    |
//! | `Infinity`  | +∞                             | absent                    |
//! | `-Infinity` | −∞                             | absent                    |
//! | `set`       | `Value::Set`                   | array of elements         |
//! | `regexp`    | `Value::RegExp`                | `/source/flags`           |
//! | `map`       | `Value::Map`                   | array of `[key, value]`   |
//! | `object`    | object with keys `"0".."n-1"`  | array of values           |
//!
//! The labels are a wire contract and are case-sensitive.
//!
//! ## Options
//!
//! [`CodecOptions`] selects how object keys are read as indices
//! ([`KeyParsing`]) and what the decoder does with a tag it does not know
//! ([`UnknownTagPolicy`]). Every entry point has a `_with_options` variant.
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a subscriber.

pub mod macros;

pub mod collections;
pub mod error;
pub mod keys;
pub mod map;
pub mod options;
pub mod regexp;
pub mod tag;
pub mod transform;
pub mod untransform;
pub mod value;

pub use collections::{ValueMap, ValueSet};
pub use error::{Error, Result};
pub use keys::{
    are_keys_array_like, are_keys_array_like_with_options, object_has_array_like_keys,
    object_has_array_like_keys_with_options,
};
pub use map::ObjectMap;
pub use options::{CodecOptions, KeyParsing, UnknownTagPolicy};
pub use regexp::RegExp;
pub use tag::TypeTag;
pub use transform::{
    encode_value, encode_value_with_options, expand_container, transform_value,
    transform_value_with_options, Transform,
};
pub use untransform::{untransform_tagged, untransform_value, untransform_value_with_options};
pub use value::{Number, Value};
