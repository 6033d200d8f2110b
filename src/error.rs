//! Error types for the leaf codec.
//!
//! Encoding never fails: every value either gets a tag or passes through.
//! Decoding fails only when a payload does not have the shape its tag
//! promises, or when the caller opted into rejecting unknown tags.
//!
//! ## Error Categories
//!
//! - **Malformed Encoding**: payload of the wrong shape for a known tag
//! - **Unknown Tag**: unrecognized tag under [`UnknownTagPolicy::Reject`](crate::UnknownTagPolicy::Reject)
//! - **Invariant Violation**: a container expansion the encoder never asks for
//!
//! ## Examples
//!
//! ```rust
//! use serde_leaf::{untransform_value, Error, Value};
//!
//! let result = untransform_value(Value::from("no slashes"), "regexp");
//! assert!(matches!(result, Err(Error::MalformedEncoding { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by the codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Payload does not have the shape required by its tag
    #[error("Malformed `{tag}` encoding: {reason}")]
    MalformedEncoding { tag: String, reason: String },

    /// Tag outside the closed vocabulary, rejected by policy
    #[error("Unknown type tag: {0:?}")]
    UnknownTag(String),

    /// Container expansion requested for a value the encoder would not defer
    #[error("Codec invariant violated: {0}")]
    InvariantViolation(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a malformed-encoding error for the given tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::Error;
    ///
    /// let err = Error::malformed("regexp", "missing closing slash");
    /// assert!(err.to_string().contains("`regexp`"));
    /// ```
    pub fn malformed(tag: &str, reason: impl Into<String>) -> Self {
        Error::MalformedEncoding {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown-tag error.
    pub fn unknown_tag(tag: &str) -> Self {
        Error::UnknownTag(tag.to_string())
    }

    /// Creates an invariant-violation error.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed("bigint", "not an integer: \"1.5\"");
        assert_eq!(
            err.to_string(),
            "Malformed `bigint` encoding: not an integer: \"1.5\""
        );
    }

    #[test]
    fn test_unknown_tag_display() {
        let err = Error::unknown_tag("symbol");
        assert_eq!(err.to_string(), "Unknown type tag: \"symbol\"");
    }
}
