//! Configuration options for the leaf codec.
//!
//! - [`CodecOptions`]: Main configuration struct
//! - [`KeyParsing`]: How object keys are read as array indices
//! - [`UnknownTagPolicy`]: What the decoder does with tags it does not know
//!
//! ## Examples
//!
//! ```rust
//! use serde_leaf::{CodecOptions, KeyParsing, UnknownTagPolicy};
//!
//! // Defaults: prefix key parsing, unknown tags pass through
//! let options = CodecOptions::new();
//! assert_eq!(options.key_parsing, KeyParsing::Prefix);
//!
//! // Everything strict
//! let options = CodecOptions::strict();
//! assert_eq!(options.unknown_tags, UnknownTagPolicy::Reject);
//! ```

/// How object keys are parsed when checking for array-like key sets.
///
/// - **Prefix**: Default. Reads the leading integer of a key and ignores the
///   rest, so `"01"` and `"1e3"` both read as `1`. Existing documents were
///   produced with this rule.
/// - **Strict**: The whole key must be `"0"` or a digit string without a
///   leading zero.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::KeyParsing;
///
/// assert_eq!(KeyParsing::Prefix.parse("1e3"), Some(1));
/// assert_eq!(KeyParsing::Strict.parse("1e3"), None);
/// assert_eq!(KeyParsing::Strict.parse("12"), Some(12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyParsing {
    #[default]
    Prefix,
    Strict,
}

impl KeyParsing {
    /// Parses `key` as an integer under this rule.
    #[must_use]
    pub fn parse(self, key: &str) -> Option<i64> {
        match self {
            KeyParsing::Prefix => crate::keys::parse_int_prefix(key),
            KeyParsing::Strict => crate::keys::parse_index_strict(key),
        }
    }
}

/// What the decoder does with a tag outside the closed vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Return the payload unchanged. Lets older readers accept newer tags.
    #[default]
    PassThrough,
    /// Fail with [`Error::UnknownTag`](crate::Error::UnknownTag).
    Reject,
}

/// Configuration options for encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::{CodecOptions, KeyParsing, UnknownTagPolicy};
///
/// let options = CodecOptions::new()
///     .with_key_parsing(KeyParsing::Strict)
///     .with_unknown_tags(UnknownTagPolicy::PassThrough);
/// assert_eq!(options.key_parsing, KeyParsing::Strict);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub key_parsing: KeyParsing,
    pub unknown_tags: UnknownTagPolicy,
}

impl CodecOptions {
    /// Creates default options (prefix key parsing, unknown tags pass through).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_leaf::{CodecOptions, UnknownTagPolicy};
    ///
    /// let options = CodecOptions::new();
    /// assert_eq!(options.unknown_tags, UnknownTagPolicy::PassThrough);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with strict key parsing and unknown tags rejected.
    #[must_use]
    pub fn strict() -> Self {
        CodecOptions {
            key_parsing: KeyParsing::Strict,
            unknown_tags: UnknownTagPolicy::Reject,
        }
    }

    /// Sets the key parsing rule used by the array-like classifier.
    #[must_use]
    pub fn with_key_parsing(mut self, key_parsing: KeyParsing) -> Self {
        self.key_parsing = key_parsing;
        self
    }

    /// Sets the decoder's policy for unrecognized tags.
    #[must_use]
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }
}
