//! Regular-expression literals.
//!
//! [`RegExp`] holds a pattern source and its flag characters. The codec never
//! compiles the pattern; it only has to carry it across the wire, so the
//! source is kept verbatim.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A regular-expression literal: pattern source plus flags.
///
/// Displays in the conventional `/source/flags` form and parses back from it.
///
/// # Examples
///
/// ```rust
/// use serde_leaf::RegExp;
///
/// let re = RegExp::new("ab+c", "gi");
/// assert_eq!(re.to_string(), "/ab+c/gi");
///
/// // The split happens at the last slash, so the source may contain slashes
/// let re: RegExp = "/a/b/gi".parse().unwrap();
/// assert_eq!(re.source(), "a/b");
/// assert_eq!(re.flags(), "gi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl FromStr for RegExp {
    type Err = Error;

    /// Parses `/source/flags`. Flags never contain `/`, so everything after
    /// the last slash is flags and everything between the first and last
    /// slash is the source.
    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix('/')
            .ok_or_else(|| Error::malformed("regexp", format!("missing leading slash in {:?}", s)))?;
        let last = body
            .rfind('/')
            .ok_or_else(|| Error::malformed("regexp", format!("missing closing slash in {:?}", s)))?;
        let (source, flags) = (&body[..last], &body[last + 1..]);

        if let Some(bad) = flags.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::malformed(
                "regexp",
                format!("invalid flag character {:?} in {:?}", bad, s),
            ));
        }

        Ok(RegExp::new(source, flags))
    }
}
