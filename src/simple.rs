//! Simple token values, as used by `Accept-Charset` and `Accept-Encoding`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{NegotiateError, NegotiateResult, Value};

static RE_SIMPLE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^(?:\*|[A-Za-z0-9_-]+)$").expect("invalid simple token pattern"));

/// A case-insensitive token, such as a charset name or a content coding.
///
/// Tokens are folded to lowercase on parse. A single `*` is the wildcard
/// that matches any token.
///
/// # Examples
///
/// ```
/// use negotiate::{Simple, Value};
///
/// let gzip = Simple::parse("GZIP").unwrap();
/// assert_eq!(gzip.as_str(), "gzip");
/// assert!(gzip.satisfies(&Simple::parse("*").unwrap()));
/// assert!(Simple::parse("what is this?").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Simple(String);

impl Simple {
	/// The normalized (lowercased) token text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether this token is the `*` wildcard.
	pub fn is_wildcard(&self) -> bool {
		self.0 == "*"
	}
}

impl Value for Simple {
	fn parse(raw: &str) -> NegotiateResult<Self> {
		if !RE_SIMPLE.is_match(raw) {
			return Err(NegotiateError::parse(raw));
		}

		Ok(Simple(raw.to_ascii_lowercase()))
	}

	fn specificity(&self) -> u32 {
		if self.is_wildcard() { 0 } else { 1 }
	}

	fn satisfies(&self, reference: &Self) -> bool {
		reference.is_wildcard() || self.0 == reference.0
	}
}

impl fmt::Display for Simple {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Simple {
	type Err = NegotiateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
