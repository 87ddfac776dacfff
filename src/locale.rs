//! Locale values (language tags), as used by `Accept-Language`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{NegotiateError, NegotiateResult, Value};

static RE_LOCALE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(\*|[A-Za-z0-9_]+)(?:-([A-Za-z0-9_]+))?$").expect("invalid locale pattern")
});

/// A language tag with an optional territory, such as `en` or `en-CA`.
///
/// The language subtag is folded to lowercase and the territory subtag to
/// uppercase on parse. A bare `*` language is the wildcard that matches any
/// locale.
///
/// # Examples
///
/// ```
/// use negotiate::{Locale, Value};
///
/// let en_ca = Locale::parse("EN-ca").unwrap();
/// assert_eq!(en_ca.to_string(), "en-CA");
/// assert!(en_ca.satisfies(&Locale::parse("en").unwrap()));
/// assert!(!Locale::parse("en").unwrap().satisfies(&en_ca));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
	language: String,
	territory: Option<String>,
}

impl Locale {
	/// The normalized (lowercased) language subtag, or `*`.
	pub fn language(&self) -> &str {
		&self.language
	}

	/// The normalized (uppercased) territory subtag, if any.
	pub fn territory(&self) -> Option<&str> {
		self.territory.as_deref()
	}

	/// Whether the language subtag is the `*` wildcard.
	pub fn is_wildcard(&self) -> bool {
		self.language == "*"
	}
}

impl Value for Locale {
	fn parse(raw: &str) -> NegotiateResult<Self> {
		let caps = RE_LOCALE
			.captures(raw)
			.ok_or_else(|| NegotiateError::parse(raw))?;

		Ok(Locale {
			language: caps[1].to_ascii_lowercase(),
			territory: caps.get(2).map(|m| m.as_str().to_ascii_uppercase()),
		})
	}

	fn specificity(&self) -> u32 {
		if self.is_wildcard() {
			0
		} else if self.territory.is_none() {
			1
		} else {
			2
		}
	}

	fn satisfies(&self, reference: &Self) -> bool {
		if !reference.is_wildcard() && self.language != reference.language {
			return false;
		}

		if let Some(territory) = reference.territory() {
			if self.territory() != Some(territory) {
				return false;
			}
		}

		true
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.territory {
			Some(territory) => write!(f, "{}-{}", self.language, territory),
			None => f.write_str(&self.language),
		}
	}
}

impl FromStr for Locale {
	type Err = NegotiateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
