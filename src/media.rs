//! Media type values (media ranges), as used by `Accept`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{NegotiateError, NegotiateResult, Value};

static RE_TYPE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(\*|[A-Za-z0-9!#$%&'+.^_`|~-]+)(?:/(\*|[A-Za-z0-9!#$%&'+.^_`|~-]+))?$")
		.expect("invalid media type pattern")
});

static RE_TOKEN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'+.^_`|~-]+$").expect("invalid token pattern"));

/// A media range: a `type/subtype` pair plus optional parameters, such as
/// `text/html` or `text/html; level=1`.
///
/// The type and subtype are folded to lowercase, and either may be the `*`
/// wildcard; a bare token without a `/` parses as `token/*`. Parameter
/// names are case-insensitive (folded to lowercase); parameter values are
/// case-sensitive, with quoted values unquoted on parse.
///
/// # Examples
///
/// ```
/// use negotiate::{MediaType, Value};
///
/// let html = MediaType::parse("Text/HTML; Level=1").unwrap();
/// assert_eq!(html.to_string(), "text/html; level=1");
/// assert!(html.satisfies(&MediaType::parse("text/*").unwrap()));
/// assert!(html.satisfies(&MediaType::parse("text/html").unwrap()));
/// assert!(!html.satisfies(&MediaType::parse("text/html; level=2").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
	major: String,
	minor: String,
	params: BTreeMap<String, String>,
}

impl MediaType {
	/// The normalized (lowercased) type, or `*`.
	pub fn major(&self) -> &str {
		&self.major
	}

	/// The normalized (lowercased) subtype, or `*`.
	pub fn minor(&self) -> &str {
		&self.minor
	}

	/// The value of a parameter, looked up by its lowercased name.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// The parameters, keyed by lowercased name.
	pub fn params(&self) -> &BTreeMap<String, String> {
		&self.params
	}
}

impl Value for MediaType {
	fn parse(raw: &str) -> NegotiateResult<Self> {
		let mut segments = split_semicolons(raw);
		let type_part = segments.next().unwrap_or_default().trim();

		let caps = RE_TYPE
			.captures(type_part)
			.ok_or_else(|| NegotiateError::parse(raw))?;

		let major = caps[1].to_ascii_lowercase();
		let minor = caps
			.get(2)
			.map_or_else(|| "*".to_string(), |m| m.as_str().to_ascii_lowercase());

		let mut params = BTreeMap::new();

		for segment in segments {
			let (name, value) =
				parse_param(segment.trim()).ok_or_else(|| NegotiateError::parse(raw))?;
			params.insert(name, value);
		}

		Ok(MediaType { major, minor, params })
	}

	fn specificity(&self) -> u32 {
		if self.major == "*" {
			0
		} else if self.minor == "*" {
			1
		} else if self.params.is_empty() {
			2
		} else {
			3
		}
	}

	fn satisfies(&self, reference: &Self) -> bool {
		if reference.major != "*" && self.major != reference.major {
			return false;
		}

		if reference.minor != "*" && self.minor != reference.minor {
			return false;
		}

		// Every reference parameter must be matched exactly; extra
		// candidate parameters do not disqualify.
		reference
			.params
			.iter()
			.all(|(name, value)| self.param(name) == Some(value.as_str()))
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.major, self.minor)?;

		for (name, value) in &self.params {
			if RE_TOKEN.is_match(value) {
				write!(f, "; {name}={value}")?;
			} else {
				let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
				write!(f, "; {name}=\"{escaped}\"")?;
			}
		}

		Ok(())
	}
}

impl FromStr for MediaType {
	type Err = NegotiateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// Splits on semicolons that are not inside a double-quoted string.
fn split_semicolons(raw: &str) -> impl Iterator<Item = &str> {
	let mut segments = Vec::new();
	let mut start = 0;
	let mut in_quotes = false;
	let mut escaped = false;

	for (i, c) in raw.char_indices() {
		match c {
			_ if escaped => escaped = false,
			'\\' if in_quotes => escaped = true,
			'"' => in_quotes = !in_quotes,
			';' if !in_quotes => {
				segments.push(&raw[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}

	segments.push(&raw[start..]);
	segments.into_iter()
}

/// Parses one `name=value` parameter segment, unquoting the value if it is
/// a quoted string.
fn parse_param(segment: &str) -> Option<(String, String)> {
	let (name, value) = segment.split_once('=')?;
	let name = name.trim();

	if !RE_TOKEN.is_match(name) {
		return None;
	}

	let value = value.trim();
	let value = match value.strip_prefix('"') {
		Some(quoted) => unquote(quoted.strip_suffix('"')?)?,
		None if RE_TOKEN.is_match(value) => value.to_string(),
		None => return None,
	};

	Some((name.to_ascii_lowercase(), value))
}

/// Resolves backslash escapes inside a quoted-string body, rejecting stray
/// quotes and a trailing backslash.
fn unquote(body: &str) -> Option<String> {
	let mut unquoted = String::with_capacity(body.len());
	let mut chars = body.chars();

	while let Some(c) = chars.next() {
		match c {
			'\\' => unquoted.push(chars.next()?),
			'"' => return None,
			_ => unquoted.push(c),
		}
	}

	Some(unquoted)
}
