//! The negotiation facade: a value grammar bound to a fixed supported list.

use std::fmt;

use crate::{Locale, MediaType, NegotiateError, NegotiateResult, Query, Simple, Value};

/// Negotiates one of a fixed, ordered list of supported items against
/// client preference queries.
///
/// Items should be ordered with the more broadly compatible ones first, so
/// that they are preferred on wildcard ties. Every declared item is parsed
/// eagerly at construction and the list never changes afterwards, so a
/// negotiator built at startup can be shared freely across request-handling
/// threads.
///
/// [`Negotiator::process`] returns the winning item exactly as it was
/// declared, not a re-rendering of its parsed form.
///
/// # Examples
///
/// ```
/// use negotiate::{NegotiateError, SimpleNegotiator};
///
/// let negotiator = SimpleNegotiator::make(["cake", "pie"]);
///
/// assert_eq!(negotiator.process(""), Ok("cake"));
/// assert_eq!(negotiator.process("*, CAKE;q=0.9"), Ok("pie"));
/// assert_eq!(negotiator.process("pizza"), Err(NegotiateError::NotAcceptable));
/// ```
#[derive(Debug, Clone)]
pub struct Negotiator<V> {
	items: Vec<String>,
	values: Vec<V>,
}

impl<V: Value> Negotiator<V> {
	/// Build a negotiator, parsing every declared item eagerly.
	///
	/// Declared items are trusted developer input, so a grammar failure
	/// here is a configuration error: the first bad item aborts
	/// construction with its parse error, before any query is ever seen.
	pub fn new<I, S>(items: I) -> NegotiateResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let items: Vec<String> = items.into_iter().map(Into::into).collect();
		let values = items
			.iter()
			.map(|item| V::parse(item))
			.collect::<NegotiateResult<Vec<_>>>()?;

		Ok(Negotiator { items, values })
	}

	/// Like [`Negotiator::new`], but panics on an invalid declared item.
	///
	/// # Panics
	///
	/// Panics if any declared item fails the value grammar.
	pub fn make<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		match Self::new(items) {
			Ok(negotiator) => negotiator,
			Err(err) => panic!("invalid supported item: {err}"),
		}
	}

	/// The declared items, in preference order.
	pub fn items(&self) -> &[String] {
		&self.items
	}

	/// Select the declared item that best satisfies the client query,
	/// returned in its original declared form.
	///
	/// Returns [`NegotiateError::NotAcceptable`] when no item satisfies a
	/// positive-quality query entry (callers usually answer 406, listing
	/// the negotiator's `Display` output), and propagates
	/// [`NegotiateError::Parse`] for a malformed query (usually a 400).
	pub fn process(&self, query: &str) -> NegotiateResult<&str> {
		let parsed = Query::parse(query)?;

		match parsed.choose(&self.values) {
			Some(index) => {
				let item = self.items[index].as_str();
				tracing::debug!(query, item, "negotiated item");
				Ok(item)
			}
			None => {
				tracing::debug!(query, supported = %self, "no acceptable item");
				Err(NegotiateError::NotAcceptable)
			}
		}
	}
}

impl<V> fmt::Display for Negotiator<V> {
	/// The declared items as a comma-separated list, suitable for a 406
	/// response body.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.items.join(", "))
	}
}

/// Negotiator for simple tokens, as in `Accept-Charset` and
/// `Accept-Encoding`.
pub type SimpleNegotiator = Negotiator<Simple>;

/// Negotiator for language tags, as in `Accept-Language`.
pub type LocaleNegotiator = Negotiator<Locale>;

/// Negotiator for media types, as in `Accept`.
pub type MediaNegotiator = Negotiator<MediaType>;
