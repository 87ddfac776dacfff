//! The capability contract implemented by every negotiable value variant.

use std::fmt::Display;

use crate::NegotiateResult;

/// One of the underlying values being negotiated for.
///
/// `Display` must function as the inverse of [`Value::parse`] for valid
/// input: re-parsing the rendered form yields a value with the same
/// specificity and satisfaction behavior.
///
/// The query, the choice engine, and the negotiator are all generic over a
/// single implementation, so satisfaction is only ever evaluated between
/// values of the same variant; mixing grammars is a type error rather than
/// a runtime condition.
pub trait Value: Clone + Display + Sized {
	/// Parse a raw item into a value.
	///
	/// Every implementation must accept a bare `"*"` as a wildcard that
	/// matches anything, since an empty preference header degrades to the
	/// single-item wildcard query.
	fn parse(raw: &str) -> NegotiateResult<Self>;

	/// How narrowly this value constrains a match.
	///
	/// The number only has meaning relative to other values of the same
	/// variant. Larger is more specific; a wildcard-only value is 0.
	fn specificity(&self) -> u32;

	/// Whether this value is an acceptable instance of the pattern
	/// `reference` describes.
	///
	/// A wildcard reference is satisfied by anything; a concrete reference
	/// field is only satisfied by an equal candidate field.
	fn satisfies(&self, reference: &Self) -> bool;
}
