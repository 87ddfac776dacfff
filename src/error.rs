//! Error types for negotiation.

use thiserror::Error;

/// Errors that can occur while negotiating a header value.
///
/// The two kinds are deliberately distinguishable so callers can choose
/// between a 400-style response (`Parse`) and a 406-style response
/// (`NotAcceptable`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegotiateError {
	/// The raw text does not conform to the active value grammar.
	#[error("unable to parse {raw:?}")]
	Parse {
		/// The offending raw text.
		raw: String,
	},

	/// The query is well formed but no supported item satisfies it.
	#[error("no item satisfies query")]
	NotAcceptable,
}

impl NegotiateError {
	pub(crate) fn parse(raw: impl Into<String>) -> Self {
		Self::Parse { raw: raw.into() }
	}
}

/// Result type alias for negotiation operations.
pub type NegotiateResult<T> = Result<T, NegotiateError>;
