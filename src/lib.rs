//! Proactive content negotiation for `Accept`-style HTTP headers.
//!
//! Implements the RFC 7231 selection rules: a server declares an ordered
//! list of supported representations, a client sends a quality-weighted
//! preference header, and [`Negotiator::process`] picks the single best
//! match or reports that none is acceptable.
//!
//! The negotiable value grammars are closed over three variants, each an
//! implementation of the [`Value`] contract:
//!
//! - [`Simple`] tokens, for `Accept-Charset` and `Accept-Encoding`
//! - [`Locale`] language tags, for `Accept-Language`
//! - [`MediaType`] media ranges, for `Accept`
//!
//! A negotiator is generic over one variant, so values of different
//! grammars can never be compared against each other.
//!
//! # Examples
//!
//! ```
//! use negotiate::{MediaNegotiator, NegotiateError};
//!
//! let negotiator = MediaNegotiator::make(["text/html", "application/json"]);
//!
//! assert_eq!(negotiator.process("application/json;q=0.9, text/*"), Ok("text/html"));
//! assert_eq!(negotiator.process(""), Ok("text/html"));
//! assert_eq!(negotiator.process("image/png"), Err(NegotiateError::NotAcceptable));
//! assert!(matches!(
//! 	negotiator.process("i like waffles."),
//! 	Err(NegotiateError::Parse { .. })
//! ));
//! ```
//!
//! Callers typically map [`NegotiateError::NotAcceptable`] to a 406
//! response listing the supported items (the negotiator's `Display`
//! output) and [`NegotiateError::Parse`] to a 400 response.

pub mod error;
pub mod locale;
pub mod media;
pub mod negotiator;
pub mod query;
pub mod simple;
pub mod value;

pub use error::{NegotiateError, NegotiateResult};
pub use locale::Locale;
pub use media::MediaType;
pub use negotiator::{LocaleNegotiator, MediaNegotiator, Negotiator, SimpleNegotiator};
pub use query::{QValue, Query};
pub use simple::Simple;
pub use value::Value;
