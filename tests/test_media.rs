use negotiate::{MediaNegotiator, MediaType, NegotiateError, Query, Value};

// The worked example from RFC 7231 section 5.3.2.
const RFC7231_ACCEPT: &str =
	"text/*;q=0.3, text/html;q=0.7, text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5";

#[test]
fn test_rfc7231_worked_example_qualities() {
	let query: Query<MediaType> = Query::parse(RFC7231_ACCEPT).unwrap();

	// Each candidate takes the quality of the most specific entry that it
	// satisfies; text/html;level=3 falls back to the bare text/html entry,
	// not the level=2 one.
	let expectations = [
		("text/html;level=1", 1.0),
		("text/html", 0.7),
		("text/plain", 0.3),
		("image/jpeg", 0.5),
		("text/html;level=2", 0.4),
		("text/html;level=3", 0.7),
	];

	for (raw, quality) in expectations {
		let candidate = MediaType::parse(raw).unwrap();
		let index = query.find(&candidate).unwrap();
		assert_eq!(query.entries()[index].quality(), quality, "candidate {raw}");
	}
}

#[test]
fn test_rfc7231_query_renders_in_precedence_order() {
	let query: Query<MediaType> = Query::parse(RFC7231_ACCEPT).unwrap();

	assert_eq!(
		query.to_string(),
		"text/html; level=1, text/html; level=2; q=0.4, text/html; q=0.7, \
		 text/*; q=0.3, */*; q=0.5"
	);
}

#[test]
fn test_choose_uses_most_specific_entry_quality() {
	let query: Query<MediaType> = Query::parse(RFC7231_ACCEPT).unwrap();
	let choices = [
		MediaType::parse("text/plain").unwrap(),
		MediaType::parse("text/html").unwrap(),
		MediaType::parse("image/jpeg").unwrap(),
	];

	// text/html yields 0.7, beating text/plain (0.3) and image/jpeg (0.5).
	assert_eq!(query.choose(&choices), Some(1));
}

#[test]
fn test_accept_negotiation() {
	let negotiator = MediaNegotiator::make(["image/png", "image/webp"]);

	assert_eq!(negotiator.process(""), Ok("image/png"));
	assert_eq!(negotiator.process("*/*, IMAGE/WEBP"), Ok("image/webp"));
	assert_eq!(
		negotiator.process("image/jpeg"),
		Err(NegotiateError::NotAcceptable)
	);
	assert!(matches!(
		negotiator.process("i like waffles."),
		Err(NegotiateError::Parse { .. })
	));
}

#[test]
fn test_zero_quality_type_is_excluded_from_its_own_wildcard() {
	let negotiator = MediaNegotiator::make(["image/png", "image/webp"]);

	// image/* would cover image/png, but the explicit q=0 entry blocks it.
	assert_eq!(negotiator.process("image/*, image/png; q=0"), Ok("image/webp"));
}

#[test]
fn test_bare_token_means_any_subtype() {
	let negotiator = MediaNegotiator::make(["text/html", "image/png"]);
	assert_eq!(negotiator.process("image"), Ok("image/png"));
}

#[test]
fn test_parse_round_trips_to_canonical_form() {
	for raw in ["*/*", "text/*", "Text/HTML", "text/html; level=1; charset=UTF-8"] {
		let media = MediaType::parse(raw).unwrap();
		let reparsed = MediaType::parse(&media.to_string()).unwrap();

		assert_eq!(media, reparsed);
		assert_eq!(media.specificity(), reparsed.specificity());
	}
}
