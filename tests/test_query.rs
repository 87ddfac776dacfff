use negotiate::{NegotiateError, Query, Simple, Value};

#[test]
fn test_blank_query_accepts_anything() {
	let query: Query<Simple> = Query::parse("").unwrap();

	assert_eq!(query.len(), 1);
	assert!(Simple::parse("anything").unwrap().satisfies(query.entries()[0].value()));
	assert_eq!(query.entries()[0].quality(), 1.0);
}

#[test]
fn test_missing_weight_defaults_to_one() {
	let query: Query<Simple> = Query::parse("gzip, br;q=0.8").unwrap();

	assert_eq!(query.entries()[0].value().to_string(), "gzip");
	assert_eq!(query.entries()[0].quality(), 1.0);
	assert_eq!(query.entries()[1].quality(), 0.8);
}

#[test]
fn test_extension_parameters_are_discarded() {
	let query: Query<Simple> = Query::parse("gzip;q=0.5;foo=bar;baz").unwrap();

	assert_eq!(query.len(), 1);
	assert_eq!(query.entries()[0].quality(), 0.5);
	assert_eq!(query.to_string(), "gzip; q=0.5");
}

#[test]
fn test_precedence_sort_is_stable_for_equal_entries() {
	let query: Query<Simple> = Query::parse("one, two, three, four").unwrap();

	// All specificity 1, all quality 1: header order survives the sort.
	assert_eq!(query.to_string(), "one, two, three, four");
}

#[test]
fn test_precedence_sorts_specificity_before_quality() {
	let query: Query<Simple> = Query::parse("*, down;q=0.2, up").unwrap();

	// Concrete tokens outrank the wildcard regardless of its weight, and
	// equal-specificity entries order by descending quality.
	assert_eq!(query.to_string(), "up, down; q=0.2, *");
}

#[test]
fn test_single_malformed_item_fails_the_whole_query() {
	let err = Query::<Simple>::parse("gzip, br, not valid!").unwrap_err();
	assert_eq!(
		err,
		NegotiateError::Parse {
			raw: "not valid!".to_string(),
		}
	);
}

#[test]
fn test_weight_grammar_is_strict() {
	// Weights outside the RFC grammar are not weights; they stay in the
	// item text, which the simple grammar then rejects.
	for raw in ["gzip;q=2", "gzip;q=1.5", "gzip;q=0.1234", "gzip;q=-1"] {
		assert!(Query::<Simple>::parse(raw).is_err(), "query {raw:?}");
	}
}

#[test]
fn test_display_round_trips() {
	let query: Query<Simple> = Query::parse("a;q=0.25, b, *;q=0.5").unwrap();
	let rendered = query.to_string();

	assert_eq!(rendered, "b, a; q=0.25, *; q=0.5");

	let reparsed: Query<Simple> = Query::parse(&rendered).unwrap();
	assert_eq!(reparsed.to_string(), rendered);
}
