//! Quality-weighted preference queries.
//!
//! A [`Query`] is the parsed form of one `Accept`-style header value: an
//! ordered list of [`QValue`] entries, sorted by precedence (descending
//! specificity, then descending quality, input order preserved among
//! equals).

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{NegotiateError, NegotiateResult, Value};

// Recognizes one comma-separated item: the item text (tolerating quoted
// parameter values across semicolons), then an optional `;q=<weight>` with
// the RFC weight grammar, then any extension parameters, which are
// discarded without validation.
static RE_ITEM: Lazy<Regex> = Lazy::new(|| {
	Regex::new(
		r#"^([^;]+?(?:;(?:[^;"]|"(?:[^"\\]|\\.)*")*)*?)(?:;\s*[qQ]=(1(?:\.0{0,3})?|0(?:\.[0-9]{0,3})?)\s*(?:;.*)?)?$"#,
	)
	.expect("invalid query item pattern")
});

/// A value with its associated quality weight.
#[derive(Debug, Clone)]
pub struct QValue<V> {
	value: V,
	quality: f64,
}

impl<V> QValue<V> {
	/// Pair a value with a quality weight.
	pub fn new(value: V, quality: f64) -> Self {
		QValue { value, quality }
	}

	/// The wrapped value.
	pub fn value(&self) -> &V {
		&self.value
	}

	/// The quality weight as given, unnormalized.
	pub fn quality(&self) -> f64 {
		self.quality
	}

	/// The quality weight normalized to the canonical `[0, 1]` range.
	///
	/// Weights of 1 or more (including `+inf`) map to 1; anything that is
	/// not a positive number (zero, negatives, NaN, `-inf`) maps to 0.
	pub fn clamped_quality(&self) -> f64 {
		if self.quality >= 1.0 {
			1.0
		} else if self.quality > 0.0 {
			self.quality
		} else {
			0.0
		}
	}
}

impl<V: fmt::Display> fmt::Display for QValue<V> {
	/// Renders the value, with a `; q=` suffix of at most three decimal
	/// digits when the normalized quality is below 1.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let quality = self.clamped_quality();

		if quality >= 1.0 {
			return self.value.fmt(f);
		}

		let mut digits = format!("{quality:.3}");
		while digits.ends_with('0') {
			digits.pop();
		}
		if digits.ends_with('.') {
			digits.pop();
		}

		write!(f, "{}; q={digits}", self.value)
	}
}

/// An ordered sequence of quality-weighted values, sorted by precedence.
#[derive(Debug, Clone)]
pub struct Query<V> {
	entries: Vec<QValue<V>>,
}

impl<V: Value> Query<V> {
	/// Parse a comma-separated preference header.
	///
	/// A blank query is treated as the single wildcard item `*`: an absent
	/// `Accept`-style header accepts anything. Items without a `q` weight
	/// default to 1; extension parameters after the weight are silently
	/// discarded. A single malformed item fails the whole query.
	///
	/// The comma split is naive with respect to quoted parameter values
	/// that contain literal commas; see `MediaType` for the quoting rules
	/// that do apply within one item.
	pub fn parse(raw: &str) -> NegotiateResult<Self> {
		let raw = if raw.trim().is_empty() { "*" } else { raw };
		let mut entries = Vec::new();

		for item in raw.split(',') {
			let caps = RE_ITEM
				.captures(item)
				.ok_or_else(|| NegotiateError::parse(item.trim()))?;

			let value = V::parse(caps[1].trim())?;
			let quality = caps
				.get(2)
				.and_then(|m| m.as_str().parse::<f64>().ok())
				.unwrap_or(1.0);

			entries.push(QValue::new(value, quality));
		}

		// Stable: entries of equal precedence keep their header order.
		entries.sort_by(|a, b| {
			b.value()
				.specificity()
				.cmp(&a.value().specificity())
				.then_with(|| {
					b.clamped_quality()
						.partial_cmp(&a.clamped_quality())
						.unwrap_or(Ordering::Equal)
				})
		});

		let query = Query { entries };
		tracing::trace!(query = %query, "parsed preference query");

		Ok(query)
	}

	/// The index of the first entry the candidate satisfies, provided that
	/// entry has a positive quality.
	///
	/// A zero-quality match is a hard block: it marks the candidate as
	/// explicitly not acceptable, and less specific entries are not
	/// consulted for it.
	pub fn find(&self, candidate: &V) -> Option<usize> {
		for (index, entry) in self.entries.iter().enumerate() {
			if candidate.satisfies(entry.value()) {
				if entry.clamped_quality() > 0.0 {
					return Some(index);
				}

				// q=0 means "not acceptable"
				break;
			}
		}

		None
	}

	/// The index of the best value in `choices`, or `None` if no choice
	/// satisfies the query.
	///
	/// "Best" is the choice whose matched entry carries the highest
	/// quality. Quality ties go to the entry with the higher precedence
	/// (lower index, since entries are precedence-sorted); remaining ties
	/// go to the choice declared first.
	pub fn choose(&self, choices: &[V]) -> Option<usize> {
		// (choice index, index of its matched entry)
		let mut best: Option<(usize, usize)> = None;

		for (choice_index, candidate) in choices.iter().enumerate() {
			let Some(entry_index) = self.find(candidate) else {
				continue;
			};

			let better = match best {
				None => true,
				Some((_, best_entry_index)) => {
					let quality = self.entries[entry_index].clamped_quality();
					let best_quality = self.entries[best_entry_index].clamped_quality();

					quality > best_quality
						|| (quality == best_quality && entry_index < best_entry_index)
				}
			};

			if better {
				best = Some((choice_index, entry_index));
			}
		}

		best.map(|(choice_index, _)| choice_index)
	}
}

impl<V> Query<V> {
	/// The parsed entries, in precedence order.
	pub fn entries(&self) -> &[QValue<V>] {
		&self.entries
	}

	/// The number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the query has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<V: fmt::Display> fmt::Display for Query<V> {
	/// Comma-separated entries in precedence order, with explicit weights
	/// for any quality below 1.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, entry) in self.entries.iter().enumerate() {
			if index != 0 {
				f.write_str(", ")?;
			}

			entry.fmt(f)?;
		}

		Ok(())
	}
}
