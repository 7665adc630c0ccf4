// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use indexmap::IndexMap;
use relate_type::{Value, diagnostic::join::positional_length_mismatch, return_error};
use tracing::instrument;

use super::{JoinKind, NormalizedPredicate};
use crate::{
	expression::{Expression, JoinSide, RowRef, evaluate},
	frame::Frame,
};

/// Hash index over one relation: equality-key tuple to row indices.
type HashIndex = IndexMap<Vec<Value>, Vec<usize>>;

/// How the normalized predicate matches candidate row pairs.
enum MatchPlan<'a> {
	/// `Const(false)`: no pair ever matches.
	Never,
	/// Hash-match on the key tuple, then filter candidates through the
	/// residual. Empty keys put every row in one bucket, which makes
	/// `Const(true)` a plain cross product.
	Keyed {
		keys: &'a [(Expression, Expression)],
		residual: Option<&'a Expression>,
	},
}

impl<'a> MatchPlan<'a> {
	fn new(predicate: &'a NormalizedPredicate) -> Self {
		match predicate {
			NormalizedPredicate::Const(false) => MatchPlan::Never,
			NormalizedPredicate::Const(true) => MatchPlan::Keyed {
				keys: &[],
				residual: None,
			},
			NormalizedPredicate::Keyed {
				keys,
				residual,
			} => MatchPlan::Keyed {
				keys,
				residual: residual.as_ref(),
			},
		}
	}
}

/// Produce the raw output rows for a join. Each row is the left row's
/// values followed by the right row's values (left-only for `semi` and
/// `anti`); unmatched optional-side cells are undefined. No output order
/// is guaranteed.
#[instrument(name = "join::execute", level = "trace", skip_all)]
pub(crate) fn execute(
	left: &Frame,
	right: &Frame,
	kind: JoinKind,
	predicate: &NormalizedPredicate,
) -> crate::Result<Vec<Vec<Value>>> {
	// Positional pairing ignores predicate content entirely.
	if kind == JoinKind::Positional {
		return positional(left, right);
	}

	let plan = MatchPlan::new(predicate);

	match kind {
		JoinKind::Inner | JoinKind::Left | JoinKind::Semi | JoinKind::Anti => {
			probe_left(left, right, kind, &plan)
		}
		JoinKind::Right => probe_right(left, right, &plan),
		JoinKind::FullOuter => full_outer(left, right, &plan),
		JoinKind::Positional => unreachable!(),
	}
}

/// Evaluate the key tuple of one row. `None` means the row can never
/// match: a key containing an undefined value joins with nothing.
fn row_key(row: RowRef<'_>, keys: &[(Expression, Expression)], side: JoinSide) -> Option<Vec<Value>> {
	let mut key = Vec::with_capacity(keys.len());
	for (left_expr, right_expr) in keys {
		let value = match side {
			JoinSide::Left => evaluate(left_expr, Some(row), None),
			JoinSide::Right => evaluate(right_expr, None, Some(row)),
		};
		if value.is_undefined() {
			return None;
		}
		key.push(canonical(value));
	}
	Some(key)
}

// Values that compare equal must hash to the same bucket: Int4 widens to
// Int8, and a Float8 holding an exact integer collapses to Int8 so integer
// and float key columns can match.
fn canonical(value: Value) -> Value {
	match value {
		Value::Int4(v) => Value::Int8(v as i64),
		Value::Float8(v) => {
			let f = v.value();
			if f.is_finite() && f == f.trunc() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
				Value::Int8(f as i64)
			} else {
				Value::Float8(v)
			}
		}
		value => value,
	}
}

fn build_index(frame: &Frame, keys: &[(Expression, Expression)], side: JoinSide) -> HashIndex {
	let mut index = HashIndex::new();
	for i in 0..frame.row_count() {
		let row = RowRef {
			frame,
			index: i,
		};
		if let Some(key) = row_key(row, keys, side) {
			index.entry(key).or_insert_with(Vec::new).push(i);
		}
	}
	index
}

fn residual_ok(residual: Option<&Expression>, left: RowRef<'_>, right: RowRef<'_>) -> bool {
	residual.is_none_or(|expr| evaluate(expr, Some(left), Some(right)) == Value::Boolean(true))
}

fn combined(left: &Frame, i: usize, right: &Frame, j: usize) -> Vec<Value> {
	let mut row = left.get_row(i);
	row.extend(right.get_row(j));
	row
}

fn null_extended_left(left: &Frame, i: usize, right_width: usize) -> Vec<Value> {
	let mut row = left.get_row(i);
	row.extend(std::iter::repeat_n(Value::Undefined, right_width));
	row
}

fn null_extended_right(left_width: usize, right: &Frame, j: usize) -> Vec<Value> {
	let mut row = vec![Value::Undefined; left_width];
	row.extend(right.get_row(j));
	row
}

/// Build over the right relation, probe with the left. Covers `inner` and
/// `left` (pair-emitting) as well as `semi` and `anti` (membership only,
/// left schema output).
fn probe_left(left: &Frame, right: &Frame, kind: JoinKind, plan: &MatchPlan<'_>) -> crate::Result<Vec<Vec<Value>>> {
	let right_width = right.len();
	let emits_pairs = matches!(kind, JoinKind::Inner | JoinKind::Left);

	let index = match plan {
		MatchPlan::Never => HashIndex::new(),
		MatchPlan::Keyed {
			keys,
			..
		} => build_index(right, keys, JoinSide::Right),
	};

	let mut rows = Vec::new();

	for i in 0..left.row_count() {
		let probe = RowRef {
			frame: left,
			index: i,
		};

		let mut matched = false;
		if let MatchPlan::Keyed {
			keys,
			residual,
		} = plan
		{
			if let Some(key) = row_key(probe, keys, JoinSide::Left) {
				if let Some(candidates) = index.get(&key) {
					for &j in candidates {
						let build = RowRef {
							frame: right,
							index: j,
						};
						if !residual_ok(*residual, probe, build) {
							continue;
						}
						matched = true;
						if !emits_pairs {
							// membership decided, stop
							// scanning candidates
							break;
						}
						rows.push(combined(left, i, right, j));
					}
				}
			}
		}

		match kind {
			JoinKind::Left if !matched => rows.push(null_extended_left(left, i, right_width)),
			JoinKind::Semi if matched => rows.push(left.get_row(i)),
			JoinKind::Anti if !matched => rows.push(left.get_row(i)),
			_ => {}
		}
	}

	Ok(rows)
}

/// Symmetric to the `left` path: build over the left relation, probe with
/// the right. Output rows still carry left values first.
fn probe_right(left: &Frame, right: &Frame, plan: &MatchPlan<'_>) -> crate::Result<Vec<Vec<Value>>> {
	let left_width = left.len();

	let index = match plan {
		MatchPlan::Never => HashIndex::new(),
		MatchPlan::Keyed {
			keys,
			..
		} => build_index(left, keys, JoinSide::Left),
	};

	let mut rows = Vec::new();

	for j in 0..right.row_count() {
		let probe = RowRef {
			frame: right,
			index: j,
		};

		let mut matched = false;
		if let MatchPlan::Keyed {
			keys,
			residual,
		} = plan
		{
			if let Some(key) = row_key(probe, keys, JoinSide::Right) {
				if let Some(candidates) = index.get(&key) {
					for &i in candidates {
						let build = RowRef {
							frame: left,
							index: i,
						};
						if !residual_ok(*residual, build, probe) {
							continue;
						}
						matched = true;
						rows.push(combined(left, i, right, j));
					}
				}
			}
		}

		if !matched {
			rows.push(null_extended_right(left_width, right, j));
		}
	}

	Ok(rows)
}

/// Left-outer pass that records which build-side rows matched, then one
/// null-extended row per unmatched right row. Matched pairs appear exactly
/// once.
fn full_outer(left: &Frame, right: &Frame, plan: &MatchPlan<'_>) -> crate::Result<Vec<Vec<Value>>> {
	let left_width = left.len();
	let right_width = right.len();

	let index = match plan {
		MatchPlan::Never => HashIndex::new(),
		MatchPlan::Keyed {
			keys,
			..
		} => build_index(right, keys, JoinSide::Right),
	};

	let mut right_matched = vec![false; right.row_count()];
	let mut rows = Vec::new();

	for i in 0..left.row_count() {
		let probe = RowRef {
			frame: left,
			index: i,
		};

		let mut matched = false;
		if let MatchPlan::Keyed {
			keys,
			residual,
		} = plan
		{
			if let Some(key) = row_key(probe, keys, JoinSide::Left) {
				if let Some(candidates) = index.get(&key) {
					for &j in candidates {
						let build = RowRef {
							frame: right,
							index: j,
						};
						if !residual_ok(*residual, probe, build) {
							continue;
						}
						matched = true;
						right_matched[j] = true;
						rows.push(combined(left, i, right, j));
					}
				}
			}
		}

		if !matched {
			rows.push(null_extended_left(left, i, right_width));
		}
	}

	for (j, matched) in right_matched.iter().enumerate() {
		if !matched {
			rows.push(null_extended_right(left_width, right, j));
		}
	}

	Ok(rows)
}

fn positional(left: &Frame, right: &Frame) -> crate::Result<Vec<Vec<Value>>> {
	let left_rows = left.row_count();
	let right_rows = right.row_count();

	if left_rows != right_rows {
		return_error!(positional_length_mismatch(left_rows, right_rows));
	}

	Ok((0..left_rows).map(|i| combined(left, i, right, i)).collect())
}
