// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use relate_type::Value;
use serde::{Deserialize, Serialize};
use tracing::instrument;

mod execute;
mod predicate;
mod promote;
mod resolve;

pub use predicate::{JoinPredicate, NormalizedPredicate, PredicateTerm, normalize};
pub use resolve::RIGHT_SUFFIX;

use crate::frame::{Column, ColumnValues, Frame, Schema};

/// The row-matching and output-shape policy of a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
	Inner,
	Left,
	Right,
	FullOuter,
	Semi,
	Anti,
	Positional,
}

impl Display for JoinKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinKind::Inner => write!(f, "inner"),
			JoinKind::Left => write!(f, "left"),
			JoinKind::Right => write!(f, "right"),
			JoinKind::FullOuter => write!(f, "full_outer"),
			JoinKind::Semi => write!(f, "semi"),
			JoinKind::Anti => write!(f, "anti"),
			JoinKind::Positional => write!(f, "positional"),
		}
	}
}

/// The tagged output of a join: result rows plus the final schema, with
/// optional-side columns promoted to nullable.
///
/// The schema's nullability is a possibility flag; a particular run may
/// produce no undefined value in a promoted column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinResult {
	pub frame: Frame,
	pub schema: Schema,
}

impl Deref for JoinResult {
	type Target = Frame;

	fn deref(&self) -> &Self::Target {
		&self.frame
	}
}

/// Join two relations.
///
/// The condition is normalized first, the output schema is resolved from
/// both input schemas before any row is processed, then rows are matched
/// and the optional-side columns of the final schema are promoted to
/// nullable. Inputs are never mutated; the result is fresh and owned by
/// the caller. No output row order is guaranteed.
#[instrument(name = "join", level = "trace", skip_all, fields(kind = %kind))]
pub fn join(
	left: &Frame,
	right: &Frame,
	predicate: impl Into<JoinPredicate>,
	kind: JoinKind,
) -> crate::Result<JoinResult> {
	let predicate = predicate.into();
	let normalized = normalize(&predicate, left, right)?;
	let schema = resolve::resolve(left, right, kind)?;
	let rows = execute::execute(left, right, kind, &normalized)?;
	let schema = promote::promote(schema, kind, left.len());
	let frame = assemble(&schema, rows);

	Ok(JoinResult {
		frame,
		schema,
	})
}

/// Materialize raw result rows into typed columns. Column types come from
/// the resolved schema, so all-undefined output columns keep the type of
/// their source column.
fn assemble(schema: &Schema, rows: Vec<Vec<Value>>) -> Frame {
	let mut columns: Vec<Column> = schema
		.iter()
		.map(|column| Column::new(column.name.clone(), ColumnValues::with_capacity(column.r#type, rows.len())))
		.collect();

	for row in rows {
		debug_assert_eq!(row.len(), columns.len());
		for (i, value) in row.into_iter().enumerate() {
			columns[i].data.push_value(value);
		}
	}

	Frame::new(columns)
}

#[cfg(test)]
mod tests {
	use super::*;
	use relate_type::Type;

	#[test]
	fn test_join_end_to_end() {
		let left = Frame::new(vec![Column::int8("id", [1, 2]), Column::int8("a", [10, 20])]);
		let right = Frame::new(vec![Column::int8("id", [2, 3]), Column::int8("b", [99, 77])]);

		let result = join(&left, &right, "id", JoinKind::Inner).unwrap();
		assert_eq!(result.shape(), (1, 4));
		assert_eq!(result.get_row(0), vec![Value::Int8(2), Value::Int8(20), Value::Int8(2), Value::Int8(99)]);
	}

	#[test]
	fn test_inputs_are_not_mutated() {
		let left = Frame::new(vec![Column::int8("id", [1, 2])]);
		let right = Frame::new(vec![Column::int8("id", [2, 3])]);
		let left_before = left.clone();
		let right_before = right.clone();

		join(&left, &right, "id", JoinKind::FullOuter).unwrap();

		assert_eq!(left, left_before);
		assert_eq!(right, right_before);
	}

	#[test]
	fn test_all_null_output_column_stays_typed() {
		let left = Frame::new(vec![Column::int8("id", [1])]);
		let right = Frame::new(vec![Column::int8("id", [2]), Column::utf8("name", ["x"])]);

		// no key ever matches, so both right columns are entirely null
		let result = join(&left, &right, "id", JoinKind::Left).unwrap();
		assert_eq!(result.column("name").unwrap().get_type(), Type::Utf8);
		assert_eq!(result.column("name").unwrap().data.get_value(0), Value::Undefined);
	}

	#[test]
	fn test_join_kind_display() {
		assert_eq!(JoinKind::FullOuter.to_string(), "full_outer");
		assert_eq!(JoinKind::Positional.to_string(), "positional");
	}
}
