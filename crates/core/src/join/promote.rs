// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::JoinKind;
use crate::frame::Schema;

/// Mark optional-side columns nullable: a column derived from a side that
/// can go unmatched may be absent in the output even when its source never
/// holds undefined values. The flag is a schema-level possibility, not a
/// guarantee that undefined values occur in a given run.
pub(crate) fn promote(mut schema: Schema, kind: JoinKind, left_width: usize) -> Schema {
	match kind {
		JoinKind::Left => {
			for column in schema.columns.iter_mut().skip(left_width) {
				column.nullable = true;
			}
		}
		JoinKind::Right => {
			for column in schema.columns.iter_mut().take(left_width) {
				column.nullable = true;
			}
		}
		JoinKind::FullOuter => {
			for column in schema.columns.iter_mut() {
				column.nullable = true;
			}
		}
		JoinKind::Inner | JoinKind::Semi | JoinKind::Anti | JoinKind::Positional => {}
	}
	schema
}

#[cfg(test)]
mod tests {
	use relate_type::Type;

	use super::*;
	use crate::frame::SchemaColumn;

	fn schema() -> Schema {
		Schema::new(vec![
			SchemaColumn {
				name: "id".to_string(),
				r#type: Type::Int8,
				nullable: false,
			},
			SchemaColumn {
				name: "a".to_string(),
				r#type: Type::Int8,
				nullable: false,
			},
			SchemaColumn {
				name: "b".to_string(),
				r#type: Type::Utf8,
				nullable: false,
			},
		])
	}

	#[test]
	fn test_left_promotes_right_side() {
		let promoted = promote(schema(), JoinKind::Left, 2);
		assert_eq!(promoted.iter().map(|c| c.nullable).collect::<Vec<_>>(), vec![false, false, true]);
	}

	#[test]
	fn test_right_promotes_left_side() {
		let promoted = promote(schema(), JoinKind::Right, 2);
		assert_eq!(promoted.iter().map(|c| c.nullable).collect::<Vec<_>>(), vec![true, true, false]);
	}

	#[test]
	fn test_full_outer_promotes_both() {
		let promoted = promote(schema(), JoinKind::FullOuter, 2);
		assert!(promoted.iter().all(|c| c.nullable));
	}

	#[test]
	fn test_other_kinds_inherit_nullability() {
		for kind in [JoinKind::Inner, JoinKind::Semi, JoinKind::Anti, JoinKind::Positional] {
			let promoted = promote(schema(), kind, 2);
			assert!(promoted.iter().all(|c| !c.nullable));
		}
	}
}
