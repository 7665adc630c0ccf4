// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use relate_type::{diagnostic::join::ambiguous_column, return_error};

use super::JoinKind;
use crate::frame::{Frame, Schema, SchemaColumn};

/// Suffix appended to right-side columns whose name collides with an
/// earlier output column.
pub const RIGHT_SUFFIX: &str = "_right";

/// Compute the output schema before nullability promotion.
///
/// Left columns keep their names and order; right columns follow, renamed
/// with [`RIGHT_SUFFIX`] on collision (counter-suffixed when the renamed
/// name still collides). The rename is unconditional: join key columns
/// with matching names are never coalesced. `semi` and `anti` return the
/// left schema verbatim.
pub(crate) fn resolve(left: &Frame, right: &Frame, kind: JoinKind) -> crate::Result<Schema> {
	let left_schema = left.schema()?;
	let right_schema = right.schema()?;

	if matches!(kind, JoinKind::Semi | JoinKind::Anti) {
		return Ok(left_schema);
	}

	let mut columns = left_schema.columns;

	for column in right_schema.columns {
		let name = if columns.iter().any(|c| c.name == column.name) {
			let renamed = format!("{}{}", column.name, RIGHT_SUFFIX);

			// Check for secondary conflict (renamed name already exists)
			let mut final_name = renamed.clone();
			let mut counter = 2;
			while columns.iter().any(|c| c.name == final_name) {
				final_name = format!("{}_{}", renamed, counter);
				counter += 1;
			}
			final_name
		} else {
			column.name
		};

		columns.push(SchemaColumn {
			name,
			r#type: column.r#type,
			nullable: column.nullable,
		});
	}

	// Renaming is deterministic, so this only fires if the scheme above
	// regresses; it must surface as an error, not a corrupt schema.
	for (i, column) in columns.iter().enumerate() {
		if columns[..i].iter().any(|c| c.name == column.name) {
			return_error!(ambiguous_column(&column.name));
		}
	}

	Ok(Schema::new(columns))
}
