// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::{Diagnostic, DiagnosticColumn};
use crate::value::Type;

pub fn unresolved_column(side: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "JOIN_001".to_string(),
		statement: None,
		message: format!("column '{}' not found in {} relation", column, side),
		column: None,
		label: Some("this column does not exist in the referenced relation".to_string()),
		help: Some("check for typos or ensure the column is defined on the correct side".to_string()),
		notes: vec![],
	}
}

pub fn type_inference(column: &str) -> Diagnostic {
	Diagnostic {
		code: "JOIN_002".to_string(),
		statement: None,
		message: format!("cannot infer the element type of column '{}'", column),
		column: Some(DiagnosticColumn {
			name: column.to_string(),
			r#type: Type::Undefined,
		}),
		label: Some("every value in this column is undefined".to_string()),
		help: Some("declare an explicit type for the column or provide at least one defined value".to_string()),
		notes: vec!["type inference runs before join execution; no rows were processed".to_string()],
	}
}

pub fn positional_length_mismatch(left_rows: usize, right_rows: usize) -> Diagnostic {
	Diagnostic {
		code: "JOIN_003".to_string(),
		statement: None,
		message: format!("positional join requires equal row counts, got {} and {}", left_rows, right_rows),
		column: None,
		label: Some("the two relations differ in length".to_string()),
		help: Some("truncate or pad the inputs explicitly before joining by position".to_string()),
		notes: vec!["positional joins never truncate or pad implicitly".to_string()],
	}
}

pub fn ambiguous_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "JOIN_004".to_string(),
		statement: None,
		message: format!("output column name '{}' is ambiguous after renaming", name),
		column: None,
		label: Some("two output columns would share this name".to_string()),
		help: Some("rename one of the conflicting input columns before joining".to_string()),
		notes: vec![],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_are_stable() {
		assert_eq!(unresolved_column("left", "a").code, "JOIN_001");
		assert_eq!(type_inference("a").code, "JOIN_002");
		assert_eq!(positional_length_mismatch(1, 2).code, "JOIN_003");
		assert_eq!(ambiguous_column("a").code, "JOIN_004");
	}

	#[test]
	fn test_messages_name_the_offender() {
		assert!(unresolved_column("right", "missing").message.contains("missing"));
		assert!(unresolved_column("right", "missing").message.contains("right"));
		assert!(positional_length_mismatch(3, 5).message.contains("3"));
	}
}
