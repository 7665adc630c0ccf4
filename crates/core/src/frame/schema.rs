// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::ops::{Deref, Index};

use relate_type::Type;
use serde::{Deserialize, Serialize};

/// Ordered column metadata of a [`Frame`](crate::Frame): name, element
/// type and whether the column may hold undefined values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	pub columns: Vec<SchemaColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaColumn {
	pub name: String,
	pub r#type: Type,
	pub nullable: bool,
}

impl Deref for Schema {
	type Target = [SchemaColumn];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Schema {
	type Output = SchemaColumn;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Schema {
	pub fn new(columns: Vec<SchemaColumn>) -> Self {
		for (i, column) in columns.iter().enumerate() {
			assert!(
				!columns[..i].iter().any(|c| c.name == column.name),
				"duplicate column name '{}' in schema",
				column.name
			);
		}

		Self {
			columns,
		}
	}

	pub fn column(&self, name: &str) -> Option<&SchemaColumn> {
		self.iter().find(|c| c.name == name)
	}

	pub fn names(&self) -> Vec<&str> {
		self.iter().map(|c| c.name.as_str()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_by_name() {
		let schema = Schema::new(vec![
			SchemaColumn {
				name: "id".to_string(),
				r#type: Type::Int8,
				nullable: false,
			},
			SchemaColumn {
				name: "name".to_string(),
				r#type: Type::Utf8,
				nullable: true,
			},
		]);

		assert_eq!(schema.column("name").unwrap().r#type, Type::Utf8);
		assert!(schema.column("missing").is_none());
		assert_eq!(schema.names(), vec!["id", "name"]);
	}

	#[test]
	#[should_panic(expected = "duplicate column name")]
	fn test_duplicate_names_rejected() {
		Schema::new(vec![
			SchemaColumn {
				name: "id".to_string(),
				r#type: Type::Int8,
				nullable: false,
			},
			SchemaColumn {
				name: "id".to_string(),
				r#type: Type::Int4,
				nullable: false,
			},
		]);
	}
}
