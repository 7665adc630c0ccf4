// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{self, Display, Formatter},
	ops::{Deref, Index},
};

use relate_type::{Type, Value, return_error};
use serde::{Deserialize, Serialize};

mod column;
mod schema;

pub use column::ColumnValues;
pub use schema::{Schema, SchemaColumn};

/// A named, typed column of a [`Frame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnValues,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnValues) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn bool(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
		let values: Vec<bool> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnValues::Bool(values, valid))
	}

	pub fn float8(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
		let values: Vec<f64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnValues::Float8(values, valid))
	}

	pub fn int4(name: impl Into<String>, values: impl IntoIterator<Item = i32>) -> Self {
		let values: Vec<i32> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnValues::Int4(values, valid))
	}

	pub fn int8(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
		let values: Vec<i64> = values.into_iter().collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnValues::Int8(values, valid))
	}

	pub fn utf8<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
		let values: Vec<String> = values.into_iter().map(Into::into).collect();
		let valid = vec![true; values.len()];
		Self::new(name, ColumnValues::Utf8(values, valid))
	}

	pub fn int8_with_validity(
		name: impl Into<String>,
		values: impl IntoIterator<Item = i64>,
		valid: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(name, ColumnValues::Int8(values.into_iter().collect(), valid.into_iter().collect()))
	}

	pub fn undefined(name: impl Into<String>, len: usize) -> Self {
		Self::new(name, ColumnValues::Undefined(len))
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	/// Whether any entry of this column is undefined.
	pub fn has_undefined(&self) -> bool {
		(0..self.data.len()).any(|i| !self.data.is_defined(i))
	}
}

/// An immutable relation: ordered, uniquely named, equally sized columns.
///
/// Joins never mutate their inputs; they produce a fresh `Frame`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub columns: Vec<Column>,
}

impl Deref for Frame {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Frame {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Frame {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.data.len());
		assert!(columns.iter().all(|c| c.data.len() == n), "all columns must have the same length");

		for (i, column) in columns.iter().enumerate() {
			assert!(
				!columns[..i].iter().any(|c| c.name == column.name),
				"duplicate column name '{}'",
				column.name
			);
		}

		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self {
			columns: Vec::new(),
		}
	}

	/// Build a frame by pushing rows into untyped containers; column types
	/// are taken from the first defined value of each column.
	pub fn from_rows(names: &[&str], rows: &[Vec<Value>]) -> Self {
		let mut columns: Vec<Column> =
			names.iter().map(|name| Column::new(name.to_string(), ColumnValues::Undefined(0))).collect();

		for row in rows {
			assert_eq!(row.len(), names.len(), "row length does not match column count");
			for (i, value) in row.iter().enumerate() {
				columns[i].data.push_value(value.clone());
			}
		}

		Frame::new(columns)
	}

	pub fn row_count(&self) -> usize {
		self.first().map_or(0, |c| c.data.len())
	}

	pub fn shape(&self) -> (usize, usize) {
		(self.row_count(), self.len())
	}

	pub fn is_empty(&self) -> bool {
		self.row_count() == 0
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.iter().find(|c| c.name == name)
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.iter().position(|c| c.name == name)
	}

	pub fn get_row(&self, index: usize) -> Vec<Value> {
		self.iter().map(|c| c.data.get_value(index)).collect()
	}

	/// Derive the schema of this frame, inferring each column's element
	/// type from its data. Fails when a column's type cannot be
	/// determined, i.e. every value in it is undefined.
	pub fn schema(&self) -> crate::Result<Schema> {
		let mut columns = Vec::with_capacity(self.len());

		for column in self.iter() {
			let r#type = column.get_type();
			if r#type == Type::Undefined {
				return_error!(relate_type::diagnostic::join::type_inference(&column.name));
			}
			columns.push(SchemaColumn {
				name: column.name.clone(),
				r#type,
				nullable: column.has_undefined(),
			});
		}

		Ok(Schema::new(columns))
	}
}

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::with_capacity(self.len());
		for col in &self.columns {
			let mut width = escape_control_chars(&col.name).chars().count();
			for i in 0..row_count {
				let rendered = escape_control_chars(&col.data.get_value(i).to_string());
				width = width.max(rendered.chars().count());
			}
			col_widths.push(width);
		}

		let separator = |f: &mut Formatter<'_>| -> fmt::Result {
			write!(f, "+")?;
			for width in &col_widths {
				write!(f, "{}+", "-".repeat(width + 2))?;
			}
			writeln!(f)
		};

		separator(f)?;
		write!(f, "|")?;
		for (col, width) in self.columns.iter().zip(&col_widths) {
			write!(f, " {:<width$} |", escape_control_chars(&col.name), width = width)?;
		}
		writeln!(f)?;
		separator(f)?;

		for i in 0..row_count {
			write!(f, "|")?;
			for (col, width) in self.columns.iter().zip(&col_widths) {
				let rendered = escape_control_chars(&col.data.get_value(i).to_string());
				write!(f, " {:<width$} |", rendered, width = width)?;
			}
			writeln!(f)?;
		}
		separator(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_checks_lengths_and_names() {
		let frame = Frame::new(vec![Column::int8("id", [1, 2]), Column::utf8("name", ["a", "b"])]);
		assert_eq!(frame.shape(), (2, 2));
		assert_eq!(frame.column("id").unwrap().get_type(), Type::Int8);
		assert_eq!(frame.column_index("name"), Some(1));
	}

	#[test]
	#[should_panic(expected = "duplicate column name")]
	fn test_duplicate_names_rejected() {
		Frame::new(vec![Column::int8("id", [1]), Column::int8("id", [2])]);
	}

	#[test]
	#[should_panic(expected = "same length")]
	fn test_mismatched_lengths_rejected() {
		Frame::new(vec![Column::int8("a", [1]), Column::int8("b", [1, 2])]);
	}

	#[test]
	fn test_get_row() {
		let frame = Frame::new(vec![Column::int8("id", [1, 2]), Column::utf8("name", ["a", "b"])]);
		assert_eq!(frame.get_row(1), vec![Value::Int8(2), Value::utf8("b")]);
	}

	#[test]
	fn test_from_rows() {
		let rows = vec![
			vec![Value::Int8(1), Value::Undefined],
			vec![Value::Int8(2), Value::utf8("x")],
		];
		let frame = Frame::from_rows(&["id", "name"], &rows);

		assert_eq!(frame.shape(), (2, 2));
		assert_eq!(frame.column("name").unwrap().get_type(), Type::Utf8);
		assert_eq!(frame.get_row(0), vec![Value::Int8(1), Value::Undefined]);
	}

	#[test]
	fn test_schema_inference() {
		let frame = Frame::new(vec![
			Column::int8("id", [1, 2]),
			Column::int8_with_validity("score", [10, 0], [true, false]),
		]);
		let schema = frame.schema().unwrap();

		assert_eq!(schema.len(), 2);
		assert_eq!(schema[0].name, "id");
		assert!(!schema[0].nullable);
		assert_eq!(schema[1].r#type, Type::Int8);
		assert!(schema[1].nullable);
	}

	#[test]
	fn test_schema_fails_for_untyped_column() {
		let frame = Frame::new(vec![Column::undefined("mystery", 2), Column::int8("id", [1, 2])]);
		let err = frame.schema().unwrap_err();
		assert_eq!(err.code(), "JOIN_002");
	}

	#[test]
	fn test_display_renders_table() {
		let frame = Frame::new(vec![Column::int8("id", [1]), Column::utf8("name", ["ada"])]);
		let out = frame.to_string();
		assert!(out.contains("| id | name |"));
		assert!(out.contains("| 1  | ada  |"));
	}
}
