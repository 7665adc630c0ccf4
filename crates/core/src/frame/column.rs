// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use relate_type::{OrderedF64, Type, Value};
use serde::{Deserialize, Serialize};

/// Typed column storage: one value vector per type plus a validity mask.
///
/// An invalid entry reads back as [`Value::Undefined`]. The `Undefined`
/// container holds rows that carry no type information at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
	// value, is_valid
	Bool(Vec<bool>, Vec<bool>),
	Float8(Vec<f64>, Vec<bool>),
	Int4(Vec<i32>, Vec<bool>),
	Int8(Vec<i64>, Vec<bool>),
	Utf8(Vec<String>, Vec<bool>),

	// special case: all undefined
	Undefined(usize),
}

impl ColumnValues {
	pub fn with_capacity(r#type: Type, capacity: usize) -> Self {
		match r#type {
			Type::Undefined => ColumnValues::Undefined(0),
			Type::Boolean => ColumnValues::Bool(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Float8 => ColumnValues::Float8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Int4 => ColumnValues::Int4(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Int8 => ColumnValues::Int8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
			Type::Utf8 => ColumnValues::Utf8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnValues::Bool(values, _) => values.len(),
			ColumnValues::Float8(values, _) => values.len(),
			ColumnValues::Int4(values, _) => values.len(),
			ColumnValues::Int8(values, _) => values.len(),
			ColumnValues::Utf8(values, _) => values.len(),
			ColumnValues::Undefined(len) => *len,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The element type of this container; `Undefined` means the type
	/// could not be determined from the data.
	pub fn get_type(&self) -> Type {
		match self {
			ColumnValues::Bool(_, _) => Type::Boolean,
			ColumnValues::Float8(_, _) => Type::Float8,
			ColumnValues::Int4(_, _) => Type::Int4,
			ColumnValues::Int8(_, _) => Type::Int8,
			ColumnValues::Utf8(_, _) => Type::Utf8,
			ColumnValues::Undefined(_) => Type::Undefined,
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnValues::Bool(_, valid) => valid[index],
			ColumnValues::Float8(_, valid) => valid[index],
			ColumnValues::Int4(_, valid) => valid[index],
			ColumnValues::Int8(_, valid) => valid[index],
			ColumnValues::Utf8(_, valid) => valid[index],
			ColumnValues::Undefined(_) => false,
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnValues::Bool(values, valid) => {
				if valid[index] {
					Value::Boolean(values[index])
				} else {
					Value::Undefined
				}
			}
			ColumnValues::Float8(values, valid) => {
				if valid[index] {
					Value::Float8(OrderedF64::from(values[index]))
				} else {
					Value::Undefined
				}
			}
			ColumnValues::Int4(values, valid) => {
				if valid[index] {
					Value::Int4(values[index])
				} else {
					Value::Undefined
				}
			}
			ColumnValues::Int8(values, valid) => {
				if valid[index] {
					Value::Int8(values[index])
				} else {
					Value::Undefined
				}
			}
			ColumnValues::Utf8(values, valid) => {
				if valid[index] {
					Value::Utf8(values[index].clone())
				} else {
					Value::Undefined
				}
			}
			ColumnValues::Undefined(_) => Value::Undefined,
		}
	}

	/// Push a value into this container. The value must either match the
	/// container type or be `Undefined`, which pushes an invalid entry.
	pub fn push_value(&mut self, value: Value) {
		match (&mut *self, value) {
			(ColumnValues::Bool(values, valid), Value::Boolean(v)) => {
				values.push(v);
				valid.push(true);
			}
			(ColumnValues::Float8(values, valid), Value::Float8(v)) => {
				values.push(v.value());
				valid.push(true);
			}
			(ColumnValues::Int4(values, valid), Value::Int4(v)) => {
				values.push(v);
				valid.push(true);
			}
			(ColumnValues::Int8(values, valid), Value::Int8(v)) => {
				values.push(v);
				valid.push(true);
			}
			(ColumnValues::Utf8(values, valid), Value::Utf8(v)) => {
				values.push(v);
				valid.push(true);
			}
			(ColumnValues::Bool(values, valid), Value::Undefined) => {
				values.push(false);
				valid.push(false);
			}
			(ColumnValues::Float8(values, valid), Value::Undefined) => {
				values.push(0.0);
				valid.push(false);
			}
			(ColumnValues::Int4(values, valid), Value::Undefined) => {
				values.push(0);
				valid.push(false);
			}
			(ColumnValues::Int8(values, valid), Value::Undefined) => {
				values.push(0);
				valid.push(false);
			}
			(ColumnValues::Utf8(values, valid), Value::Undefined) => {
				values.push(String::new());
				valid.push(false);
			}
			(ColumnValues::Undefined(len), Value::Undefined) => {
				*len += 1;
			}
			// Promote Undefined → typed once the first defined value arrives
			(ColumnValues::Undefined(len), value) => {
				let mut promoted = ColumnValues::with_capacity(value.get_type(), *len + 1);
				for _ in 0..*len {
					promoted.push_value(Value::Undefined);
				}
				promoted.push_value(value);
				*self = promoted;
			}
			(container, value) => {
				panic!("value {} does not fit column of type {}", value, container.get_type())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let mut data = ColumnValues::with_capacity(Type::Int8, 4);
		data.push_value(Value::Int8(1));
		data.push_value(Value::Undefined);
		data.push_value(Value::Int8(3));

		assert_eq!(data.len(), 3);
		assert_eq!(data.get_value(0), Value::Int8(1));
		assert_eq!(data.get_value(1), Value::Undefined);
		assert_eq!(data.get_value(2), Value::Int8(3));
		assert!(data.is_defined(0));
		assert!(!data.is_defined(1));
	}

	#[test]
	fn test_undefined_container() {
		let mut data = ColumnValues::Undefined(0);
		data.push_value(Value::Undefined);
		data.push_value(Value::Undefined);

		assert_eq!(data.len(), 2);
		assert_eq!(data.get_type(), Type::Undefined);
		assert_eq!(data.get_value(1), Value::Undefined);
	}

	#[test]
	#[should_panic(expected = "does not fit column")]
	fn test_type_mismatch_panics() {
		let mut data = ColumnValues::with_capacity(Type::Int8, 1);
		data.push_value(Value::Boolean(true));
	}

	#[test]
	fn test_undefined_promotes_on_first_defined_value() {
		let mut data = ColumnValues::Undefined(2);
		data.push_value(Value::Int4(7));

		assert_eq!(data.get_type(), Type::Int4);
		assert_eq!(data.len(), 3);
		assert_eq!(data.get_value(0), Value::Undefined);
		assert_eq!(data.get_value(2), Value::Int4(7));
	}

	#[test]
	fn test_get_type() {
		assert_eq!(ColumnValues::with_capacity(Type::Utf8, 0).get_type(), Type::Utf8);
		assert_eq!(ColumnValues::Undefined(3).get_type(), Type::Undefined);
	}
}
