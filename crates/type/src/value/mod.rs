// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod ordered_f64;
mod r#type;

pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A relational value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn float8(value: f64) -> Self {
		Value::Float8(OrderedF64::from(value))
	}

	pub fn utf8(value: impl Into<String>) -> Self {
		Value::Utf8(value.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The type this value carries; `Undefined` carries none.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float8(_) => Type::Float8,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => write!(f, "undefined"),
			Value::Boolean(v) => write!(f, "{}", v),
			Value::Float8(v) => write!(f, "{}", v),
			Value::Int4(v) => write!(f, "{}", v),
			Value::Int8(v) => write!(f, "{}", v),
			Value::Utf8(v) => write!(f, "{}", v),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::float8(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(Value::Undefined.get_type(), Type::Undefined);
		assert_eq!(Value::Boolean(true).get_type(), Type::Boolean);
		assert_eq!(Value::float8(1.5).get_type(), Type::Float8);
		assert_eq!(Value::Int4(1).get_type(), Type::Int4);
		assert_eq!(Value::Int8(1).get_type(), Type::Int8);
		assert_eq!(Value::utf8("a").get_type(), Type::Utf8);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Undefined.to_string(), "undefined");
		assert_eq!(Value::Int8(42).to_string(), "42");
		assert_eq!(Value::utf8("abc").to_string(), "abc");
	}
}
