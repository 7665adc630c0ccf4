// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The element type of a column or value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// No type information available
	Undefined,
	Boolean,
	Float8,
	Int4,
	Int8,
	Utf8,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Float8 | Type::Int4 | Type::Int8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => write!(f, "UNDEFINED"),
			Type::Boolean => write!(f, "BOOLEAN"),
			Type::Float8 => write!(f, "FLOAT8"),
			Type::Int4 => write!(f, "INT4"),
			Type::Int8 => write!(f, "INT8"),
			Type::Utf8 => write!(f, "UTF8"),
		}
	}
}
