// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{self, Display, Formatter};

use relate_type::Value;
use serde::{Deserialize, Serialize};

mod evaluate;

pub(crate) use evaluate::{RowRef, evaluate};

/// Which input relation a column reference addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinSide {
	Left,
	Right,
}

impl Display for JoinSide {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			JoinSide::Left => write!(f, "left"),
			JoinSide::Right => write!(f, "right"),
		}
	}
}

/// A side-qualified column reference inside a join predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRef {
	pub side: JoinSide,
	pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
	Eq,
	NotEq,
	LessThan,
	LessThanEq,
	GreaterThan,
	GreaterThanEq,
}

impl Display for CompareOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			CompareOp::Eq => write!(f, "=="),
			CompareOp::NotEq => write!(f, "!="),
			CompareOp::LessThan => write!(f, "<"),
			CompareOp::LessThanEq => write!(f, "<="),
			CompareOp::GreaterThan => write!(f, ">"),
			CompareOp::GreaterThanEq => write!(f, ">="),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareExpression {
	pub op: CompareOp,
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotExpression {
	pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtractExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplyExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

/// A boolean or arithmetic expression over columns of the two join inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
	Constant(Value),

	Column(ColumnRef),

	Compare(CompareExpression),

	And(AndExpression),

	Or(OrExpression),

	Not(NotExpression),

	Add(AddExpression),

	Subtract(SubtractExpression),

	Multiply(MultiplyExpression),
}

impl Expression {
	pub fn left(name: impl Into<String>) -> Self {
		Expression::Column(ColumnRef {
			side: JoinSide::Left,
			name: name.into(),
		})
	}

	pub fn right(name: impl Into<String>) -> Self {
		Expression::Column(ColumnRef {
			side: JoinSide::Right,
			name: name.into(),
		})
	}

	pub fn constant(value: impl Into<Value>) -> Self {
		Expression::Constant(value.into())
	}

	fn compare(self, op: CompareOp, other: Expression) -> Self {
		Expression::Compare(CompareExpression {
			op,
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	pub fn eq(self, other: Expression) -> Self {
		self.compare(CompareOp::Eq, other)
	}

	pub fn not_eq(self, other: Expression) -> Self {
		self.compare(CompareOp::NotEq, other)
	}

	pub fn lt(self, other: Expression) -> Self {
		self.compare(CompareOp::LessThan, other)
	}

	pub fn lte(self, other: Expression) -> Self {
		self.compare(CompareOp::LessThanEq, other)
	}

	pub fn gt(self, other: Expression) -> Self {
		self.compare(CompareOp::GreaterThan, other)
	}

	pub fn gte(self, other: Expression) -> Self {
		self.compare(CompareOp::GreaterThanEq, other)
	}

	pub fn and(self, other: Expression) -> Self {
		Expression::And(AndExpression {
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	pub fn or(self, other: Expression) -> Self {
		Expression::Or(OrExpression {
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	pub fn not(self) -> Self {
		Expression::Not(NotExpression {
			expression: Box::new(self),
		})
	}

	pub fn add(self, other: Expression) -> Self {
		Expression::Add(AddExpression {
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	pub fn subtract(self, other: Expression) -> Self {
		Expression::Subtract(SubtractExpression {
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	pub fn multiply(self, other: Expression) -> Self {
		Expression::Multiply(MultiplyExpression {
			left: Box::new(self),
			right: Box::new(other),
		})
	}

	/// Collect every column reference in this expression.
	pub fn column_refs<'a>(&'a self, out: &mut Vec<&'a ColumnRef>) {
		match self {
			Expression::Constant(_) => {}
			Expression::Column(column) => out.push(column),
			Expression::Compare(CompareExpression {
				left,
				right,
				..
			})
			| Expression::And(AndExpression {
				left,
				right,
			})
			| Expression::Or(OrExpression {
				left,
				right,
			})
			| Expression::Add(AddExpression {
				left,
				right,
			})
			| Expression::Subtract(SubtractExpression {
				left,
				right,
			})
			| Expression::Multiply(MultiplyExpression {
				left,
				right,
			}) => {
				left.column_refs(out);
				right.column_refs(out);
			}
			Expression::Not(NotExpression {
				expression,
			}) => expression.column_refs(out),
		}
	}

	/// Whether all column references in this expression address `side`.
	/// An expression without references is pure on both sides.
	pub fn is_pure(&self, side: JoinSide) -> bool {
		let mut refs = Vec::new();
		self.column_refs(&mut refs);
		refs.iter().all(|r| r.side == side)
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Constant(value) => write!(f, "{}", value),
			Expression::Column(column) => write!(f, "{}.{}", column.side, column.name),
			Expression::Compare(CompareExpression {
				op,
				left,
				right,
			}) => {
				write!(f, "({} {} {})", left, op, right)
			}
			Expression::And(AndExpression {
				left,
				right,
			}) => write!(f, "({} and {})", left, right),
			Expression::Or(OrExpression {
				left,
				right,
			}) => write!(f, "({} or {})", left, right),
			Expression::Not(NotExpression {
				expression,
			}) => write!(f, "(not {})", expression),
			Expression::Add(AddExpression {
				left,
				right,
			}) => write!(f, "({} + {})", left, right),
			Expression::Subtract(SubtractExpression {
				left,
				right,
			}) => write!(f, "({} - {})", left, right),
			Expression::Multiply(MultiplyExpression {
				left,
				right,
			}) => write!(f, "({} * {})", left, right),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		let expr = Expression::left("a").add(Expression::constant(1i64)).eq(Expression::right("b"));
		assert_eq!(expr.to_string(), "((left.a + 1) == right.b)");
	}

	#[test]
	fn test_is_pure() {
		let expr = Expression::left("a").add(Expression::constant(1i64));
		assert!(expr.is_pure(JoinSide::Left));
		assert!(!expr.is_pure(JoinSide::Right));

		let both = Expression::left("a").eq(Expression::right("b"));
		assert!(!both.is_pure(JoinSide::Left));
		assert!(!both.is_pure(JoinSide::Right));

		// no references at all
		assert!(Expression::constant(true).is_pure(JoinSide::Left));
	}

	#[test]
	fn test_column_refs() {
		let expr = Expression::left("a").eq(Expression::right("b")).and(Expression::left("c").not());
		let mut refs = Vec::new();
		expr.column_refs(&mut refs);
		let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
		assert_eq!(names, vec!["a", "b", "c"]);
	}
}
