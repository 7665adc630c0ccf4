// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::cmp::Ordering;

use relate_type::{OrderedF64, Value};

use super::{
	AddExpression, AndExpression, CompareExpression, CompareOp, Expression, JoinSide, MultiplyExpression,
	NotExpression, OrExpression, SubtractExpression,
};
use crate::frame::Frame;

/// A borrowed row of one input relation.
#[derive(Clone, Copy)]
pub(crate) struct RowRef<'a> {
	pub frame: &'a Frame,
	pub index: usize,
}

impl<'a> RowRef<'a> {
	fn value(&self, name: &str) -> Value {
		match self.frame.column(name) {
			Some(column) => column.data.get_value(self.index),
			None => Value::Undefined,
		}
	}
}

/// Evaluate an expression against a (left row, right row) pair. A missing
/// side resolves its column references to `Undefined`; predicates are
/// validated against the input schemas before evaluation, so this only
/// happens for one-sided key evaluation.
///
/// Undefined operands propagate: comparisons and arithmetic on undefined
/// yield undefined, logical operators follow three-valued logic.
pub(crate) fn evaluate(expr: &Expression, left: Option<RowRef<'_>>, right: Option<RowRef<'_>>) -> Value {
	match expr {
		Expression::Constant(value) => value.clone(),
		Expression::Column(column) => match column.side {
			JoinSide::Left => left.map_or(Value::Undefined, |row| row.value(&column.name)),
			JoinSide::Right => right.map_or(Value::Undefined, |row| row.value(&column.name)),
		},
		Expression::Compare(CompareExpression {
			op,
			left: lhs,
			right: rhs,
		}) => {
			let a = evaluate(lhs, left, right);
			let b = evaluate(rhs, left, right);
			compare(*op, &a, &b)
		}
		Expression::And(AndExpression {
			left: lhs,
			right: rhs,
		}) => {
			match (as_bool(&evaluate(lhs, left, right)), as_bool(&evaluate(rhs, left, right))) {
				(Some(false), _) | (_, Some(false)) => Value::Boolean(false),
				(Some(true), Some(true)) => Value::Boolean(true),
				_ => Value::Undefined,
			}
		}
		Expression::Or(OrExpression {
			left: lhs,
			right: rhs,
		}) => {
			match (as_bool(&evaluate(lhs, left, right)), as_bool(&evaluate(rhs, left, right))) {
				(Some(true), _) | (_, Some(true)) => Value::Boolean(true),
				(Some(false), Some(false)) => Value::Boolean(false),
				_ => Value::Undefined,
			}
		}
		Expression::Not(NotExpression {
			expression,
		}) => match as_bool(&evaluate(expression, left, right)) {
			Some(v) => Value::Boolean(!v),
			None => Value::Undefined,
		},
		Expression::Add(AddExpression {
			left: lhs,
			right: rhs,
		}) => arithmetic(&evaluate(lhs, left, right), &evaluate(rhs, left, right), i64::checked_add, |a, b| {
			a + b
		}),
		Expression::Subtract(SubtractExpression {
			left: lhs,
			right: rhs,
		}) => arithmetic(&evaluate(lhs, left, right), &evaluate(rhs, left, right), i64::checked_sub, |a, b| {
			a - b
		}),
		Expression::Multiply(MultiplyExpression {
			left: lhs,
			right: rhs,
		}) => arithmetic(&evaluate(lhs, left, right), &evaluate(rhs, left, right), i64::checked_mul, |a, b| {
			a * b
		}),
	}
}

fn as_bool(value: &Value) -> Option<bool> {
	match value {
		Value::Boolean(v) => Some(*v),
		_ => None,
	}
}

fn as_i64(value: &Value) -> Option<i64> {
	match value {
		Value::Int4(v) => Some(*v as i64),
		Value::Int8(v) => Some(*v),
		_ => None,
	}
}

fn as_f64(value: &Value) -> Option<f64> {
	match value {
		Value::Float8(v) => Some(v.value()),
		Value::Int4(v) => Some(*v as f64),
		Value::Int8(v) => Some(*v as f64),
		_ => None,
	}
}

/// Compare two values; numeric types compare across widths. Values of
/// incompatible types, and undefined operands, compare to undefined.
fn compare(op: CompareOp, a: &Value, b: &Value) -> Value {
	if a.is_undefined() || b.is_undefined() {
		return Value::Undefined;
	}

	let ordering = match (a, b) {
		(Value::Boolean(x), Value::Boolean(y)) => x.cmp(y),
		(Value::Utf8(x), Value::Utf8(y)) => x.cmp(y),
		_ => match (as_i64(a), as_i64(b)) {
			(Some(x), Some(y)) => x.cmp(&y),
			_ => match (as_f64(a), as_f64(b)) {
				(Some(x), Some(y)) => OrderedF64::from(x).cmp(&OrderedF64::from(y)),
				_ => return Value::Undefined,
			},
		},
	};

	let result = match op {
		CompareOp::Eq => ordering == Ordering::Equal,
		CompareOp::NotEq => ordering != Ordering::Equal,
		CompareOp::LessThan => ordering == Ordering::Less,
		CompareOp::LessThanEq => ordering != Ordering::Greater,
		CompareOp::GreaterThan => ordering == Ordering::Greater,
		CompareOp::GreaterThanEq => ordering != Ordering::Less,
	};
	Value::Boolean(result)
}

/// Integer arithmetic stays integral (`Int8`); any float operand promotes
/// the result to `Float8`. Overflow and non-numeric operands yield
/// undefined.
fn arithmetic(
	a: &Value,
	b: &Value,
	int_op: fn(i64, i64) -> Option<i64>,
	float_op: fn(f64, f64) -> f64,
) -> Value {
	if let (Some(x), Some(y)) = (as_i64(a), as_i64(b)) {
		return match int_op(x, y) {
			Some(v) => Value::Int8(v),
			None => Value::Undefined,
		};
	}
	match (as_f64(a), as_f64(b)) {
		(Some(x), Some(y)) => Value::float8(float_op(x, y)),
		_ => Value::Undefined,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::frame::Column;

	fn frames() -> (Frame, Frame) {
		let left = Frame::new(vec![
			Column::int8("id", [1, 2]),
			Column::int8_with_validity("score", [10, 0], [true, false]),
		]);
		let right = Frame::new(vec![Column::int8("id", [2, 3]), Column::utf8("name", ["a", "b"])]);
		(left, right)
	}

	#[test]
	fn test_column_lookup_per_side() {
		let (left, right) = frames();
		let l = RowRef {
			frame: &left,
			index: 1,
		};
		let r = RowRef {
			frame: &right,
			index: 0,
		};

		assert_eq!(evaluate(&Expression::left("id"), Some(l), Some(r)), Value::Int8(2));
		assert_eq!(evaluate(&Expression::right("name"), Some(l), Some(r)), Value::utf8("a"));
	}

	#[test]
	fn test_equality_across_sides() {
		let (left, right) = frames();
		let expr = Expression::left("id").eq(Expression::right("id"));

		let l = RowRef {
			frame: &left,
			index: 1,
		};
		let matching = RowRef {
			frame: &right,
			index: 0,
		};
		let other = RowRef {
			frame: &right,
			index: 1,
		};

		assert_eq!(evaluate(&expr, Some(l), Some(matching)), Value::Boolean(true));
		assert_eq!(evaluate(&expr, Some(l), Some(other)), Value::Boolean(false));
	}

	#[test]
	fn test_undefined_propagates() {
		let (left, right) = frames();
		let l = RowRef {
			frame: &left,
			index: 1,
		};
		let r = RowRef {
			frame: &right,
			index: 0,
		};

		// score is undefined at row 1
		let cmp = Expression::left("score").gt(Expression::constant(5i64));
		assert_eq!(evaluate(&cmp, Some(l), Some(r)), Value::Undefined);

		let add = Expression::left("score").add(Expression::constant(1i64));
		assert_eq!(evaluate(&add, Some(l), Some(r)), Value::Undefined);
	}

	#[test]
	fn test_three_valued_logic() {
		let undefined = Expression::constant(Value::Undefined);
		let truth = Expression::constant(true);
		let falsity = Expression::constant(false);

		assert_eq!(evaluate(&undefined.clone().and(falsity.clone()), None, None), Value::Boolean(false));
		assert_eq!(evaluate(&undefined.clone().and(truth.clone()), None, None), Value::Undefined);
		assert_eq!(evaluate(&undefined.clone().or(truth), None, None), Value::Boolean(true));
		assert_eq!(evaluate(&undefined.clone().or(falsity), None, None), Value::Undefined);
		assert_eq!(evaluate(&undefined.not(), None, None), Value::Undefined);
	}

	#[test]
	fn test_derived_key_arithmetic() {
		let (left, _) = frames();
		let l = RowRef {
			frame: &left,
			index: 0,
		};

		let expr = Expression::left("id").multiply(Expression::constant(10i64));
		assert_eq!(evaluate(&expr, Some(l), None), Value::Int8(10));
	}

	#[test]
	fn test_numeric_comparison_across_widths() {
		let cmp = Expression::constant(Value::Int4(2)).eq(Expression::constant(2i64));
		assert_eq!(evaluate(&cmp, None, None), Value::Boolean(true));

		let mixed = Expression::constant(2.0).eq(Expression::constant(2i64));
		assert_eq!(evaluate(&mixed, None, None), Value::Boolean(true));
	}
}
