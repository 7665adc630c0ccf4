// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use relate_type::{Value, diagnostic::join::unresolved_column, return_error};
use serde::{Deserialize, Serialize};

use crate::{
	expression::{CompareExpression, CompareOp, Expression, JoinSide},
	frame::Frame,
};

/// One term of a join condition. A condition is an ordered list of terms,
/// combined with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredicateTerm {
	/// A literal boolean, evaluated during normalization rather than per
	/// row.
	Literal(bool),
	/// Equi-join on a column of this name present in both relations.
	Column(String),
	/// Equi-join on a (left column, right column) pair.
	Pair(String, String),
	/// A boolean expression over columns of both relations.
	Expression(Expression),
}

/// The heterogeneous join condition as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinPredicate {
	pub terms: Vec<PredicateTerm>,
}

impl From<bool> for JoinPredicate {
	fn from(value: bool) -> Self {
		Self {
			terms: vec![PredicateTerm::Literal(value)],
		}
	}
}

impl From<&str> for JoinPredicate {
	fn from(value: &str) -> Self {
		Self {
			terms: vec![PredicateTerm::Column(value.to_string())],
		}
	}
}

impl From<String> for JoinPredicate {
	fn from(value: String) -> Self {
		Self {
			terms: vec![PredicateTerm::Column(value)],
		}
	}
}

impl From<(&str, &str)> for JoinPredicate {
	fn from((left, right): (&str, &str)) -> Self {
		Self {
			terms: vec![PredicateTerm::Pair(left.to_string(), right.to_string())],
		}
	}
}

impl From<Expression> for JoinPredicate {
	fn from(value: Expression) -> Self {
		Self {
			terms: vec![PredicateTerm::Expression(value)],
		}
	}
}

impl From<PredicateTerm> for JoinPredicate {
	fn from(value: PredicateTerm) -> Self {
		Self {
			terms: vec![value],
		}
	}
}

impl From<Vec<PredicateTerm>> for JoinPredicate {
	fn from(terms: Vec<PredicateTerm>) -> Self {
		Self {
			terms,
		}
	}
}

impl<const N: usize> From<[PredicateTerm; N]> for JoinPredicate {
	fn from(terms: [PredicateTerm; N]) -> Self {
		Self {
			terms: terms.into(),
		}
	}
}

impl From<Vec<&str>> for JoinPredicate {
	fn from(names: Vec<&str>) -> Self {
		Self {
			terms: names.into_iter().map(|n| PredicateTerm::Column(n.to_string())).collect(),
		}
	}
}

impl<const N: usize> From<[&str; N]> for JoinPredicate {
	fn from(names: [&str; N]) -> Self {
		Self {
			terms: names.into_iter().map(|n| PredicateTerm::Column(n.to_string())).collect(),
		}
	}
}

/// The canonical form of a join condition after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NormalizedPredicate {
	/// All terms were literal and reduced to a single boolean.
	Const(bool),
	/// Equality key pairs, probed through a hash index, plus an optional
	/// residual predicate evaluated on key-matched candidate pairs only.
	Keyed {
		keys: Vec<(Expression, Expression)>,
		residual: Option<Expression>,
	},
}

/// Normalize a heterogeneous join condition into a [`NormalizedPredicate`].
///
/// Every column reference is validated against its relation here, before
/// any row is processed; literal terms fold immediately. A single `false`
/// literal collapses the whole predicate.
pub fn normalize(predicate: &JoinPredicate, left: &Frame, right: &Frame) -> crate::Result<NormalizedPredicate> {
	let mut keys = Vec::new();
	let mut residual: Option<Expression> = None;
	let mut any_false = false;

	for term in &predicate.terms {
		match term {
			PredicateTerm::Literal(value) => {
				if !value {
					any_false = true;
				}
			}
			PredicateTerm::Column(name) => {
				resolve_column(left, JoinSide::Left, name)?;
				resolve_column(right, JoinSide::Right, name)?;
				keys.push((Expression::left(name.clone()), Expression::right(name.clone())));
			}
			PredicateTerm::Pair(left_name, right_name) => {
				resolve_column(left, JoinSide::Left, left_name)?;
				resolve_column(right, JoinSide::Right, right_name)?;
				keys.push((Expression::left(left_name.clone()), Expression::right(right_name.clone())));
			}
			PredicateTerm::Expression(expression) => {
				validate_refs(expression, left, right)?;

				match expression {
					// boolean literals wrapped in an expression
					// fold like plain literals
					Expression::Constant(Value::Boolean(value)) => {
						if !value {
							any_false = true;
						}
					}
					Expression::Compare(CompareExpression {
						op: CompareOp::Eq,
						left: lhs,
						right: rhs,
					}) if lhs.is_pure(JoinSide::Left) && rhs.is_pure(JoinSide::Right) => {
						keys.push((lhs.as_ref().clone(), rhs.as_ref().clone()));
					}
					Expression::Compare(CompareExpression {
						op: CompareOp::Eq,
						left: lhs,
						right: rhs,
					}) if lhs.is_pure(JoinSide::Right) && rhs.is_pure(JoinSide::Left) => {
						keys.push((rhs.as_ref().clone(), lhs.as_ref().clone()));
					}
					other => {
						residual = Some(match residual.take() {
							None => other.clone(),
							Some(acc) => acc.and(other.clone()),
						});
					}
				}
			}
		}
	}

	if any_false {
		return Ok(NormalizedPredicate::Const(false));
	}

	if keys.is_empty() && residual.is_none() {
		return Ok(NormalizedPredicate::Const(true));
	}

	Ok(NormalizedPredicate::Keyed {
		keys,
		residual,
	})
}

fn resolve_column(frame: &Frame, side: JoinSide, name: &str) -> crate::Result<()> {
	if frame.column(name).is_none() {
		return_error!(unresolved_column(&side.to_string(), name));
	}
	Ok(())
}

fn validate_refs(expression: &Expression, left: &Frame, right: &Frame) -> crate::Result<()> {
	let mut refs = Vec::new();
	expression.column_refs(&mut refs);

	for column in refs {
		let frame = match column.side {
			JoinSide::Left => left,
			JoinSide::Right => right,
		};
		resolve_column(frame, column.side, &column.name)?;
	}
	Ok(())
}
