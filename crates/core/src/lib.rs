// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod expression;
pub mod frame;
pub mod join;

pub use expression::{ColumnRef, CompareOp, Expression, JoinSide};
pub use frame::{Column, ColumnValues, Frame, Schema, SchemaColumn};
pub use join::{JoinKind, JoinPredicate, JoinResult, NormalizedPredicate, PredicateTerm, join};
pub use relate_type::{Diagnostic, Error, OrderedF64, Result, Type, Value};
