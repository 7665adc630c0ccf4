// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Diagnostic, DiagnosticColumn, Error, diagnostic};
pub use value::{OrderedF64, Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
