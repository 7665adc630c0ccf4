// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

pub mod join;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub column: Option<DiagnosticColumn>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub r#type: Type,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = format!("[{}] {}", diagnostic.code, diagnostic.message);

		if let Some(column) = &diagnostic.column {
			out.push_str(&format!("\n  column: {} ({})", column.name, column.r#type));
		}

		if let Some(label) = &diagnostic.label {
			out.push_str(&format!("\n  label: {}", label));
		}

		if let Some(help) = &diagnostic.help {
			out.push_str(&format!("\n  help: {}", help));
		}

		for note in &diagnostic.notes {
			out.push_str(&format!("\n  note: {}", note));
		}

		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_full() {
		let diagnostic = Diagnostic {
			code: "JOIN_000".to_string(),
			statement: None,
			message: "something went wrong".to_string(),
			column: Some(DiagnosticColumn {
				name: "id".to_string(),
				r#type: Type::Int8,
			}),
			label: Some("here".to_string()),
			help: Some("try something else".to_string()),
			notes: vec!["a note".to_string()],
		};

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.contains("[JOIN_000] something went wrong"));
		assert!(out.contains("column: id (INT8)"));
		assert!(out.contains("label: here"));
		assert!(out.contains("help: try something else"));
		assert!(out.contains("note: a note"));
	}
}
