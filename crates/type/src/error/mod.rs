// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{DefaultRenderer, Diagnostic, DiagnosticColumn};

#[derive(Debug, PartialEq)]
pub struct Error(pub Diagnostic);

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

/// Wrap a diagnostic into an [`Error`].
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Return early with an [`Error`] built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::err!($diagnostic))
	};
}
