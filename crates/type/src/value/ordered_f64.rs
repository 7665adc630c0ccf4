// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// An 8-byte floating point with total ordering, usable as a hash key.
///
/// NaN compares equal to NaN and sorts after every other value; `-0.0` and
/// `0.0` hash identically.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn zero() -> Self {
		Self(0.0)
	}

	pub fn value(self) -> f64 {
		self.0
	}

	fn canonical_bits(self) -> u64 {
		if self.0.is_nan() {
			f64::NAN.to_bits()
		} else if self.0 == 0.0 {
			0.0f64.to_bits()
		} else {
			self.0.to_bits()
		}
	}
}

impl From<f64> for OrderedF64 {
	fn from(value: f64) -> Self {
		Self(value)
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		if self.0 == 0.0 && other.0 == 0.0 {
			return Ordering::Equal;
		}
		if self.0.is_nan() && other.0.is_nan() {
			return Ordering::Equal;
		}
		if self.0.is_nan() {
			return Ordering::Greater;
		}
		if other.0.is_nan() {
			return Ordering::Less;
		}
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.canonical_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
