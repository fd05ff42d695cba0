use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A block coordinate in the world grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
	pub x: i32,
	pub y: i32,
	pub z: i32,
}

impl BlockPos {
	pub const ORIGIN: Self = Self::new(0, 0, 0);

	pub const fn new(x: i32, y: i32, z: i32) -> Self {
		Self { x, y, z }
	}

	/// Returns this position moved by the given deltas.
	#[inline]
	pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
		Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy), self.z.wrapping_add(dz))
	}

	/// Component-wise minimum of two positions.
	pub fn min(self, other: Self) -> Self {
		Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
	}

	/// Component-wise maximum of two positions.
	pub fn max(self, other: Self) -> Self {
		Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
	}

	/// Squared euclidean distance between block coordinates.
	pub fn squared_distance(self, other: Self) -> f64 {
		let dx = f64::from(self.x) - f64::from(other.x);
		let dy = f64::from(self.y) - f64::from(other.y);
		let dz = f64::from(self.z) - f64::from(other.z);
		dx * dx + dy * dy + dz * dz
	}

	/// The coordinates as an `[x, y, z]` array.
	pub const fn to_array(self) -> [i32; 3] {
		[self.x, self.y, self.z]
	}
}

impl From<[i32; 3]> for BlockPos {
	fn from([x, y, z]: [i32; 3]) -> Self {
		Self::new(x, y, z)
	}
}

impl Add for BlockPos {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		self.offset(rhs.x, rhs.y, rhs.z)
	}
}

impl Sub for BlockPos {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		self + (-rhs)
	}
}

impl Neg for BlockPos {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(self.x.wrapping_neg(), self.y.wrapping_neg(), self.z.wrapping_neg())
	}
}

impl fmt::Display for BlockPos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {}, {})", self.x, self.y, self.z)
	}
}

/// A precise position, used for entity locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// The block containing this position.
	///
	/// Coordinates outside the `i32` range saturate.
	pub fn floor(self) -> BlockPos {
		BlockPos::new(self.x.floor() as i32, self.y.floor() as i32, self.z.floor() as i32)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Entity;

	#[test]
	fn floor_rounds_toward_negative_infinity() {
		assert_eq!(Vec3::new(1.9, -0.1, -3.0).floor(), BlockPos::new(1, -1, -3));
	}

	#[test]
	fn entity_block_pos_defaults_to_floor() {
		let entity = Vec3::new(10.5, 64.0, -2.25);
		assert_eq!(entity.block_pos(), BlockPos::new(10, 64, -3));
	}

	#[test]
	fn offset_arithmetic() {
		let a = BlockPos::new(1, 2, 3);
		let b = BlockPos::new(-4, 5, 0);
		assert_eq!(a + b, BlockPos::new(-3, 7, 3));
		assert_eq!((a + b) - b, a);
		assert_eq!(a.squared_distance(BlockPos::ORIGIN), 14.0);
	}
}
