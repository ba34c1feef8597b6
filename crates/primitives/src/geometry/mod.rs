//! Map coordinates.

#[cfg(test)]
mod tests;

use crate::direction::Direction;

/// A square coordinate on a map.
///
/// Coordinates are signed so that stepping off any edge yields a point the
/// map can reject instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}

	/// Returns the orthogonal neighbour one square toward `dir`, or `None`
	/// when it lies outside the coordinate range.
	#[inline]
	pub const fn step(self, dir: Direction) -> Option<Self> {
		let (dx, dy) = dir.offset();
		let Some(x) = self.x.checked_add(dx) else {
			return None;
		};
		let Some(y) = self.y.checked_add(dy) else {
			return None;
		};
		Some(Self { x, y })
	}
}

impl std::fmt::Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

impl From<(i32, i32)> for Point {
	fn from((x, y): (i32, i32)) -> Self {
		Self { x, y }
	}
}
