//! Connectivity masks.
//!
//! A [`Connectivity`] value is the 4-bit index into an autojoin table: the
//! set of edges on which a tile visually connects to a neighbour of the same
//! family.

use crate::direction::Direction;

bitflags::bitflags! {
	/// Set of connected edges (N=1, E=2, S=4, W=8).
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Connectivity: u8 {
		const NORTH = 1 << 0;
		const EAST = 1 << 1;
		const SOUTH = 1 << 2;
		const WEST = 1 << 3;
	}
}

impl Connectivity {
	/// Number of distinct connectivity patterns.
	pub const COUNT: usize = 16;

	/// Returns the table index in `0..16`.
	#[inline]
	pub const fn index(self) -> usize {
		self.bits() as usize
	}

	/// Builds a mask from a table index, or `None` when `index >= 16`.
	#[inline]
	pub const fn from_index(index: usize) -> Option<Self> {
		if index < Self::COUNT {
			Some(Self::from_bits_truncate(index as u8))
		} else {
			None
		}
	}

	/// Returns whether the edge facing `dir` is connected.
	#[inline]
	pub fn connects(self, dir: Direction) -> bool {
		self.contains(Self::from(dir))
	}

	/// Returns a copy with the edge facing `dir` connected.
	#[inline]
	#[must_use]
	pub fn with(self, dir: Direction) -> Self {
		self | Self::from(dir)
	}

	/// Returns a copy with the edge facing `dir` disconnected.
	#[inline]
	#[must_use]
	pub fn without(self, dir: Direction) -> Self {
		self - Self::from(dir)
	}
}

impl From<Direction> for Connectivity {
	fn from(dir: Direction) -> Self {
		Self::from_bits_truncate(dir.bit())
	}
}

impl std::fmt::Display for Connectivity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.index())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_round_trips_through_from_index() {
		for index in 0..Connectivity::COUNT {
			let mask = Connectivity::from_index(index).unwrap();
			assert_eq!(mask.index(), index);
		}
		assert_eq!(Connectivity::from_index(16), None);
	}

	#[test]
	fn all_connects_every_direction() {
		for dir in Direction::ALL {
			assert!(Connectivity::all().connects(dir));
			assert!(!Connectivity::empty().connects(dir));
		}
	}

	#[test]
	fn with_and_without_touch_one_edge() {
		let corner = Connectivity::NORTH | Connectivity::EAST;
		assert_eq!(corner.with(Direction::West).index(), 11);
		assert_eq!(corner.without(Direction::North), Connectivity::EAST);
		assert_eq!(corner.without(Direction::South), corner);
	}
}
