//! Orthogonal grid directions.
//!
//! Each direction owns one bit of a [`Connectivity`](crate::Connectivity)
//! mask. Neighbour processing always walks [`Direction::ALL`], so callers
//! observing per-mutation events see them in North, East, South, West order.

#[cfg(test)]
mod tests;

/// One of the four edges of a map square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	North,
	East,
	South,
	West,
}

impl Direction {
	/// All directions in the fixed processing order.
	pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

	/// Returns the power-of-two bit assigned to this direction.
	#[inline]
	pub const fn bit(self) -> u8 {
		match self {
			Direction::North => 1,
			Direction::East => 2,
			Direction::South => 4,
			Direction::West => 8,
		}
	}

	/// Returns the direction pointing back across the shared edge.
	#[inline]
	pub const fn opposite(self) -> Direction {
		match self {
			Direction::North => Direction::South,
			Direction::East => Direction::West,
			Direction::South => Direction::North,
			Direction::West => Direction::East,
		}
	}

	/// Returns the unit step `(dx, dy)` for this direction.
	///
	/// Map rows grow downward, so North decreases `y`.
	#[inline]
	pub const fn offset(self) -> (i32, i32) {
		match self {
			Direction::North => (0, -1),
			Direction::East => (1, 0),
			Direction::South => (0, 1),
			Direction::West => (-1, 0),
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Direction::North => write!(f, "north"),
			Direction::East => write!(f, "east"),
			Direction::South => write!(f, "south"),
			Direction::West => write!(f, "west"),
		}
	}
}
