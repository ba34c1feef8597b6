//! Map access for the autojoin engine.

use gridjoin_primitives::{ArchetypeId, Point};

/// Capabilities the engine needs from a map.
///
/// Squares are stacks of objects. The engine only reads them top-most first
/// and only ever changes an object's archetype; it never inserts or removes
/// objects itself. Implementations are expected to record undo information
/// and notify listeners from [`replace_archetype`](Self::replace_archetype).
pub trait MapGrid {
	/// Handle to an object placed on the map.
	type Object: Copy + Eq + std::fmt::Debug;

	/// Returns whether `point` lies inside the map.
	fn is_valid(&self, point: Point) -> bool;

	/// Iterates the objects of the square at `point`, top-most first.
	///
	/// Yields nothing for invalid points.
	fn objects_top_down(&self, point: Point) -> impl Iterator<Item = (Self::Object, ArchetypeId)>;

	/// Changes the archetype of a placed object.
	fn replace_archetype(&mut self, object: Self::Object, archetype: ArchetypeId);

	/// Returns whether `archetype` is a multi-square (composite) archetype.
	fn is_multi(&self, archetype: ArchetypeId) -> bool;
}
