//! Core grid types shared by the autojoin engine, the map model and the loader.

/// Archetype handles and the interning catalog.
pub mod archetype;
/// Connectivity bitmask over the four edges of a tile.
pub mod connectivity;
/// Orthogonal directions with their bit values and opposites.
pub mod direction;
/// Map coordinates.
pub mod geometry;

pub use archetype::{ArchetypeDef, ArchetypeId, ArchetypeSet, ArchetypeSetError};
pub use connectivity::Connectivity;
pub use direction::Direction;
pub use geometry::Point;
