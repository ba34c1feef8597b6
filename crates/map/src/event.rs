//! Map change notifications.

use gridjoin_primitives::{ArchetypeId, Point};

use crate::model::ObjectId;

/// A single change to the map, reported in mutation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
	/// An object was placed on a square.
	Inserted {
		object: ObjectId,
		point: Point,
		archetype: ArchetypeId,
	},
	/// An object was taken off its square.
	Removed {
		object: ObjectId,
		point: Point,
		archetype: ArchetypeId,
	},
	/// A placed object now shows a different archetype.
	ArchetypeChanged {
		object: ObjectId,
		point: Point,
		old: ArchetypeId,
		new: ArchetypeId,
	},
}

impl MapEvent {
	/// Returns the square the event happened on.
	pub fn point(&self) -> Point {
		match self {
			MapEvent::Inserted { point, .. } | MapEvent::Removed { point, .. } | MapEvent::ArchetypeChanged { point, .. } => *point,
		}
	}
}

/// Receives [`MapEvent`]s synchronously as the map changes.
pub trait MapListener: Send {
	fn on_event(&mut self, event: &MapEvent);
}

impl<F> MapListener for F
where
	F: FnMut(&MapEvent) + Send,
{
	fn on_event(&mut self, event: &MapEvent) {
		self(event)
	}
}
