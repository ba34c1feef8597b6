//! Object placement and removal with autojoining.
//!
//! These are the entry points an editor calls for user edits. Each call is a
//! single undo step covering the target square and every neighbour the
//! autojoin engine rewrote.

use gridjoin_autojoin::{AutojoinLists, InsertionResult};
use gridjoin_primitives::{ArchetypeId, Point};

use crate::error::MapError;
use crate::model::{MapModel, ObjectId, ObjectInfo};

impl MapModel {
	/// Places `archetype` at `point`.
	///
	/// With `join`, neighbours are rewritten first and the square receives
	/// whatever the engine decides: an existing member of the same table may
	/// be changed instead of adding an object (its id is returned), and
	/// placing a canonical tile over itself does nothing (`Ok(None)`). Without
	/// `join`, the archetype is inserted verbatim.
	pub fn insert_archetype(&mut self, lists: &AutojoinLists, point: Point, archetype: ArchetypeId, join: bool) -> Result<Option<ObjectId>, MapError> {
		if !self.contains(point) {
			return Err(MapError::OutOfBounds(point));
		}
		if !join {
			return self.insert(point, archetype).map(Some);
		}

		self.begin_group();
		let placed = match lists.join_insert(self, point, archetype) {
			InsertionResult::Mutate { object, archetype } => self.replace(object, archetype).map(|_| Some(object)),
			InsertionResult::Insert(archetype) => self.insert(point, archetype).map(Some),
			InsertionResult::Rejected => Ok(None),
		};
		self.end_group();
		placed
	}

	/// Removes `object` from the map.
	///
	/// With `join`, the neighbours are disconnected while the object is still
	/// in place, then the object is removed.
	pub fn remove_object(&mut self, lists: &AutojoinLists, object: ObjectId, join: bool) -> Result<ObjectInfo, MapError> {
		let info = self.object(object).ok_or(MapError::UnknownObject(object))?;
		let point = info.point.ok_or(MapError::NotPlaced(object))?;
		if !join {
			return self.remove(object);
		}

		self.begin_group();
		lists.join_delete(self, point, info.archetype);
		let removed = self.remove(object);
		self.end_group();
		removed
	}
}
