//! The map model.
//!
//! Squares live in a flat arena indexed by `y * width + x`; each square is a
//! stack of [`ObjectId`]s ordered bottom to top. Objects live in their own
//! arena and keep their id after removal so undo can put them back.


use std::sync::Arc;

use gridjoin_autojoin::MapGrid;
use gridjoin_primitives::{ArchetypeId, ArchetypeSet, Point};

use crate::error::MapError;
use crate::event::{MapEvent, MapListener};
use crate::undo::{MapOp, UndoStore};

/// Handle to an object created on a [`MapModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl std::fmt::Display for ObjectId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ObjectId({})", self.0)
	}
}

/// Snapshot of an object's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectInfo {
	pub id: ObjectId,
	pub archetype: ArchetypeId,
	/// Square holding the object, `None` once removed.
	pub point: Option<Point>,
}

#[derive(Debug, Clone, Copy)]
struct GameObject {
	archetype: ArchetypeId,
	point: Option<Point>,
}

/// A rectangular map of object stacks.
pub struct MapModel {
	width: u32,
	height: u32,
	squares: Vec<Vec<ObjectId>>,
	objects: Vec<GameObject>,
	archetypes: Arc<ArchetypeSet>,
	listeners: Vec<Box<dyn MapListener>>,
	history: UndoStore,
	/// Nesting depth of open undo groups.
	group_depth: usize,
	/// Whether the open group already started an undo step.
	group_started: bool,
}

impl MapModel {
	/// Creates an empty map.
	pub fn new(width: u32, height: u32, archetypes: Arc<ArchetypeSet>) -> Self {
		let squares = (width as usize).saturating_mul(height as usize);
		Self {
			width,
			height,
			squares: vec![Vec::new(); squares],
			objects: Vec::new(),
			archetypes,
			listeners: Vec::new(),
			history: UndoStore::new(),
			group_depth: 0,
			group_started: false,
		}
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn archetypes(&self) -> &Arc<ArchetypeSet> {
		&self.archetypes
	}

	/// Returns whether `point` lies inside the map.
	pub fn contains(&self, point: Point) -> bool {
		self.square_index(point).is_some()
	}

	fn square_index(&self, point: Point) -> Option<usize> {
		let x = u32::try_from(point.x).ok()?;
		let y = u32::try_from(point.y).ok()?;
		(x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
	}

	/// Returns the objects on a square, bottom to top.
	pub fn square(&self, point: Point) -> &[ObjectId] {
		match self.square_index(point) {
			Some(index) => &self.squares[index],
			None => &[],
		}
	}

	/// Returns an object's current state.
	pub fn object(&self, object: ObjectId) -> Option<ObjectInfo> {
		let state = self.objects.get(object.0)?;
		Some(ObjectInfo {
			id: object,
			archetype: state.archetype,
			point: state.point,
		})
	}

	pub fn archetype_of(&self, object: ObjectId) -> Option<ArchetypeId> {
		self.objects.get(object.0).map(|state| state.archetype)
	}

	/// Returns the square holding `object`, if it is placed.
	pub fn point_of(&self, object: ObjectId) -> Option<Point> {
		self.objects.get(object.0)?.point
	}

	/// Iterates every placed object with its square, row by row, bottom to top
	/// within a square.
	pub fn placed(&self) -> impl Iterator<Item = (Point, ObjectId, ArchetypeId)> + '_ {
		self.squares.iter().enumerate().flat_map(move |(index, stack)| {
			let point = Point::new((index % self.width as usize) as i32, (index / self.width as usize) as i32);
			stack.iter().map(move |&object| (point, object, self.objects[object.0].archetype))
		})
	}

	/// Registers a listener for map events.
	pub fn subscribe(&mut self, listener: impl MapListener + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Places a new object of `archetype` on top of the square at `point`.
	pub fn insert(&mut self, point: Point, archetype: ArchetypeId) -> Result<ObjectId, MapError> {
		let index = self.square_index(point).ok_or(MapError::OutOfBounds(point))?;
		let object = ObjectId(self.objects.len());
		self.objects.push(GameObject { archetype, point: None });
		let position = self.squares[index].len();
		self.apply(MapOp::Insert { object, point, position })?;
		self.record(MapOp::Insert { object, point, position });
		Ok(object)
	}

	/// Takes `object` off its square.
	pub fn remove(&mut self, object: ObjectId) -> Result<ObjectInfo, MapError> {
		let info = self.object(object).ok_or(MapError::UnknownObject(object))?;
		let point = info.point.ok_or(MapError::NotPlaced(object))?;
		let position = self
			.square(point)
			.iter()
			.position(|&placed| placed == object)
			.ok_or(MapError::NotPlaced(object))?;
		let op = MapOp::Remove { object, point, position };
		self.apply(op)?;
		self.record(op);
		Ok(info)
	}

	/// Changes the archetype of a placed object, returning the previous one.
	pub fn replace(&mut self, object: ObjectId, archetype: ArchetypeId) -> Result<ArchetypeId, MapError> {
		let info = self.object(object).ok_or(MapError::UnknownObject(object))?;
		if info.point.is_none() {
			return Err(MapError::NotPlaced(object));
		}
		if info.archetype == archetype {
			return Ok(archetype);
		}
		let op = MapOp::Replace {
			object,
			old: info.archetype,
			new: archetype,
		};
		self.apply(op)?;
		self.record(op);
		Ok(info.archetype)
	}

	/// Opens an undo group: every mutation until the matching
	/// [`end_group`](Self::end_group) is undone as one step. Groups nest.
	pub fn begin_group(&mut self) {
		if self.group_depth == 0 {
			self.group_started = false;
		}
		self.group_depth += 1;
	}

	/// Closes the innermost undo group.
	pub fn end_group(&mut self) {
		self.group_depth = self.group_depth.saturating_sub(1);
	}

	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Reverts the most recent undo step. Returns `false` if there is none.
	pub fn undo(&mut self) -> bool {
		let Some(step) = self.history.begin_undo() else {
			return false;
		};
		for op in step.inverse_ops() {
			if let Err(error) = self.apply(op) {
				tracing::warn!(%error, ?op, "Undo operation failed");
			}
		}
		self.history.finish_undo(step);
		true
	}

	/// Re-applies the most recently undone step. Returns `false` if there is none.
	pub fn redo(&mut self) -> bool {
		let Some(step) = self.history.begin_redo() else {
			return false;
		};
		for &op in &step.ops {
			if let Err(error) = self.apply(op) {
				tracing::warn!(%error, ?op, "Redo operation failed");
			}
		}
		self.history.finish_redo(step);
		true
	}

	fn record(&mut self, op: MapOp) {
		let merge = self.group_depth > 0 && self.group_started;
		self.history.record(op, merge);
		if self.group_depth > 0 {
			self.group_started = true;
		}
	}

	/// Performs `op` on the arenas and notifies listeners. Does not record.
	fn apply(&mut self, op: MapOp) -> Result<(), MapError> {
		let event = match op {
			MapOp::Insert { object, point, position } => {
				let index = self.square_index(point).ok_or(MapError::OutOfBounds(point))?;
				let state = self.objects.get_mut(object.0).ok_or(MapError::UnknownObject(object))?;
				state.point = Some(point);
				let stack = &mut self.squares[index];
				stack.insert(position.min(stack.len()), object);
				MapEvent::Inserted {
					object,
					point,
					archetype: state.archetype,
				}
			}
			MapOp::Remove { object, point, .. } => {
				let index = self.square_index(point).ok_or(MapError::OutOfBounds(point))?;
				let state = self.objects.get_mut(object.0).ok_or(MapError::UnknownObject(object))?;
				let stack = &mut self.squares[index];
				let position = stack.iter().position(|&placed| placed == object).ok_or(MapError::NotPlaced(object))?;
				stack.remove(position);
				state.point = None;
				MapEvent::Removed {
					object,
					point,
					archetype: state.archetype,
				}
			}
			MapOp::Replace { object, old, new } => {
				let state = self.objects.get_mut(object.0).ok_or(MapError::UnknownObject(object))?;
				let point = state.point.ok_or(MapError::NotPlaced(object))?;
				state.archetype = new;
				MapEvent::ArchetypeChanged { object, point, old, new }
			}
		};

		for listener in &mut self.listeners {
			listener.on_event(&event);
		}
		Ok(())
	}
}

impl std::fmt::Debug for MapModel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MapModel")
			.field("width", &self.width)
			.field("height", &self.height)
			.field("objects", &self.objects.len())
			.field("listeners", &self.listeners.len())
			.field("history", &self.history)
			.finish()
	}
}

impl MapGrid for MapModel {
	type Object = ObjectId;

	fn is_valid(&self, point: Point) -> bool {
		self.contains(point)
	}

	fn objects_top_down(&self, point: Point) -> impl Iterator<Item = (ObjectId, ArchetypeId)> {
		self.square(point)
			.iter()
			.rev()
			.map(|&object| (object, self.objects[object.0].archetype))
	}

	fn replace_archetype(&mut self, object: ObjectId, archetype: ArchetypeId) {
		if let Err(error) = self.replace(object, archetype) {
			tracing::warn!(%error, %archetype, "Autojoin rewrite of neighbour failed");
		}
	}

	fn is_multi(&self, archetype: ArchetypeId) -> bool {
		self.archetypes.is_multi(archetype)
	}
}
