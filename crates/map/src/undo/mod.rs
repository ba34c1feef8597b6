//! Undo history for map edits.
//!
//! History is kept as grouped operation sequences rather than map snapshots.
//! One [`UndoStep`] covers one user-perceived edit: a joined insertion, for
//! example, records the new object together with every neighbour it
//! rewrote, so a single undo restores them all.

#[cfg(test)]
mod tests;

use gridjoin_primitives::{ArchetypeId, Point};
use smallvec::SmallVec;

use crate::model::ObjectId;

/// Maximum undo history size in steps.
pub const MAX_UNDO: usize = 100;

/// A reversible map mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapOp {
	/// `object` was placed at `position` (0 = bottom) of the square at `point`.
	Insert {
		object: ObjectId,
		point: Point,
		position: usize,
	},
	/// `object` was taken from `position` of the square at `point`.
	Remove {
		object: ObjectId,
		point: Point,
		position: usize,
	},
	/// `object` changed archetype from `old` to `new`.
	Replace {
		object: ObjectId,
		old: ArchetypeId,
		new: ArchetypeId,
	},
}

impl MapOp {
	/// Returns the operation that reverts this one.
	pub fn inverse(self) -> MapOp {
		match self {
			MapOp::Insert { object, point, position } => MapOp::Remove { object, point, position },
			MapOp::Remove { object, point, position } => MapOp::Insert { object, point, position },
			MapOp::Replace { object, old, new } => MapOp::Replace { object, old: new, new: old },
		}
	}
}

/// A single step in the undo/redo history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoStep {
	/// Operations in the order they were applied.
	pub ops: SmallVec<[MapOp; 4]>,
}

impl UndoStep {
	pub fn new(op: MapOp) -> Self {
		let mut ops = SmallVec::new();
		ops.push(op);
		Self { ops }
	}

	/// Operations that revert this step, in the order they must run.
	pub fn inverse_ops(&self) -> impl Iterator<Item = MapOp> + '_ {
		self.ops.iter().rev().map(|op| op.inverse())
	}
}

/// Grouped undo store.
#[derive(Debug)]
pub struct UndoStore {
	undo_stack: Vec<UndoStep>,
	redo_stack: Vec<UndoStep>,
	max_steps: usize,
}

impl Default for UndoStore {
	fn default() -> Self {
		Self::with_limit(MAX_UNDO)
	}
}

impl UndoStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store keeping at most `max_steps` undo steps.
	pub fn with_limit(max_steps: usize) -> Self {
		Self {
			undo_stack: Vec::new(),
			redo_stack: Vec::new(),
			max_steps: max_steps.max(1),
		}
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// Records an operation.
	///
	/// If `merge` is true and a step exists, appends to it; otherwise starts a
	/// new step. Any new edit invalidates the redo stack.
	pub fn record(&mut self, op: MapOp, merge: bool) {
		if merge && let Some(step) = self.undo_stack.last_mut() {
			step.ops.push(op);
		} else {
			self.undo_stack.push(UndoStep::new(op));
			self.enforce_limits();
		}
		self.redo_stack.clear();
	}

	/// Evicts oldest steps until the step limit is met.
	fn enforce_limits(&mut self) {
		if self.undo_stack.len() > self.max_steps {
			let excess = self.undo_stack.len() - self.max_steps;
			self.undo_stack.drain(..excess);
		}
	}

	/// Takes the most recent step for undoing.
	///
	/// The caller applies [`UndoStep::inverse_ops`] and hands the step back
	/// through [`finish_undo`](Self::finish_undo).
	pub fn begin_undo(&mut self) -> Option<UndoStep> {
		self.undo_stack.pop()
	}

	pub fn finish_undo(&mut self, step: UndoStep) {
		self.redo_stack.push(step);
	}

	/// Takes the most recently undone step for redoing.
	pub fn begin_redo(&mut self) -> Option<UndoStep> {
		self.redo_stack.pop()
	}

	pub fn finish_redo(&mut self, step: UndoStep) {
		self.undo_stack.push(step);
		self.enforce_limits();
	}
}
