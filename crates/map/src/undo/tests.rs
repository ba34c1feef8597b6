use gridjoin_primitives::{ArchetypeId, Point};

use super::*;
use crate::model::ObjectId;

fn replace(object: usize, old: u32, new: u32) -> MapOp {
	MapOp::Replace {
		object: ObjectId(object),
		old: ArchetypeId(old),
		new: ArchetypeId(new),
	}
}

#[test]
fn merge_appends_to_last_step() {
	let mut store = UndoStore::new();
	store.record(replace(0, 0, 1), false);
	store.record(replace(1, 0, 2), true);
	store.record(replace(2, 0, 3), false);

	assert_eq!(store.undo_len(), 2);
	let step = store.begin_undo().unwrap();
	assert_eq!(step.ops.as_slice(), &[replace(2, 0, 3)]);
	let step = store.begin_undo().unwrap();
	assert_eq!(step.ops.len(), 2);
}

#[test]
fn inverse_ops_run_backwards() {
	let insert = MapOp::Insert {
		object: ObjectId(4),
		point: Point::new(1, 1),
		position: 0,
	};
	let mut step = UndoStep::new(insert);
	step.ops.push(replace(3, 5, 6));

	let inverse: Vec<_> = step.inverse_ops().collect();
	assert_eq!(
		inverse,
		[
			replace(3, 6, 5),
			MapOp::Remove {
				object: ObjectId(4),
				point: Point::new(1, 1),
				position: 0,
			},
		]
	);
}

#[test]
fn new_edit_clears_redo() {
	let mut store = UndoStore::new();
	store.record(replace(0, 0, 1), false);
	let step = store.begin_undo().unwrap();
	store.finish_undo(step);
	assert!(store.can_redo());

	store.record(replace(0, 0, 2), false);
	assert!(!store.can_redo());
}

#[test]
fn oldest_steps_are_evicted() {
	let mut store = UndoStore::with_limit(3);
	for i in 0..5 {
		store.record(replace(i, 0, 1), false);
	}

	assert_eq!(store.undo_len(), 3);
	let oldest = store.undo_stack.first().unwrap();
	assert_eq!(oldest.ops.as_slice(), &[replace(2, 0, 1)]);
}

#[test]
fn redo_moves_step_back() {
	let mut store = UndoStore::new();
	store.record(replace(0, 0, 1), false);
	let step = store.begin_undo().unwrap();
	store.finish_undo(step);

	let step = store.begin_redo().unwrap();
	store.finish_redo(step);
	assert!(store.can_undo());
	assert!(!store.can_redo());
	assert!(store.begin_redo().is_none());
}
