use gridjoin_primitives::ArchetypeId;
use thiserror::Error;

use crate::lists::ListId;

/// Errors raised while building an [`AutojoinList`](crate::AutojoinList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
	/// A slot index outside `0..16`.
	#[error("slot index {index} out of range (expected 0..16)")]
	SlotOutOfRange { index: usize },
	/// A slot was given two main archetypes.
	#[error("slot {index} already has main archetype {existing}")]
	MainOccupied { index: usize, existing: ArchetypeId },
	/// An archetype listed in more than one place of the same table.
	#[error("{archetype} listed in slot {first} and slot {second}")]
	DuplicateSlot {
		archetype: ArchetypeId,
		first: usize,
		second: usize,
	},
}

/// An archetype claimed by two autojoin tables.
///
/// Raised by [`AutojoinLists::register`](crate::AutojoinLists::register).
/// This is a content-authoring defect: the rejected table is not registered
/// at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{archetype} contained in more than one autojoin list")]
pub struct DuplicateMembershipError {
	/// The archetype that is already registered.
	pub archetype: ArchetypeId,
	/// Name of the table being registered, if it has one.
	pub list: Option<Box<str>>,
	/// The table that already owns the archetype.
	pub existing: ListId,
}
