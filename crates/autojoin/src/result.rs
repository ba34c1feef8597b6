use gridjoin_primitives::ArchetypeId;

/// What the caller should do with the target square after
/// [`AutojoinLists::join_insert`](crate::AutojoinLists::join_insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum InsertionResult<O> {
	/// Change the archetype of `object`, a member of the same table already on
	/// the target square.
	Mutate { object: O, archetype: ArchetypeId },
	/// Insert a new object of this archetype.
	Insert(ArchetypeId),
	/// Do nothing: the square already holds this exact canonical tile.
	Rejected,
}

impl<O> InsertionResult<O> {
	/// Returns the archetype to apply, if any.
	pub fn archetype(&self) -> Option<ArchetypeId> {
		match self {
			InsertionResult::Mutate { archetype, .. } | InsertionResult::Insert(archetype) => Some(*archetype),
			InsertionResult::Rejected => None,
		}
	}

	pub fn is_rejected(&self) -> bool {
		matches!(self, InsertionResult::Rejected)
	}
}
