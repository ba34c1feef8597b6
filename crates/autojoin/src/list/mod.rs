//! Connectivity tables.
//!
//! An [`AutojoinList`] holds one family of joinable archetypes. Slot `i`
//! describes the tile whose connected edges are exactly the [`Connectivity`]
//! mask `i`. Each slot may name a main archetype, the canonical tile that the
//! engine rewrites neighbours to, and any number of alternates: visually
//! equivalent variants that report their connectivity but are never rewritten.


use gridjoin_primitives::{ArchetypeId, Connectivity};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::ListError;

/// Role of an archetype within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
	/// Canonical tile for this connectivity, eligible for rewriting.
	Main(Connectivity),
	/// Read-only variant for this connectivity.
	Alternate(Connectivity),
}

impl Membership {
	/// Returns the connectivity of the slot holding the archetype.
	#[inline]
	pub fn index(self) -> Connectivity {
		match self {
			Membership::Main(index) | Membership::Alternate(index) => index,
		}
	}

	#[inline]
	pub fn is_main(self) -> bool {
		matches!(self, Membership::Main(_))
	}

	/// Returns the edges a newly placed tile of this kind may join on.
	///
	/// A main tile takes whatever connectivity its neighbours give it, so it
	/// may join on every edge. An alternate keeps its own fixed pattern.
	#[inline]
	pub fn join_mask(self) -> Connectivity {
		match self {
			Membership::Main(_) => Connectivity::all(),
			Membership::Alternate(index) => index,
		}
	}
}

/// One connectivity slot of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
	main: Option<ArchetypeId>,
	alternates: SmallVec<[ArchetypeId; 2]>,
}

impl Slot {
	pub fn main(&self) -> Option<ArchetypeId> {
		self.main
	}

	pub fn alternates(&self) -> &[ArchetypeId] {
		&self.alternates
	}

	pub fn is_empty(&self) -> bool {
		self.main.is_none() && self.alternates.is_empty()
	}
}

/// A sixteen-slot connectivity table for one tile family.
#[derive(Debug, Clone)]
pub struct AutojoinList {
	name: Option<Box<str>>,
	slots: [Slot; AutojoinList::SIZE],
	members: FxHashMap<ArchetypeId, Membership>,
}

impl AutojoinList {
	/// Number of slots in every table.
	pub const SIZE: usize = Connectivity::COUNT;

	pub fn builder() -> AutojoinListBuilder {
		AutojoinListBuilder::default()
	}

	/// Returns the table's display name, if it was given one.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the slot for `index`. Bits outside the four edges are ignored.
	pub fn slot(&self, index: Connectivity) -> &Slot {
		&self.slots[(index & Connectivity::all()).index()]
	}

	/// Returns the canonical archetype for `index`.
	pub fn main(&self, index: Connectivity) -> Option<ArchetypeId> {
		self.slot(index).main
	}

	pub fn alternates(&self, index: Connectivity) -> &[ArchetypeId] {
		&self.slot(index).alternates
	}

	/// Returns where `archetype` sits in this table.
	pub fn membership(&self, archetype: ArchetypeId) -> Option<Membership> {
		self.members.get(&archetype).copied()
	}

	pub fn contains(&self, archetype: ArchetypeId) -> bool {
		self.members.contains_key(&archetype)
	}

	/// Returns whether `archetype` is the main archetype of some slot.
	pub fn is_main(&self, archetype: ArchetypeId) -> bool {
		self.membership(archetype).is_some_and(Membership::is_main)
	}

	/// Iterates every member, main before alternates, in slot order.
	pub fn archetypes(&self) -> impl Iterator<Item = ArchetypeId> + '_ {
		self.slots
			.iter()
			.flat_map(|slot| slot.main.into_iter().chain(slot.alternates.iter().copied()))
	}

	/// Number of member archetypes.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

/// Builder for [`AutojoinList`].
///
/// Entries are validated in [`build`](Self::build), so the builder can be
/// filled straight from configuration data.
#[derive(Debug, Clone, Default)]
pub struct AutojoinListBuilder {
	name: Option<Box<str>>,
	entries: Vec<(usize, ArchetypeId, bool)>,
}

impl AutojoinListBuilder {
	pub fn name(mut self, name: impl Into<Box<str>>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the main archetype of slot `index`.
	pub fn main(mut self, index: usize, archetype: ArchetypeId) -> Self {
		self.entries.push((index, archetype, true));
		self
	}

	/// Adds an alternate archetype to slot `index`.
	pub fn alternate(mut self, index: usize, archetype: ArchetypeId) -> Self {
		self.entries.push((index, archetype, false));
		self
	}

	/// Fills slot `index` at once.
	pub fn slot(mut self, index: usize, main: Option<ArchetypeId>, alternates: impl IntoIterator<Item = ArchetypeId>) -> Self {
		if let Some(main) = main {
			self = self.main(index, main);
		}
		for alternate in alternates {
			self = self.alternate(index, alternate);
		}
		self
	}

	/// Validates the entries and builds the table.
	pub fn build(self) -> Result<AutojoinList, ListError> {
		let mut slots: [Slot; AutojoinList::SIZE] = std::array::from_fn(|_| Slot::default());
		let mut members = FxHashMap::default();

		for (index, archetype, is_main) in self.entries {
			let Some(connectivity) = Connectivity::from_index(index) else {
				return Err(ListError::SlotOutOfRange { index });
			};
			let membership = if is_main {
				Membership::Main(connectivity)
			} else {
				Membership::Alternate(connectivity)
			};
			if let Some(previous) = members.insert(archetype, membership) {
				return Err(ListError::DuplicateSlot {
					archetype,
					first: previous.index().index(),
					second: index,
				});
			}

			let slot = &mut slots[index];
			if !is_main {
				slot.alternates.push(archetype);
			} else if let Some(existing) = slot.main {
				return Err(ListError::MainOccupied { index, existing });
			} else {
				slot.main = Some(archetype);
			}
		}

		Ok(AutojoinList {
			name: self.name,
			slots,
			members,
		})
	}
}
