//! The autojoin registry.
//!
//! [`AutojoinLists`] owns every registered [`AutojoinList`] and maps each
//! member archetype to the table it belongs to. It is filled once while game
//! data loads and stays read-only while maps are edited.
//!
//! # Neighbour rewriting
//!
//! [`join_insert`](AutojoinLists::join_insert) and
//! [`join_delete`](AutojoinLists::join_delete) visit the four orthogonal
//! neighbours in [`Direction::ALL`] order. Only main members are ever passed
//! to [`MapGrid::replace_archetype`]; alternates are read for their
//! connectivity and otherwise left alone.
//!
//! [`Direction::ALL`]: gridjoin_primitives::Direction::ALL

mod delete;
mod insert;
mod scan;

use std::sync::Arc;

use gridjoin_primitives::{ArchetypeId, Connectivity, Point};
use rustc_hash::FxHashMap;

use crate::error::DuplicateMembershipError;
use crate::grid::MapGrid;
use crate::list::{AutojoinList, Membership};
use crate::settings::{AutojoinToggle, JoinSettings};
use scan::Member;

/// Handle to a table registered in [`AutojoinLists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(pub u32);

impl ListId {
	#[inline]
	fn index(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for ListId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ListId({})", self.0)
	}
}

/// Registry mapping archetypes to their autojoin tables.
pub struct AutojoinLists {
	lists: Vec<AutojoinList>,
	by_archetype: FxHashMap<ArchetypeId, ListId>,
	settings: Arc<dyn JoinSettings>,
}

impl AutojoinLists {
	/// Creates an empty registry reading the autojoin switch from `settings`.
	pub fn new(settings: Arc<dyn JoinSettings>) -> Self {
		Self {
			lists: Vec::new(),
			by_archetype: FxHashMap::default(),
			settings,
		}
	}

	/// Adds a table.
	///
	/// Every member (main and alternate) is checked before anything is
	/// inserted, so a rejected table leaves the registry untouched.
	pub fn register(&mut self, list: AutojoinList) -> Result<ListId, DuplicateMembershipError> {
		if let Some((archetype, existing)) = list
			.archetypes()
			.find_map(|archetype| self.by_archetype.get(&archetype).map(|&existing| (archetype, existing)))
		{
			return Err(DuplicateMembershipError {
				archetype,
				list: list.name().map(Into::into),
				existing,
			});
		}

		let id = ListId(self.lists.len() as u32);
		self.by_archetype.extend(list.archetypes().map(|archetype| (archetype, id)));
		tracing::debug!(list = list.name().unwrap_or("<unnamed>"), %id, members = list.len(), "Registered autojoin list");
		self.lists.push(list);
		Ok(id)
	}

	pub fn list(&self, id: ListId) -> Option<&AutojoinList> {
		self.lists.get(id.index())
	}

	/// Returns the table owning `archetype`.
	pub fn list_of(&self, archetype: ArchetypeId) -> Option<(ListId, &AutojoinList)> {
		let id = *self.by_archetype.get(&archetype)?;
		Some((id, &self.lists[id.index()]))
	}

	/// Number of registered tables.
	pub fn len(&self) -> usize {
		self.lists.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lists.is_empty()
	}

	pub fn settings(&self) -> &Arc<dyn JoinSettings> {
		&self.settings
	}

	/// Resolves the table and role of `archetype` if it takes part in joining.
	fn joinable<G: MapGrid>(&self, grid: &G, archetype: ArchetypeId) -> Option<(ListId, &AutojoinList, Membership)> {
		if !self.settings.autojoin_enabled() || grid.is_multi(archetype) {
			return None;
		}
		let (id, list) = self.list_of(archetype)?;
		let membership = list.membership(archetype)?;
		Some((id, list, membership))
	}
}

impl Default for AutojoinLists {
	fn default() -> Self {
		Self::new(Arc::new(AutojoinToggle::default()))
	}
}

impl std::fmt::Debug for AutojoinLists {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AutojoinLists")
			.field("lists", &self.lists.len())
			.field("archetypes", &self.by_archetype.len())
			.field("enabled", &self.settings.autojoin_enabled())
			.finish()
	}
}

/// Rewrites a main neighbour to the canonical archetype for `updated`.
///
/// Leaves the object alone when the table has no main archetype for
/// `updated` or when it already shows that archetype.
fn retarget<G: MapGrid>(grid: &mut G, list: &AutojoinList, member: Member<G::Object>, at: Point, updated: Connectivity) {
	let Some(target) = list.main(updated) else {
		tracing::debug!(list = list.name().unwrap_or("<unnamed>"), %at, index = %updated, "No main archetype for connectivity; neighbour kept");
		return;
	};
	if target == member.archetype {
		return;
	}
	tracing::trace!(%at, from = %member.membership.index(), to = %updated, "Rewriting neighbour");
	grid.replace_archetype(member.object, target);
}
