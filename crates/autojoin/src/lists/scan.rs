//! Square lookups for members of one table.

use gridjoin_primitives::{ArchetypeId, Point};

use super::{AutojoinLists, ListId};
use crate::grid::MapGrid;
use crate::list::Membership;

/// A table member found on a square.
#[derive(Debug, Clone, Copy)]
pub(super) struct Member<O> {
	pub object: O,
	pub archetype: ArchetypeId,
	pub membership: Membership,
}

impl AutojoinLists {
	/// Returns the top-most member of `list` at `point`, main or alternate.
	///
	/// Lower members of the same table on that square are ignored.
	pub(super) fn find_member<G: MapGrid>(&self, grid: &G, point: Point, list: ListId) -> Option<Member<G::Object>> {
		self.members_at(grid, point, list).next()
	}

	/// Returns the top-most main member of `list` at `point`.
	pub(super) fn find_main_member<G: MapGrid>(&self, grid: &G, point: Point, list: ListId) -> Option<Member<G::Object>> {
		self.members_at(grid, point, list).find(|member| member.membership.is_main())
	}

	fn members_at<'a, G: MapGrid>(&'a self, grid: &'a G, point: Point, list: ListId) -> impl Iterator<Item = Member<G::Object>> + 'a {
		let table = &self.lists[list.index()];
		grid.objects_top_down(point).filter_map(move |(object, archetype)| {
			if self.by_archetype.get(&archetype) != Some(&list) {
				return None;
			}
			let membership = table.membership(archetype)?;
			Some(Member {
				object,
				archetype,
				membership,
			})
		})
	}
}
