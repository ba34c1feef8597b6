use gridjoin_primitives::{ArchetypeId, Direction, Point};

use super::{AutojoinLists, retarget};
use crate::grid::MapGrid;

impl AutojoinLists {
	/// Disconnects the neighbours of an object about to be removed from
	/// `point`.
	///
	/// Must be called while the object is still on the map; removing it is
	/// the caller's job. Only edges the removed tile could join on are
	/// retracted, and only main neighbours are rewritten.
	pub fn join_delete<G: MapGrid>(&self, grid: &mut G, point: Point, archetype: ArchetypeId) {
		let Some((id, list, membership)) = self.joinable(grid, archetype) else {
			return;
		};

		let reach = membership.join_mask();
		for dir in Direction::ALL {
			if !reach.connects(dir) {
				continue;
			}
			let Some(at) = point.step(dir).filter(|&at| grid.is_valid(at)) else {
				continue;
			};
			let Some(member) = self.find_main_member(grid, at, id) else {
				continue;
			};
			let updated = member.membership.index().without(dir.opposite());
			retarget(grid, list, member, at, updated);
		}
	}
}
