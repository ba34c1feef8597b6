use gridjoin_primitives::{ArchetypeId, Connectivity, Direction, Point};

use super::{AutojoinLists, ListId, retarget};
use crate::grid::MapGrid;
use crate::list::{AutojoinList, Membership};
use crate::result::InsertionResult;

impl AutojoinLists {
	/// Joins `archetype` with its neighbours before it is placed at `point`.
	///
	/// Main neighbours of the same table are rewritten in place to connect
	/// toward (or, for an alternate being placed, disconnect from) `point`.
	/// The target square itself is left to the caller, which must honour the
	/// returned [`InsertionResult`] instead of inserting `archetype` verbatim.
	///
	/// Archetypes outside any table, multi-square archetypes and calls made
	/// while autojoin is disabled yield [`InsertionResult::Insert`] with
	/// `archetype` unchanged.
	pub fn join_insert<G: MapGrid>(&self, grid: &mut G, point: Point, archetype: ArchetypeId) -> InsertionResult<G::Object> {
		let Some((id, list, membership)) = self.joinable(grid, archetype) else {
			return InsertionResult::Insert(archetype);
		};

		let existing = self.find_member(grid, point, id);
		if let Some(existing) = &existing
			&& membership.is_main()
			&& existing.membership == membership
		{
			tracing::debug!(%point, %archetype, "Canonical tile already present; insertion rejected");
			return InsertionResult::Rejected;
		}

		let reach = membership.join_mask();
		let mut joined = Connectivity::empty();
		for dir in Direction::ALL {
			if self.join_neighbour(grid, point, id, list, dir, reach) {
				joined = joined.with(dir);
			}
		}

		let archetype = match membership {
			Membership::Main(_) => list.main(joined).unwrap_or_else(|| {
				tracing::debug!(list = list.name().unwrap_or("<unnamed>"), %point, index = %joined, "No main archetype for connectivity; inserting as given");
				archetype
			}),
			Membership::Alternate(_) => archetype,
		};

		match existing {
			Some(existing) => InsertionResult::Mutate {
				object: existing.object,
				archetype,
			},
			None => InsertionResult::Insert(archetype),
		}
	}

	/// Updates the neighbour toward `dir` and returns whether the new tile
	/// connects on that edge.
	fn join_neighbour<G: MapGrid>(
		&self,
		grid: &mut G,
		point: Point,
		id: ListId,
		list: &AutojoinList,
		dir: Direction,
		reach: Connectivity,
	) -> bool {
		let Some(at) = point.step(dir).filter(|&at| grid.is_valid(at)) else {
			return false;
		};
		let Some(member) = self.find_member(grid, at, id) else {
			return false;
		};

		let facing = dir.opposite();
		match member.membership {
			Membership::Alternate(index) => index.connects(facing),
			Membership::Main(current) => {
				let updated = if reach.connects(dir) {
					current.with(facing)
				} else {
					current.without(facing)
				};
				retarget(grid, list, member, at, updated);
				true
			}
		}
	}
}
