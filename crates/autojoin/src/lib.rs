//! Autojoin engine.
//!
//! Tiles of one family (walls, fences, edges) are grouped into an
//! [`AutojoinList`]: sixteen slots indexed by a [`Connectivity`] mask. The
//! [`AutojoinLists`] registry maps every member archetype to its table and
//! rewrites neighbouring squares when a member is inserted or deleted, so
//! adjacent tiles show continuous corners and junctions.
//!
//! The map itself is reached only through the [`MapGrid`] adapter. The engine
//! mutates neighbour squares in place but never the target square: it returns
//! an [`InsertionResult`] and leaves that mutation to the caller.
//!
//! [`Connectivity`]: gridjoin_primitives::Connectivity

pub mod error;
pub mod grid;
pub mod list;
pub mod lists;
pub mod result;
pub mod settings;

pub use error::{DuplicateMembershipError, ListError};
pub use grid::MapGrid;
pub use list::{AutojoinList, AutojoinListBuilder, Membership, Slot};
pub use lists::{AutojoinLists, ListId};
pub use result::InsertionResult;
pub use settings::{AutojoinToggle, JoinSettings};
