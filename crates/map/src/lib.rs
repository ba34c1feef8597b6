//! Map model for placing archetype objects on a grid.
//!
//! [`MapModel`] stores squares as stacks of object handles in a flat arena and
//! implements [`MapGrid`](gridjoin_autojoin::MapGrid), so the autojoin engine
//! can rewrite neighbouring tiles in place. Every mutation is reported to
//! listeners as a [`MapEvent`] and recorded in grouped undo history.
//!
//! The [`pipeline`] module holds the placement operations an editor calls:
//! they consult the autojoin registry and honour its decision for the
//! target square.

pub mod error;
pub mod event;
pub mod model;
pub mod pipeline;
pub mod undo;

pub use error::MapError;
pub use event::{MapEvent, MapListener};
pub use model::{MapModel, ObjectId, ObjectInfo};
pub use undo::{MapOp, UndoStep, UndoStore};
