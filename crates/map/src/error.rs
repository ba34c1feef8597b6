use gridjoin_primitives::Point;
use thiserror::Error;

use crate::model::ObjectId;

/// Errors from map mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
	/// The point lies outside the map.
	#[error("point {0} is outside the map")]
	OutOfBounds(Point),
	/// No object with this id was ever created on the map.
	#[error("unknown object {0}")]
	UnknownObject(ObjectId),
	/// The object exists but is not currently placed on a square.
	#[error("object {0} is not on the map")]
	NotPlaced(ObjectId),
}
