//! Archetype handles.
//!
//! The autojoin engine never looks inside an archetype: it only needs a
//! stable identity to key its tables on. [`ArchetypeSet`] interns archetype
//! names into [`ArchetypeId`] handles so that two archetypes share an id only
//! when they share a name.

#[cfg(test)]
mod tests;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Opaque identity of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArchetypeId(pub u32);

impl ArchetypeId {
	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}

	#[inline]
	fn index(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for ArchetypeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ArchetypeId({})", self.0)
	}
}

/// Metadata kept for each archetype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeDef {
	/// Unique archetype name.
	pub name: Box<str>,
	/// Whether the archetype spans several squares (composite object).
	pub multi: bool,
}

impl ArchetypeDef {
	/// Creates a single-square archetype definition.
	pub fn single(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			multi: false,
		}
	}

	/// Creates a multi-square archetype definition.
	pub fn multi(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			multi: true,
		}
	}
}

/// Errors raised while defining archetypes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchetypeSetError {
	/// An archetype with this name was already defined.
	#[error("archetype '{name}' defined twice")]
	Duplicate { name: Box<str>, existing: ArchetypeId },
}

/// Catalog interning archetype names into [`ArchetypeId`] handles.
#[derive(Debug, Default, Clone)]
pub struct ArchetypeSet {
	defs: Vec<ArchetypeDef>,
	by_name: FxHashMap<Box<str>, ArchetypeId>,
}

impl ArchetypeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a new archetype.
	///
	/// Fails if the name is already taken, even with identical metadata.
	pub fn define(&mut self, def: ArchetypeDef) -> Result<ArchetypeId, ArchetypeSetError> {
		if let Some(&existing) = self.by_name.get(&def.name) {
			return Err(ArchetypeSetError::Duplicate { name: def.name, existing });
		}
		let id = ArchetypeId(self.defs.len() as u32);
		self.by_name.insert(def.name.clone(), id);
		self.defs.push(def);
		Ok(id)
	}

	/// Returns the id for `name`, defining a single-square archetype if unknown.
	pub fn intern(&mut self, name: &str) -> ArchetypeId {
		if let Some(&id) = self.by_name.get(name) {
			return id;
		}
		let id = ArchetypeId(self.defs.len() as u32);
		self.by_name.insert(name.into(), id);
		self.defs.push(ArchetypeDef::single(name));
		id
	}

	/// Looks up an archetype by name.
	pub fn lookup(&self, name: &str) -> Option<ArchetypeId> {
		self.by_name.get(name).copied()
	}

	pub fn get(&self, id: ArchetypeId) -> Option<&ArchetypeDef> {
		self.defs.get(id.index())
	}

	/// Returns the archetype's name, if `id` belongs to this set.
	pub fn name(&self, id: ArchetypeId) -> Option<&str> {
		self.get(id).map(|def| &*def.name)
	}

	/// Returns whether `id` is a multi-square archetype. Unknown ids are not.
	pub fn is_multi(&self, id: ArchetypeId) -> bool {
		self.get(id).is_some_and(|def| def.multi)
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Iterates all archetypes in definition order.
	pub fn iter(&self) -> impl Iterator<Item = (ArchetypeId, &ArchetypeDef)> {
		self.defs.iter().enumerate().map(|(i, def)| (ArchetypeId(i as u32), def))
	}
}
