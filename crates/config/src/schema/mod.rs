//! TOML schema and conversion into autojoin tables.

use gridjoin_autojoin::{AutojoinList, AutojoinLists, AutojoinToggle, ListId};
use gridjoin_primitives::{ArchetypeId, ArchetypeSet};
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// A whole autojoin configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutojoinConfig {
	#[serde(default)]
	pub settings: Settings,
	/// Families in file order.
	#[serde(default)]
	pub autojoin: Vec<FamilyConfig>,
}

/// Editor settings relevant to autojoining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
	/// Initial state of the autojoin switch.
	#[serde(default = "default_autojoin")]
	pub autojoin: bool,
}

fn default_autojoin() -> bool {
	true
}

impl Default for Settings {
	fn default() -> Self {
		Self { autojoin: default_autojoin() }
	}
}

impl Settings {
	/// Pushes these settings into a live toggle.
	pub fn apply(&self, toggle: &AutojoinToggle) {
		toggle.set(self.autojoin);
	}
}

/// One autojoin family: sixteen connectivity slots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyConfig {
	pub name: String,
	pub slots: Vec<SlotConfig>,
}

/// Archetypes for one connectivity slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SlotConfig {
	/// A single main archetype.
	Main(String),
	/// Main archetype followed by alternates; empty for an unused slot.
	List(Vec<String>),
	/// Explicit form, allowing alternates without a main archetype.
	Table(SlotTable),
}

/// Table form of a slot: `{ main = "..", alternates = [..] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotTable {
	#[serde(default)]
	pub main: Option<String>,
	#[serde(default)]
	pub alternates: Vec<String>,
}

impl SlotConfig {
	/// Splits the slot into its main archetype name and alternate names.
	pub fn parts(&self) -> (Option<&str>, &[String]) {
		match self {
			SlotConfig::Main(main) => (Some(main), &[]),
			SlotConfig::List(names) => match names.split_first() {
				Some((main, alternates)) => (Some(main), alternates),
				None => (None, &[]),
			},
			SlotConfig::Table(table) => (table.main.as_deref(), &table.alternates),
		}
	}
}

impl FamilyConfig {
	/// Resolves archetype names and builds the table.
	pub fn to_list(&self, archetypes: &ArchetypeSet) -> Result<AutojoinList> {
		if self.slots.len() != AutojoinList::SIZE {
			return Err(ConfigError::SlotCount {
				family: self.name.clone(),
				found: self.slots.len(),
			});
		}

		let resolve = |name: &str| -> Result<ArchetypeId> {
			archetypes.lookup(name).ok_or_else(|| ConfigError::UnknownArchetype {
				family: self.name.clone(),
				name: name.to_owned(),
			})
		};

		let mut builder = AutojoinList::builder().name(self.name.as_str());
		for (index, slot) in self.slots.iter().enumerate() {
			let (main, alternates) = slot.parts();
			if let Some(main) = main {
				builder = builder.main(index, resolve(main)?);
			}
			for alternate in alternates {
				builder = builder.alternate(index, resolve(alternate)?);
			}
		}

		builder.build().map_err(|error| ConfigError::List {
			family: self.name.clone(),
			error,
		})
	}
}

impl AutojoinConfig {
	/// Registers every family in file order.
	///
	/// Stops at the first invalid family; families registered before it stay
	/// registered. Families without any archetype are skipped.
	pub fn register_into(&self, lists: &mut AutojoinLists, archetypes: &ArchetypeSet) -> Result<Vec<ListId>> {
		let mut ids = Vec::with_capacity(self.autojoin.len());
		for family in &self.autojoin {
			let list = family.to_list(archetypes)?;
			if list.is_empty() {
				tracing::warn!(family = %family.name, "Autojoin family has no archetypes; skipped");
				continue;
			}
			let id = lists.register(list).map_err(|error| ConfigError::Membership {
				family: family.name.clone(),
				name: archetypes.name(error.archetype).unwrap_or("<unknown>").to_owned(),
				error,
			})?;
			ids.push(id);
		}
		Ok(ids)
	}
}

#[cfg(test)]
mod tests;
