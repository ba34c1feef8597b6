use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gridjoin_autojoin::{AutojoinLists, AutojoinToggle, ListError, Membership};
use gridjoin_primitives::{ArchetypeDef, ArchetypeSet, Connectivity};
use pretty_assertions::assert_eq;

use super::*;
use crate::load::parse_str;

fn mask(index: usize) -> Connectivity {
	Connectivity::from_index(index).unwrap()
}

fn archetypes() -> ArchetypeSet {
	let mut set = ArchetypeSet::new();
	for i in 0..16 {
		set.define(ArchetypeDef::single(format!("wall_{i}"))).unwrap();
		set.define(ArchetypeDef::single(format!("fence_{i}"))).unwrap();
	}
	set.define(ArchetypeDef::single("wall_3_mossy")).unwrap();
	set.define(ArchetypeDef::single("wall_5_cracked")).unwrap();
	set
}

/// A family document whose slots are `wall_0`..`wall_15` except for overrides.
fn family(name: &str, prefix: &str, overrides: &[(usize, &str)]) -> String {
	let slots: Vec<String> = (0..16)
		.map(|i| {
			overrides
				.iter()
				.find(|(index, _)| *index == i)
				.map(|(_, slot)| (*slot).to_owned())
				.unwrap_or_else(|| format!("\"{prefix}_{i}\""))
		})
		.collect();
	format!("[[autojoin]]\nname = \"{name}\"\nslots = [{}]\n", slots.join(", "))
}

#[test]
fn slot_forms_parse() {
	let doc = family(
		"wall",
		"wall",
		&[(3, "{ alternates = [\"wall_3_mossy\"] }"), (5, "[\"wall_5\", \"wall_5_cracked\"]"), (7, "[]")],
	);
	let config = parse_str(&doc).unwrap();

	assert_eq!(config.settings, Settings { autojoin: true });
	let slots = &config.autojoin[0].slots;
	assert_eq!(slots.len(), 16);
	assert_eq!(slots[0], SlotConfig::Main("wall_0".into()));
	assert_eq!(slots[3].parts(), (None, &["wall_3_mossy".to_owned()][..]));
	assert_eq!(slots[5].parts(), (Some("wall_5"), &["wall_5_cracked".to_owned()][..]));
	assert_eq!(slots[7].parts(), (None, &[][..]));
}

#[test]
fn family_resolves_to_table() {
	let set = archetypes();
	let doc = family("wall", "wall", &[(3, "{ main = \"wall_3\", alternates = [\"wall_3_mossy\"] }"), (7, "[]")]);
	let list = parse_str(&doc).unwrap().autojoin[0].to_list(&set).unwrap();

	assert_eq!(list.name(), Some("wall"));
	assert_eq!(list.main(mask(0)), set.lookup("wall_0"));
	assert_eq!(list.main(mask(7)), None);
	assert_eq!(list.alternates(mask(3)), &[set.lookup("wall_3_mossy").unwrap()]);
	assert_eq!(
		list.membership(set.lookup("wall_3_mossy").unwrap()),
		Some(Membership::Alternate(mask(3)))
	);
}

#[test]
fn wrong_slot_count_fails() {
	let set = archetypes();
	let config = parse_str("[[autojoin]]\nname = \"short\"\nslots = [\"wall_0\", \"wall_1\"]").unwrap();

	let err = config.autojoin[0].to_list(&set).unwrap_err();
	assert!(matches!(err, ConfigError::SlotCount { ref family, found: 2 } if family == "short"));
}

#[test]
fn unknown_archetype_fails() {
	let set = archetypes();
	let config = parse_str(&family("wall", "wall", &[(9, "\"wall_9_typo\"")])).unwrap();

	let err = config.autojoin[0].to_list(&set).unwrap_err();
	assert!(matches!(err, ConfigError::UnknownArchetype { ref name, .. } if name == "wall_9_typo"));
}

#[test]
fn archetype_in_two_slots_fails() {
	let set = archetypes();
	let config = parse_str(&family("wall", "wall", &[(4, "\"wall_1\"")])).unwrap();

	let err = config.autojoin[0].to_list(&set).unwrap_err();
	assert!(matches!(err, ConfigError::List { error: ListError::DuplicateSlot { .. }, .. }));
}

#[test]
fn register_in_file_order() {
	let set = archetypes();
	let doc = format!("{}{}", family("wall", "wall", &[]), family("fence", "fence", &[]));
	let mut lists = AutojoinLists::default();

	let ids = parse_str(&doc).unwrap().register_into(&mut lists, &set).unwrap();

	assert_eq!(ids.len(), 2);
	assert_eq!(lists.list(ids[0]).and_then(|list| list.name()), Some("wall"));
	assert_eq!(lists.list(ids[1]).and_then(|list| list.name()), Some("fence"));
	assert_eq!(lists.list_of(set.lookup("fence_15").unwrap()).map(|(id, _)| id), Some(ids[1]));
}

#[test]
fn shared_archetype_aborts_registration() {
	let set = archetypes();
	let doc = format!("{}{}", family("wall", "wall", &[]), family("fence", "fence", &[(2, "\"wall_2\"")]));
	let mut lists = AutojoinLists::default();

	let err = parse_str(&doc).unwrap().register_into(&mut lists, &set).unwrap_err();

	assert!(matches!(err, ConfigError::Membership { ref family, ref name, .. } if family == "fence" && name == "wall_2"));
	assert_eq!(lists.len(), 1);
	assert!(lists.list_of(set.lookup("fence_0").unwrap()).is_none());
}

#[test]
fn empty_family_is_skipped() {
	let set = archetypes();
	let empty: Vec<(usize, &str)> = (0..16).map(|i| (i, "[]")).collect();
	let mut lists = AutojoinLists::default();

	let ids = parse_str(&family("nothing", "wall", &empty)).unwrap().register_into(&mut lists, &set).unwrap();

	assert!(ids.is_empty());
	assert!(lists.is_empty());
}

#[test]
fn settings_drive_toggle() {
	let config = parse_str("[settings]\nautojoin = false").unwrap();
	let toggle = AutojoinToggle::default();
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	toggle.on_change(move |_| {
		seen.fetch_add(1, Ordering::Relaxed);
	});

	config.settings.apply(&toggle);
	config.settings.apply(&toggle);

	assert!(!toggle.is_enabled());
	assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn missing_sections_use_defaults() {
	assert_eq!(parse_str("").unwrap(), AutojoinConfig::default());
	assert!(AutojoinConfig::default().settings.autojoin);
}

#[test]
fn misspelled_slot_keys_are_rejected() {
	let misspelled_main = family("wall", "wall", &[(0, "{ mian = \"wall_0\" }")]);
	assert!(matches!(parse_str(&misspelled_main), Err(ConfigError::Toml(_))));

	let misspelled_alternates = family("wall", "wall", &[(1, "{ main = \"wall_1\", alternate = [\"wall_3_mossy\"] }")]);
	assert!(matches!(parse_str(&misspelled_alternates), Err(ConfigError::Toml(_))));
}

#[test]
fn table_slot_parses_into_slot_table() {
	let doc = family("wall", "wall", &[(3, "{ main = \"wall_3\", alternates = [\"wall_3_mossy\"] }")]);
	let config = parse_str(&doc).unwrap();

	assert_eq!(
		config.autojoin[0].slots[3],
		SlotConfig::Table(SlotTable {
			main: Some("wall_3".into()),
			alternates: vec!["wall_3_mossy".into()],
		})
	);
}
