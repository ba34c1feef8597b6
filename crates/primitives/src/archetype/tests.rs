use super::*;

#[test]
fn intern_reuses_existing_ids() {
	let mut set = ArchetypeSet::new();
	let wall = set.intern("wall_0");
	let fence = set.intern("fence_0");
	assert_ne!(wall, fence);
	assert_eq!(set.intern("wall_0"), wall);
	assert_eq!(set.len(), 2);
	assert_eq!(set.name(fence), Some("fence_0"));
}

#[test]
fn define_rejects_duplicate_names() {
	let mut set = ArchetypeSet::new();
	let tower = set.define(ArchetypeDef::multi("tower")).unwrap();
	let err = set.define(ArchetypeDef::single("tower")).unwrap_err();
	assert_eq!(
		err,
		ArchetypeSetError::Duplicate {
			name: "tower".into(),
			existing: tower,
		}
	);
	assert!(set.is_multi(tower));
}

#[test]
fn unknown_ids_are_not_multi() {
	let set = ArchetypeSet::new();
	assert!(!set.is_multi(ArchetypeId(7)));
	assert_eq!(set.name(ArchetypeId(7)), None);
	assert!(set.is_empty());
}

#[test]
fn lookup_does_not_intern() {
	let mut set = ArchetypeSet::new();
	assert_eq!(set.lookup("wall_0"), None);
	let id = set.intern("wall_0");
	assert_eq!(set.lookup("wall_0"), Some(id));
	assert_eq!(set.iter().map(|(id, _)| id).collect::<Vec<_>>(), [id]);
}
