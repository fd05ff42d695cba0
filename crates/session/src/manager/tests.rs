use blueprint_primitives::BlockPos;
use blueprint_registry::{CuboidRegion, PointRegion, RegionTypeRegistry};
use pretty_assertions::assert_eq;

use super::*;
use crate::error::StorageError;
use crate::session::LevelSession;

fn registry() -> RegionTypeRegistry {
	RegionTypeRegistry::with_builtins()
}

#[test]
fn starts_without_session() {
	let manager = SessionManager::default();
	assert!(!manager.is_active());
	assert!(manager.regions().is_none());
	assert!(matches!(manager.save(registry().codec()), Err(SaveError::NoSession)));
}

#[test]
fn fresh_location_yields_empty_collection() {
	let dir = tempfile::tempdir().unwrap();
	let registry = registry();
	let mut manager = SessionManager::default();

	let outcome = manager.on_session_change(&LevelSession::new(dir.path()), registry.codec());
	assert!(matches!(outcome, LoadOutcome::Fresh));
	assert!(manager.regions().unwrap().is_empty());
	assert_eq!(manager.storage_path().unwrap(), dir.path().join("blueprint/regions.dat"));
}

#[test]
fn saved_regions_reload_equal() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let registry = registry();
	let mut manager = SessionManager::default();
	manager.on_session_change(&session, registry.codec());

	let regions = manager.regions_mut().unwrap();
	let spawn = regions.define("spawn", PointRegion::new(BlockPos::new(0, 64, 0))).unwrap();
	let pit = regions
		.define("pit", CuboidRegion::new(BlockPos::new(-3, 0, -3), BlockPos::new(3, 10, 3)))
		.unwrap();
	let both = regions.arena_mut().compound(vec![spawn, pit]).unwrap();
	regions.bind("all", both).unwrap();
	let expected = manager.regions().unwrap().clone();

	let written = manager.save(registry.codec()).unwrap().to_path_buf();
	assert!(written.exists());

	let mut reopened = SessionManager::default();
	let outcome = reopened.on_session_change(&session, registry.codec());
	assert!(matches!(outcome, LoadOutcome::Loaded { regions: 3 }));
	assert_eq!(reopened.regions().unwrap(), &expected);
}

#[test]
fn new_session_replaces_instead_of_merging() {
	let first = tempfile::tempdir().unwrap();
	let second = tempfile::tempdir().unwrap();
	let registry = registry();
	let mut manager = SessionManager::default();

	manager.on_session_change(&LevelSession::new(first.path()), registry.codec());
	manager
		.regions_mut()
		.unwrap()
		.define("only_in_first", PointRegion::new(BlockPos::ORIGIN))
		.unwrap();

	manager.on_session_change(&LevelSession::new(second.path()), registry.codec());
	assert!(manager.regions().unwrap().is_empty());
	assert!(manager.storage_path().unwrap().starts_with(second.path()));
}

#[test]
fn reopening_same_location_discards_unsaved_changes() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let registry = registry();
	let mut manager = SessionManager::default();

	manager.on_session_change(&session, registry.codec());
	manager
		.regions_mut()
		.unwrap()
		.define("unsaved", PointRegion::new(BlockPos::ORIGIN))
		.unwrap();

	manager.on_session_change(&session, registry.codec());
	assert!(manager.regions().unwrap().is_empty());
}

#[test]
fn corrupt_file_is_recovered_as_empty() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let config = SessionConfig::default();
	let path = config.storage_path(dir.path());
	std::fs::create_dir_all(path.parent().unwrap()).unwrap();
	std::fs::write(&path, b"definitely not a region file").unwrap();

	let registry = registry();
	let mut manager = SessionManager::new(config);
	let outcome = manager.on_session_change(&session, registry.codec());

	let LoadOutcome::Recovered(LoadError::Storage { path: reported, .. }) = outcome else {
		panic!("expected a recovered storage error, got {outcome:?}");
	};
	assert_eq!(reported, path);
	assert!(manager.is_active());
	assert!(manager.regions().unwrap().is_empty());
}

#[test]
fn deeply_nested_file_is_recovered_as_empty() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let config = SessionConfig::default();
	let path = config.storage_path(dir.path());
	std::fs::create_dir_all(path.parent().unwrap()).unwrap();

	// A million single-element lists, ending in an int.
	let mut data = crate::storage::MAGIC.to_vec();
	data.extend(crate::storage::SCHEMA_VERSION.to_le_bytes());
	data.extend([6u8, 1].repeat(1_000_000));
	data.extend([1u8, 0]);
	std::fs::write(&path, data).unwrap();

	let registry = registry();
	let mut manager = SessionManager::new(config);
	let outcome = manager.on_session_change(&session, registry.codec());

	let LoadOutcome::Recovered(LoadError::Storage { source, .. }) = outcome else {
		panic!("expected a recovered storage error, got {outcome:?}");
	};
	assert!(matches!(source, StorageError::Postcard(_)));
	assert!(manager.regions().unwrap().is_empty());
}

#[test]
fn regions_at_depth_limit_reload() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let registry = registry();
	let codec = registry.codec().with_max_depth(16);
	let mut manager = SessionManager::default();
	manager.on_session_change(&session, codec);

	let regions = manager.regions_mut().unwrap();
	let mut id = regions.arena_mut().insert(PointRegion::new(BlockPos::ORIGIN)).unwrap();
	for _ in 1..16 {
		id = regions.arena_mut().compound(vec![id]).unwrap();
	}
	regions.bind("deep", id).unwrap();
	manager.save(codec).unwrap();

	let mut reopened = SessionManager::default();
	let outcome = reopened.on_session_change(&session, codec);
	assert!(matches!(outcome, LoadOutcome::Loaded { regions: 1 }), "{outcome:?}");
	assert_eq!(reopened.regions().unwrap(), manager.regions().unwrap());
}

#[test]
fn unknown_region_type_on_disk_is_recovered_as_empty() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let full = registry();

	let mut manager = SessionManager::default();
	manager.on_session_change(&session, full.codec());
	manager
		.regions_mut()
		.unwrap()
		.define("spawn", PointRegion::new(BlockPos::ORIGIN))
		.unwrap();
	manager.save(full.codec()).unwrap();

	let mut builder = RegionTypeRegistry::builder();
	builder.register_variant::<CuboidRegion>("boxes only").unwrap();
	let partial = builder.build();

	let mut reopened = SessionManager::default();
	let outcome = reopened.on_session_change(&session, partial.codec());
	assert!(matches!(outcome, LoadOutcome::Recovered(LoadError::Codec { .. })));
	assert!(reopened.regions().unwrap().is_empty());
}

#[test]
fn custom_config_changes_storage_location() {
	let dir = tempfile::tempdir().unwrap();
	let config = SessionConfig::from_toml_str("data_dir = \"data/regions\"\nregions_file = \"main.bin\"").unwrap();
	let registry = registry();
	let mut manager = SessionManager::new(config);

	manager.on_session_change(&LevelSession::new(dir.path()), registry.codec());
	let path = manager.save(registry.codec()).unwrap();
	assert_eq!(path, dir.path().join("data/regions/main.bin"));
}
