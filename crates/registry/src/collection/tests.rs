use blueprint_primitives::BlockPos;
use pretty_assertions::assert_eq;

use super::*;
use crate::region::builtins::{CuboidRegion, PointRegion};

#[test]
fn define_and_lookup_by_name() {
	let mut collection = RegionCollection::new();
	let id = collection.define("spawn", PointRegion::new(BlockPos::new(0, 64, 0))).unwrap();

	assert_eq!(collection.id("spawn"), Some(id));
	assert_eq!(collection.get("spawn").unwrap().tag(), "point");
	assert!(collection.get("lobby").is_none());
	assert_eq!(collection.names().collect::<Vec<_>>(), vec!["spawn"]);
}

#[test]
fn bind_rejects_dangling_handle() {
	let mut collection = RegionCollection::new();
	let stray = RegionId::from_index(3).unwrap();
	assert_eq!(collection.bind("ghost", stray), Err(RegionError::DanglingHandle(stray)));
	assert!(collection.is_empty());
}

#[test]
fn remove_unbinds_but_keeps_region() {
	let mut collection = RegionCollection::new();
	let id = collection.define("a", PointRegion::new(BlockPos::ORIGIN)).unwrap();
	assert_eq!(collection.remove("a"), Some(id));
	assert!(!collection.contains_name("a"));
	assert!(collection.arena().contains(id));
}

#[test]
fn combined_skips_missing_names() {
	let mut collection = RegionCollection::new();
	collection.define("a", PointRegion::new(BlockPos::new(1, 0, 0))).unwrap();
	collection.define("b", PointRegion::new(BlockPos::new(2, 0, 0))).unwrap();

	let id = collection.combined(["a", "missing", "b"], BlockPos::new(0, 10, 0)).unwrap();
	let view = collection.arena().view(id).unwrap();
	assert_eq!(view.children().count(), 2);
	assert_eq!(
		view.positions().into_iter().collect::<Vec<_>>(),
		vec![BlockPos::new(1, 10, 0), BlockPos::new(2, 10, 0)]
	);
}

#[test]
fn combined_with_nothing_is_empty() {
	let mut collection = RegionCollection::new();
	let id = collection.combined(["nope"], BlockPos::ORIGIN).unwrap();
	assert_eq!(collection.arena().view(id).unwrap().tag(), "empty");
}

#[test]
fn equality_is_structural() {
	let mut first = RegionCollection::new();
	first.define("box", CuboidRegion::new(BlockPos::ORIGIN, BlockPos::new(2, 2, 2))).unwrap();
	first.define("dot", PointRegion::new(BlockPos::new(5, 5, 5))).unwrap();

	let mut second = RegionCollection::new();
	second.define("dot", PointRegion::new(BlockPos::new(5, 5, 5))).unwrap();
	second.define("box", CuboidRegion::new(BlockPos::new(2, 2, 2), BlockPos::ORIGIN)).unwrap();
	assert_eq!(first, second);

	second.define("dot", PointRegion::new(BlockPos::new(5, 5, 6))).unwrap();
	assert_ne!(first, second);
}
