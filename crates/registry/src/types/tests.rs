use pretty_assertions::assert_eq;

use super::*;
use crate::error::RegistryError;
use crate::region::builtins::{self, CuboidRegion, PointRegion};

#[test]
fn builtins_are_sorted_by_tag() {
	let registry = RegionTypeRegistry::with_builtins();
	let tags: Vec<_> = registry.iter().map(|def| def.tag).collect();
	assert_eq!(tags, vec!["compound", "cuboid", "empty", "point", "positions", "sphere"]);
}

#[test]
fn duplicate_tag_leaves_builder_unchanged() {
	let mut builder = RegionTypeRegistryBuilder::new();
	builder.register_variant::<PointRegion>("first").unwrap();

	let err = builder.register_variant::<PointRegion>("second").unwrap_err();
	assert_eq!(err, RegistryError::DuplicateTag { tag: "point" });
	assert_eq!(builder.len(), 1);

	let registry = builder.build();
	assert_eq!(registry.resolve("point").unwrap().description, "first");
}

#[test]
fn register_all_conflicts_with_preloaded_builtins() {
	let mut builder = RegionTypeRegistryBuilder::with_builtins();
	assert_eq!(builder.len(), builtins::ALL.len());
	assert!(matches!(builtins::register_all(&mut builder), Err(RegistryError::DuplicateTag { .. })));
	assert_eq!(builder.len(), builtins::ALL.len());
}

#[test]
fn resolve_reports_unknown_tag() {
	let mut builder = RegionTypeRegistry::builder();
	builder.register_variant::<CuboidRegion>("box").unwrap();
	let registry = builder.build();

	assert!(registry.contains("cuboid"));
	assert_eq!(
		registry.resolve("sphere").unwrap_err(),
		RegistryError::UnknownTag { tag: "sphere".to_owned() }
	);
}

#[test]
fn definition_debug_omits_functions() {
	let rendered = format!("{:?}", builtins::CUBOID);
	assert!(rendered.contains("\"cuboid\""));
	assert!(!rendered.contains("encode"));
}
