use blueprint_primitives::BlockPos;
use blueprint_registry::{PointRegion, RegionTypeRegistry, SphereRegion};
use pretty_assertions::assert_eq;

use super::*;

fn sample() -> PlayerData {
	let mut selection = RegionCollection::new();
	selection.define("corner", PointRegion::new(BlockPos::new(4, 70, 4))).unwrap();
	selection
		.define("dome", SphereRegion::new(BlockPos::new(0, 70, 0), 6.0).unwrap())
		.unwrap();
	PlayerData {
		render_particles: true,
		selection,
	}
}

#[test]
fn payload_survives_write_then_read() {
	let registry = RegionTypeRegistry::with_builtins();
	let writer = PlayerDataSlot::new(Some(sample()));
	let mut record = Compound::new().with("health", 20i32);

	write_player(&writer, &mut record, registry.codec()).unwrap();
	assert_eq!(record.get_int("health").unwrap(), 20);
	assert_eq!(record.get_compound(PLAYER_DATA_KEY).unwrap().get_byte("render_particles").unwrap(), 1);

	let mut reader = PlayerDataSlot::default();
	read_player(&mut reader, &record, registry.codec());
	assert_eq!(reader.blueprint_data(), Some(&sample()));
}

#[test]
fn absent_payload_writes_nothing() {
	let registry = RegionTypeRegistry::with_builtins();
	let mut record = Compound::new();
	write_player(&PlayerDataSlot::default(), &mut record, registry.codec()).unwrap();
	assert!(record.is_empty());
}

#[test]
fn missing_key_reads_as_absent() {
	let registry = RegionTypeRegistry::with_builtins();
	let mut player = PlayerDataSlot::new(Some(sample()));
	read_player(&mut player, &Compound::new(), registry.codec());
	assert_eq!(player.blueprint_data(), None);
}

#[test]
fn corrupt_record_reads_as_absent() {
	let registry = RegionTypeRegistry::with_builtins();
	let corrupt = [
		Tag::Int(7),
		Tag::Compound(Compound::new().with("render_particles", true)),
		Tag::Compound(
			Compound::new()
				.with("render_particles", false)
				.with("selection", Compound::new().with("regions", Compound::new().with("x", Compound::new().with("type", "nope")))),
		),
	];
	for payload in corrupt {
		let record = Compound::new().with(PLAYER_DATA_KEY, payload);
		let mut player = PlayerDataSlot::default();
		read_player(&mut player, &record, registry.codec());
		assert_eq!(player.blueprint_data(), None);
	}
}

#[test]
fn copy_moves_payload_to_replacement() {
	let mut old = PlayerDataSlot::new(Some(sample()));
	let mut new = PlayerDataSlot::default();

	copy_player(&mut old, &mut new);
	assert_eq!(new.blueprint_data(), Some(&sample()));
	assert_eq!(old.blueprint_data(), None);
}

#[test]
fn copy_from_empty_clears_replacement() {
	let mut old = PlayerDataSlot::default();
	let mut new = PlayerDataSlot::new(Some(PlayerData::default()));
	copy_player(&mut old, &mut new);
	assert_eq!(new.blueprint_data(), None);
}
