use std::sync::Arc;

use blueprint_primitives::{BlockPos, Compound, Entity, Vec3};
use blueprint_registry::{CuboidRegion, PointRegion, RegionTypeRegistry};
use blueprint_session::{
	BlueprintContext, BlueprintPlayer, LevelSession, LifecycleHooks, LoadOutcome, PLAYER_DATA_KEY, PlayerData,
	SessionConfig,
};
use pretty_assertions::assert_eq;

/// Minimal host player: a position plus attached blueprint data.
#[derive(Debug, Default)]
struct HostPlayer {
	position: Vec3,
	blueprint: Option<PlayerData>,
}

impl Entity for HostPlayer {
	fn position(&self) -> Vec3 {
		self.position
	}
}

impl BlueprintPlayer for HostPlayer {
	fn blueprint_data(&self) -> Option<&PlayerData> {
		self.blueprint.as_ref()
	}

	fn set_blueprint_data(&mut self, data: Option<PlayerData>) {
		self.blueprint = data;
	}

	fn take_blueprint_data(&mut self) -> Option<PlayerData> {
		self.blueprint.take()
	}
}

#[test]
fn session_regions_survive_save_and_reload() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let context = BlueprintContext::with_builtins(SessionConfig::default());

	assert!(matches!(context.on_session_change(&session), LoadOutcome::Fresh));
	{
		let mut sessions = context.sessions_mut();
		let regions = sessions.regions_mut().unwrap();
		regions
			.define("arena", CuboidRegion::new(BlockPos::new(-8, 60, -8), BlockPos::new(8, 70, 8)))
			.unwrap();
	}
	let path = context.save().unwrap();
	assert!(path.ends_with("blueprint/regions.dat"));

	let reloaded = BlueprintContext::new(Arc::clone(context.registry()), SessionConfig::default());
	assert!(matches!(
		reloaded.on_session_change(&session),
		LoadOutcome::Loaded { regions: 1 }
	));
	assert_eq!(reloaded.sessions().regions(), context.sessions().regions());

	let player = HostPlayer {
		position: Vec3::new(0.5, 65.0, -7.5),
		..HostPlayer::default()
	};
	let sessions = reloaded.sessions();
	let arena = sessions.regions().unwrap().get("arena").unwrap();
	assert!(arena.contains(&player));
}

#[test]
fn player_payload_follows_record_and_replacement() {
	let context = BlueprintContext::with_builtins(SessionConfig::default());
	let mut selection = blueprint_registry::RegionCollection::new();
	selection.define("pos1", PointRegion::new(BlockPos::new(1, 2, 3))).unwrap();
	let data = PlayerData {
		render_particles: true,
		selection,
	};

	let mut original = HostPlayer::default();
	original.set_blueprint_data(Some(data.clone()));

	let mut record = Compound::new();
	context.on_write(&original, &mut record).unwrap();
	assert!(record.contains_key(PLAYER_DATA_KEY));

	let mut loaded = HostPlayer::default();
	context.on_read(&mut loaded, &record);
	assert_eq!(loaded.blueprint_data(), Some(&data));

	let mut respawned = HostPlayer::default();
	context.on_copy(&mut loaded, &mut respawned);
	assert_eq!(respawned.blueprint_data(), Some(&data));
	assert!(loaded.blueprint_data().is_none());
}

#[test]
fn configured_depth_limit_applies_to_saved_data() {
	let dir = tempfile::tempdir().unwrap();
	let session = LevelSession::new(dir.path());
	let registry = Arc::new(RegionTypeRegistry::with_builtins());

	let deep = BlueprintContext::new(Arc::clone(&registry), SessionConfig::default());
	deep.on_session_change(&session);
	{
		let mut sessions = deep.sessions_mut();
		let regions = sessions.regions_mut().unwrap();
		let mut id = regions.arena_mut().insert(PointRegion::new(BlockPos::ORIGIN)).unwrap();
		for _ in 0..6 {
			id = regions.arena_mut().compound(vec![id]).unwrap();
		}
		regions.bind("tower", id).unwrap();
	}
	deep.save().unwrap();

	let shallow = BlueprintContext::new(registry, SessionConfig::from_toml_str("max_depth = 4").unwrap());
	assert!(matches!(shallow.on_session_change(&session), LoadOutcome::Recovered(_)));
	assert!(shallow.sessions().regions().unwrap().is_empty());
}
