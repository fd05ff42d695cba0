use std::path::PathBuf;
use std::sync::Arc;

use blueprint_primitives::Compound;
use blueprint_registry::{CodecError, DispatchCodec, RegionTypeRegistry};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SessionConfig;
use crate::error::SaveError;
use crate::manager::{LoadOutcome, SessionManager};
use crate::player::{BlueprintPlayer, copy_player, read_player, write_player};
use crate::session::SessionHandle;

/// Callbacks the host invokes at lifecycle points.
pub trait LifecycleHooks {
	/// A session was created or loaded. Both host entry points route here.
	fn on_session_change(&self, session: &dyn SessionHandle) -> LoadOutcome;

	/// The player record is being saved.
	fn on_write(&self, player: &dyn BlueprintPlayer, record: &mut Compound) -> Result<(), CodecError>;

	/// The player record was loaded.
	fn on_read(&self, player: &mut dyn BlueprintPlayer, record: &Compound);

	/// `new` replaces `old`, e.g. on respawn or dimension change.
	fn on_copy(&self, old: &mut dyn BlueprintPlayer, new: &mut dyn BlueprintPlayer);
}

/// Owns the sealed registry and the session manager.
#[derive(Debug)]
pub struct BlueprintContext {
	registry: Arc<RegionTypeRegistry>,
	sessions: RwLock<SessionManager>,
}

impl BlueprintContext {
	pub fn new(registry: Arc<RegionTypeRegistry>, config: SessionConfig) -> Self {
		Self {
			registry,
			sessions: RwLock::new(SessionManager::new(config)),
		}
	}

	/// Context using only the builtin region types.
	pub fn with_builtins(config: SessionConfig) -> Self {
		Self::new(Arc::new(RegionTypeRegistry::with_builtins()), config)
	}

	pub fn registry(&self) -> &Arc<RegionTypeRegistry> {
		&self.registry
	}

	pub fn sessions(&self) -> RwLockReadGuard<'_, SessionManager> {
		self.sessions.read()
	}

	pub fn sessions_mut(&self) -> RwLockWriteGuard<'_, SessionManager> {
		self.sessions.write()
	}

	/// Flushes the active session's regions to disk.
	pub fn save(&self) -> Result<PathBuf, SaveError> {
		let sessions = self.sessions.read();
		let codec = self.codec_with(sessions.config().max_depth);
		sessions.save(codec).map(|path| path.to_path_buf())
	}

	fn codec(&self) -> DispatchCodec<'_> {
		self.codec_with(self.sessions.read().config().max_depth)
	}

	fn codec_with(&self, max_depth: usize) -> DispatchCodec<'_> {
		self.registry.codec().with_max_depth(max_depth)
	}
}

impl LifecycleHooks for BlueprintContext {
	fn on_session_change(&self, session: &dyn SessionHandle) -> LoadOutcome {
		let mut sessions = self.sessions.write();
		let codec = self.codec_with(sessions.config().max_depth);
		sessions.on_session_change(session, codec)
	}

	fn on_write(&self, player: &dyn BlueprintPlayer, record: &mut Compound) -> Result<(), CodecError> {
		write_player(player, record, self.codec())
	}

	fn on_read(&self, player: &mut dyn BlueprintPlayer, record: &Compound) {
		read_player(player, record, self.codec());
	}

	fn on_copy(&self, old: &mut dyn BlueprintPlayer, new: &mut dyn BlueprintPlayer) {
		copy_player(old, new);
	}
}
