//! Session attachment state machine.
//!
//! ```text
//! NoSession --on_session_change--> Active
//! Active    --on_session_change--> Active (replaced, never merged)
//! ```

use std::path::{Path, PathBuf};

use blueprint_registry::{DispatchCodec, RegionCollection};

use crate::config::SessionConfig;
use crate::error::{LoadError, SaveError};
use crate::session::SessionHandle;
use crate::storage;

/// What entering a session found on disk.
#[derive(Debug)]
pub enum LoadOutcome {
	/// No saved file; the session starts with an empty collection.
	Fresh,
	/// The saved collection was restored.
	Loaded { regions: usize },
	/// The saved file was unreadable; the session starts empty.
	Recovered(LoadError),
}

#[derive(Debug)]
enum SessionState {
	NoSession,
	Active { storage_path: PathBuf, regions: RegionCollection },
}

/// Owns the region collection of the active session.
#[derive(Debug)]
pub struct SessionManager {
	config: SessionConfig,
	state: SessionState,
}

impl Default for SessionManager {
	fn default() -> Self {
		Self::new(SessionConfig::default())
	}
}

impl SessionManager {
	pub fn new(config: SessionConfig) -> Self {
		Self {
			config,
			state: SessionState::NoSession,
		}
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn is_active(&self) -> bool {
		matches!(self.state, SessionState::Active { .. })
	}

	pub fn storage_path(&self) -> Option<&Path> {
		match &self.state {
			SessionState::Active { storage_path, .. } => Some(storage_path.as_path()),
			SessionState::NoSession => None,
		}
	}

	pub fn regions(&self) -> Option<&RegionCollection> {
		match &self.state {
			SessionState::Active { regions, .. } => Some(regions),
			SessionState::NoSession => None,
		}
	}

	pub fn regions_mut(&mut self) -> Option<&mut RegionCollection> {
		match &mut self.state {
			SessionState::Active { regions, .. } => Some(regions),
			SessionState::NoSession => None,
		}
	}

	/// Enters `session`, replacing whatever session was active.
	///
	/// Load failures are logged and recovered as an empty collection.
	pub fn on_session_change(&mut self, session: &dyn SessionHandle, codec: DispatchCodec<'_>) -> LoadOutcome {
		let storage_path = self.config.storage_path(session.save_directory());
		if let Some(previous) = self.storage_path() {
			tracing::debug!(previous = %previous.display(), next = %storage_path.display(), "replacing active session");
		}

		let (regions, outcome) = match Self::load(&storage_path, codec) {
			Ok(Some(regions)) => {
				let count = regions.len();
				tracing::info!(path = %storage_path.display(), regions = count, "loaded session regions");
				(regions, LoadOutcome::Loaded { regions: count })
			}
			Ok(None) => {
				tracing::debug!(path = %storage_path.display(), "no saved regions for session");
				(RegionCollection::with_max_depth(codec.max_depth()), LoadOutcome::Fresh)
			}
			Err(e) => {
				tracing::warn!(error = %e, "discarding unreadable session regions");
				(RegionCollection::with_max_depth(codec.max_depth()), LoadOutcome::Recovered(e))
			}
		};

		self.state = SessionState::Active { storage_path, regions };
		outcome
	}

	/// Reads the collection stored at `path`. A missing file is `Ok(None)`.
	pub fn load(path: &Path, codec: DispatchCodec<'_>) -> Result<Option<RegionCollection>, LoadError> {
		let Some(tag) = storage::read_tag(path, storage::tag_depth_for(codec.max_depth())).map_err(|source| LoadError::Storage {
			path: path.to_path_buf(),
			source,
		})?
		else {
			return Ok(None);
		};
		let regions = codec.decode_collection(&tag).map_err(|source| LoadError::Codec {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Some(regions))
	}

	/// Encodes the active collection and writes it to the session's file.
	pub fn save(&self, codec: DispatchCodec<'_>) -> Result<&Path, SaveError> {
		let SessionState::Active { storage_path, regions } = &self.state else {
			return Err(SaveError::NoSession);
		};
		let tag = codec.encode_collection(regions)?;
		storage::write_tag(storage_path, &tag).map_err(|source| SaveError::Storage {
			path: storage_path.clone(),
			source,
		})?;
		tracing::info!(path = %storage_path.display(), regions = regions.len(), "saved session regions");
		Ok(storage_path.as_path())
	}
}

#[cfg(test)]
mod tests;
