//! Session storage configuration.

use std::path::{Path, PathBuf};

use blueprint_registry::DEFAULT_MAX_DEPTH;
use serde::Deserialize;

use crate::error::ConfigError;

/// Where and how session region data is stored.
///
/// ```toml
/// data_dir = "blueprint"
/// regions_file = "regions.dat"
/// max_depth = 128
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
	/// Directory under the session's save directory.
	pub data_dir: PathBuf,
	/// File name of the region collection inside `data_dir`.
	pub regions_file: String,
	/// Nesting limit applied when decoding and encoding regions.
	pub max_depth: usize,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			data_dir: PathBuf::from("blueprint"),
			regions_file: "regions.dat".to_owned(),
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl SessionConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Storage file for a session saved under `save_dir`.
	pub fn storage_path(&self, save_dir: &Path) -> PathBuf {
		save_dir.join(&self.data_dir).join(&self.regions_file)
	}
}
