use std::path::PathBuf;

use blueprint_registry::CodecError;
use thiserror::Error;

/// Errors from reading session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse session config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Errors from the on-disk region file.
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
	#[error("file is {len} bytes, shorter than the region file header")]
	Truncated { len: usize },
	#[error("not a region file")]
	BadMagic,
	#[error("unsupported region file schema version {found}")]
	UnsupportedVersion { found: u32 },
	#[error("postcard error: {0}")]
	Postcard(#[from] postcard::Error),
}

/// A saved collection could not be restored.
///
/// Recovered by the session manager: logged, then treated as no saved data.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read {}: {source}", .path.display())]
	Storage {
		path: PathBuf,
		#[source]
		source: StorageError,
	},
	#[error("malformed region data in {}: {source}", .path.display())]
	Codec {
		path: PathBuf,
		#[source]
		source: CodecError,
	},
}

/// Errors from flushing the active session.
#[derive(Debug, Error)]
pub enum SaveError {
	#[error("no active session")]
	NoSession,
	#[error(transparent)]
	Codec(#[from] CodecError),
	#[error("failed to write {}: {source}", .path.display())]
	Storage {
		path: PathBuf,
		#[source]
		source: StorageError,
	},
}
