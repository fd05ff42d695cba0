use std::path::{Path, PathBuf};

/// Host handle for an open save session.
///
/// The manager only derives a storage path from it and never holds on to it.
pub trait SessionHandle {
	/// Directory the host saves this session under.
	fn save_directory(&self) -> &Path;
}

/// Session rooted at a fixed save directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSession {
	root: PathBuf,
}

impl LevelSession {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

impl SessionHandle for LevelSession {
	fn save_directory(&self) -> &Path {
		&self.root
	}
}

impl SessionHandle for PathBuf {
	fn save_directory(&self) -> &Path {
		self
	}
}
