use rustc_hash::FxHashMap as HashMap;

use super::{RegionTypeDef, RegionTypeRegistryBuilder};
use crate::codec::DispatchCodec;
use crate::error::RegistryError;

/// Sealed tag → codec index.
///
/// Read-only once built, so it can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct RegionTypeRegistry {
	defs: HashMap<&'static str, RegionTypeDef>,
}

impl RegionTypeRegistry {
	pub(super) fn from_defs(defs: HashMap<&'static str, RegionTypeDef>) -> Self {
		Self { defs }
	}

	pub fn builder() -> RegionTypeRegistryBuilder {
		RegionTypeRegistryBuilder::new()
	}

	/// Registry containing only the builtin variants.
	pub fn with_builtins() -> Self {
		RegionTypeRegistryBuilder::with_builtins().build()
	}

	pub fn resolve(&self, tag: &str) -> Result<&RegionTypeDef, RegistryError> {
		self.get(tag).ok_or_else(|| RegistryError::UnknownTag { tag: tag.to_owned() })
	}

	pub fn get(&self, tag: &str) -> Option<&RegionTypeDef> {
		self.defs.get(tag)
	}

	pub fn contains(&self, tag: &str) -> bool {
		self.defs.contains_key(tag)
	}

	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Definitions sorted by tag.
	pub fn iter(&self) -> impl Iterator<Item = &RegionTypeDef> {
		let mut defs: Vec<_> = self.defs.values().collect();
		defs.sort_by_key(|def| def.tag);
		defs.into_iter()
	}

	/// Codec dispatching through this registry.
	pub fn codec(&self) -> DispatchCodec<'_> {
		DispatchCodec::new(self)
	}
}
