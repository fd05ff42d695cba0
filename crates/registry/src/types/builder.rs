use rustc_hash::FxHashMap as HashMap;

use super::{RegionTypeDef, RegionTypeReg, RegionTypeRegistry};
use crate::error::RegistryError;
use crate::region::RegionVariant;
use crate::region::builtins;

/// Build phase of a [`RegionTypeRegistry`].
#[derive(Debug, Default)]
pub struct RegionTypeRegistryBuilder {
	defs: HashMap<&'static str, RegionTypeDef>,
}

impl RegionTypeRegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder preloaded with the builtin variants.
	pub fn with_builtins() -> Self {
		let mut builder = Self::new();
		for def in builtins::ALL {
			builder.defs.insert(def.tag, *def);
		}
		builder
	}

	/// Adds a definition. A taken tag is rejected and the builder is left as it was.
	pub fn register(&mut self, def: RegionTypeDef) -> Result<&mut Self, RegistryError> {
		if self.defs.contains_key(def.tag) {
			return Err(RegistryError::DuplicateTag { tag: def.tag });
		}
		self.defs.insert(def.tag, def);
		Ok(self)
	}

	pub fn register_variant<R: RegionVariant>(&mut self, description: &'static str) -> Result<&mut Self, RegistryError> {
		self.register(RegionTypeDef::of::<R>(description))
	}

	/// Registers every type submitted with [`region_type!`](crate::region_type), in tag order.
	///
	/// Stops at the first duplicate; types registered before it are kept.
	pub fn register_submitted(&mut self) -> Result<&mut Self, RegistryError> {
		let mut submitted: Vec<&'static RegionTypeDef> = inventory::iter::<RegionTypeReg>.into_iter().map(|reg| reg.0).collect();
		submitted.sort_by_key(|def| def.tag);
		for def in submitted {
			self.register(*def)?;
		}
		Ok(self)
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

	/// Seals the registry.
	pub fn build(self) -> RegionTypeRegistry {
		tracing::debug!(types = self.defs.len(), "sealed region type registry");
		RegionTypeRegistry::from_defs(self.defs)
	}
}
