//! Named regions sharing one arena.

use std::collections::BTreeMap;
use std::fmt;

use blueprint_primitives::BlockPos;

use crate::error::RegionError;
use crate::region::builtins::{CompoundRegion, EmptyRegion};
use crate::region::{Region, RegionArena, RegionId, RegionView};

/// Regions addressed by name, all stored in one [`RegionArena`].
///
/// Equality is structural: two collections are equal when they bind the same
/// names to structurally equal regions, whatever handles back them.
#[derive(Clone, Default)]
pub struct RegionCollection {
	arena: RegionArena,
	named: BTreeMap<String, RegionId>,
}

impl RegionCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_depth(max_depth: usize) -> Self {
		Self {
			arena: RegionArena::with_max_depth(max_depth),
			named: BTreeMap::new(),
		}
	}

	pub fn arena(&self) -> &RegionArena {
		&self.arena
	}

	/// Mutable access for building regions that will be bound afterwards.
	pub fn arena_mut(&mut self) -> &mut RegionArena {
		&mut self.arena
	}

	/// Stores `region` and binds it to `name`, returning the new handle.
	pub fn define<R: Region>(&mut self, name: impl Into<String>, region: R) -> Result<RegionId, RegionError> {
		let id = self.arena.insert(region)?;
		self.named.insert(name.into(), id);
		Ok(id)
	}

	/// Binds `name` to an existing handle, returning the handle it replaced.
	pub fn bind(&mut self, name: impl Into<String>, id: RegionId) -> Result<Option<RegionId>, RegionError> {
		if !self.arena.contains(id) {
			return Err(RegionError::DanglingHandle(id));
		}
		Ok(self.named.insert(name.into(), id))
	}

	/// Unbinds a name. The region stays in the arena.
	pub fn remove(&mut self, name: &str) -> Option<RegionId> {
		self.named.remove(name)
	}

	pub fn id(&self, name: &str) -> Option<RegionId> {
		self.named.get(name).copied()
	}

	pub fn get(&self, name: &str) -> Option<RegionView<'_>> {
		self.id(name).and_then(|id| self.arena.view(id))
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.named.contains_key(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.named.keys().map(String::as_str)
	}

	/// Name and handle pairs in name order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, RegionId)> {
		self.named.iter().map(|(name, &id)| (name.as_str(), id))
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, RegionView<'_>)> {
		self.entries().filter_map(|(name, id)| Some((name, self.arena.view(id)?)))
	}

	pub fn len(&self) -> usize {
		self.named.len()
	}

	pub fn is_empty(&self) -> bool {
		self.named.is_empty()
	}

	/// Builds one compound over the named regions, shifted by `offset`.
	///
	/// Names that are not bound are skipped with a warning. When none of them
	/// resolve the result is an [`EmptyRegion`].
	pub fn combined<'n>(
		&mut self,
		names: impl IntoIterator<Item = &'n str>,
		offset: BlockPos,
	) -> Result<RegionId, RegionError> {
		let mut children = Vec::new();
		for name in names {
			match self.id(name) {
				Some(id) => children.push(id),
				None => tracing::warn!(name, "skipping unknown region while combining"),
			}
		}
		if children.is_empty() {
			return self.arena.insert(EmptyRegion);
		}
		self.arena.insert(CompoundRegion::new(children).with_offset(offset))
	}
}

impl PartialEq for RegionCollection {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.zip(other.iter())
				.all(|((a_name, a), (b_name, b))| a_name == b_name && a.structurally_eq(&b))
	}
}

impl fmt::Debug for RegionCollection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests;
