use std::collections::BTreeSet;

use blueprint_primitives::BlockPos;
use rustc_hash::FxHashSet as HashSet;

use super::{RegionArena, RegionId};

/// Accumulates the positions of a region tree.
///
/// Children are keyed by `(handle, offset)`; a child reached again under the
/// same offset contributes nothing new and is skipped.
pub struct PositionCollector<'a> {
	arena: &'a RegionArena,
	visited: HashSet<(RegionId, BlockPos)>,
	out: BTreeSet<BlockPos>,
}

impl<'a> PositionCollector<'a> {
	pub(crate) fn new(arena: &'a RegionArena) -> Self {
		Self {
			arena,
			visited: HashSet::default(),
			out: BTreeSet::new(),
		}
	}

	pub fn arena(&self) -> &'a RegionArena {
		self.arena
	}

	pub fn insert(&mut self, pos: BlockPos) {
		self.out.insert(pos);
	}

	pub fn extend(&mut self, positions: impl IntoIterator<Item = BlockPos>) {
		self.out.extend(positions);
	}

	/// Adds the positions of the region under `id`, shifted by `offset`.
	pub fn collect(&mut self, id: RegionId, offset: BlockPos) {
		if !self.visited.insert((id, offset)) {
			return;
		}
		if let Some(region) = self.arena.get(id) {
			region.collect_positions(self, offset);
		}
	}

	pub(crate) fn finish(self) -> BTreeSet<BlockPos> {
		self.out
	}
}

/// Answers one containment query over a region tree.
///
/// A `true` answer ends the whole query, so a `(handle, position)` pair seen
/// again has already answered `false`.
pub struct ContainmentQuery<'a> {
	arena: &'a RegionArena,
	visited: HashSet<(RegionId, BlockPos)>,
}

impl<'a> ContainmentQuery<'a> {
	pub(crate) fn new(arena: &'a RegionArena) -> Self {
		Self {
			arena,
			visited: HashSet::default(),
		}
	}

	pub fn arena(&self) -> &'a RegionArena {
		self.arena
	}

	/// Whether the region under `id` contains `pos`.
	pub fn contains(&mut self, id: RegionId, pos: BlockPos) -> bool {
		if !self.visited.insert((id, pos)) {
			return false;
		}
		self.arena.get(id).is_some_and(|region| region.contains_pos(self, pos))
	}
}
