use std::fmt;
use std::sync::Arc;

use blueprint_primitives::BlockPos;

use super::builtins::CompoundRegion;
use super::{Region, RegionId, RegionView};
use crate::error::RegionError;

/// Default limit on compound nesting, shared by the arena and the codec.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Clone)]
struct Node {
	region: Arc<dyn Region>,
	/// Longest chain of regions starting at this node, counting itself.
	depth: usize,
}

/// Append-only storage of regions addressed by [`RegionId`].
///
/// Regions are never mutated in place. [`replace`](Self::replace) swaps a whole
/// value and is the only way a cycle could be introduced, so it is also where
/// cycles are rejected.
#[derive(Clone)]
pub struct RegionArena {
	nodes: Vec<Node>,
	max_depth: usize,
}

impl Default for RegionArena {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RegionArena {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.ids().zip(self.nodes.iter().map(|n| &n.region)))
			.finish()
	}
}

impl RegionArena {
	pub fn new() -> Self {
		Self::with_max_depth(DEFAULT_MAX_DEPTH)
	}

	pub fn with_max_depth(max_depth: usize) -> Self {
		Self {
			nodes: Vec::new(),
			max_depth: max_depth.max(1),
		}
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn contains(&self, id: RegionId) -> bool {
		id.index() < self.nodes.len()
	}

	pub fn insert<R: Region>(&mut self, region: R) -> Result<RegionId, RegionError> {
		self.insert_arc(Arc::new(region))
	}

	/// Stores a region and returns its handle.
	///
	/// Fails if a child handle does not resolve, the new node would nest
	/// deeper than [`max_depth`](Self::max_depth), or every handle is taken.
	pub fn insert_arc(&mut self, region: Arc<dyn Region>) -> Result<RegionId, RegionError> {
		let id = RegionId::from_index(self.nodes.len()).ok_or(RegionError::ArenaFull { len: self.nodes.len() })?;
		let depth = self.depth_over(region.children())?;
		self.nodes.push(Node { region, depth });
		Ok(id)
	}

	pub fn replace<R: Region>(&mut self, id: RegionId, region: R) -> Result<Arc<dyn Region>, RegionError> {
		self.replace_arc(id, Arc::new(region))
	}

	/// Swaps the region stored under `id`, returning the previous value.
	///
	/// The arena is left untouched on error.
	pub fn replace_arc(&mut self, id: RegionId, region: Arc<dyn Region>) -> Result<Arc<dyn Region>, RegionError> {
		if !self.contains(id) {
			return Err(RegionError::DanglingHandle(id));
		}
		for &child in region.children() {
			if !self.contains(child) {
				return Err(RegionError::DanglingHandle(child));
			}
			if child == id || self.reaches(child, id) {
				return Err(RegionError::CyclicRegion { id });
			}
		}

		let previous = std::mem::replace(&mut self.nodes[id.index()].region, region);
		match self.compute_depths() {
			Ok(depths) => {
				for (node, depth) in self.nodes.iter_mut().zip(depths) {
					node.depth = depth;
				}
				Ok(previous)
			}
			Err(e) => {
				self.nodes[id.index()].region = previous;
				Err(e)
			}
		}
	}

	pub fn get(&self, id: RegionId) -> Option<&dyn Region> {
		self.nodes.get(id.index()).map(|n| n.region.as_ref())
	}

	pub fn get_arc(&self, id: RegionId) -> Option<Arc<dyn Region>> {
		self.nodes.get(id.index()).map(|n| n.region.clone())
	}

	pub fn view(&self, id: RegionId) -> Option<RegionView<'_>> {
		self.get(id).map(|region| RegionView::new(self, id, region))
	}

	/// Nesting depth of a stored region; leaves have depth 1.
	pub fn depth(&self, id: RegionId) -> Option<usize> {
		self.nodes.get(id.index()).map(|n| n.depth)
	}

	pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
		(0..self.nodes.len()).filter_map(RegionId::from_index)
	}

	pub fn iter(&self) -> impl Iterator<Item = RegionView<'_>> {
		self.ids().filter_map(|id| self.view(id))
	}

	/// Wraps `children` in a new compound region.
	pub fn compound(&mut self, children: Vec<RegionId>) -> Result<RegionId, RegionError> {
		self.insert(CompoundRegion::new(children))
	}

	/// Wraps `id` in a compound that shifts it by `offset`.
	pub fn offset(&mut self, id: RegionId, offset: BlockPos) -> Result<RegionId, RegionError> {
		self.insert(CompoundRegion::new(vec![id]).with_offset(offset))
	}

	/// Drops every node at or after `len`. Used to roll back failed decodes,
	/// which only ever append.
	pub(crate) fn truncate(&mut self, len: usize) {
		self.nodes.truncate(len);
	}

	fn depth_over(&self, children: &[RegionId]) -> Result<usize, RegionError> {
		let mut deepest = 0;
		for &child in children {
			let depth = self.depth(child).ok_or(RegionError::DanglingHandle(child))?;
			deepest = deepest.max(depth);
		}
		let depth = deepest + 1;
		if depth > self.max_depth {
			return Err(RegionError::DepthExceeded {
				depth,
				limit: self.max_depth,
			});
		}
		Ok(depth)
	}

	/// Whether `target` is reachable from `from` through child handles.
	fn reaches(&self, from: RegionId, target: RegionId) -> bool {
		let mut visited = vec![false; self.nodes.len()];
		let mut stack = vec![from];
		while let Some(id) = stack.pop() {
			if id == target {
				return true;
			}
			let Some(seen) = visited.get_mut(id.index()) else {
				continue;
			};
			if std::mem::replace(seen, true) {
				continue;
			}
			stack.extend_from_slice(self.nodes[id.index()].region.children());
		}
		false
	}

	/// Recomputes every node depth. Requires an acyclic graph.
	fn compute_depths(&self) -> Result<Vec<usize>, RegionError> {
		let mut depths = vec![0usize; self.nodes.len()];
		for start in 0..self.nodes.len() {
			if depths[start] != 0 {
				continue;
			}
			let mut stack = vec![(start, false)];
			while let Some((index, expanded)) = stack.pop() {
				if depths[index] != 0 {
					continue;
				}
				let children = self.nodes[index].region.children();
				if !expanded {
					stack.push((index, true));
					stack.extend(children.iter().map(|c| (c.index(), false)).filter(|&(c, _)| depths[c] == 0));
					continue;
				}
				let depth = children.iter().map(|c| depths[c.index()]).max().unwrap_or(0) + 1;
				if depth > self.max_depth {
					return Err(RegionError::DepthExceeded {
						depth,
						limit: self.max_depth,
					});
				}
				depths[index] = depth;
			}
		}
		Ok(depths)
	}
}
