use std::collections::BTreeSet;
use std::fmt;

use blueprint_primitives::{BlockPos, Entity};
use rustc_hash::FxHashSet as HashSet;

use super::{ContainmentQuery, PositionCollector, Region, RegionArena, RegionId, downcast_region};

/// A region paired with the arena that resolves its children.
///
/// This is the public face of the region capability set: positions,
/// containment and iteration all aggregate through child handles.
#[derive(Clone, Copy)]
pub struct RegionView<'a> {
	arena: &'a RegionArena,
	id: RegionId,
	region: &'a dyn Region,
}

impl<'a> RegionView<'a> {
	pub(crate) fn new(arena: &'a RegionArena, id: RegionId, region: &'a dyn Region) -> Self {
		Self { arena, id, region }
	}

	pub fn id(&self) -> RegionId {
		self.id
	}

	pub fn tag(&self) -> &'static str {
		self.region.tag()
	}

	pub fn region(&self) -> &'a dyn Region {
		self.region
	}

	pub fn arena(&self) -> &'a RegionArena {
		self.arena
	}

	pub fn downcast<R: Region>(&self) -> Option<&'a R> {
		downcast_region(self.region)
	}

	pub fn children(&self) -> impl Iterator<Item = RegionView<'a>> + 'a {
		let arena = self.arena;
		let region = self.region;
		region.children().iter().filter_map(move |&id| arena.view(id))
	}

	/// Every distinct position of the region, sorted.
	pub fn positions(&self) -> BTreeSet<BlockPos> {
		let mut cx = PositionCollector::new(self.arena);
		cx.collect(self.id, BlockPos::ORIGIN);
		cx.finish()
	}

	/// Whether the block the entity occupies belongs to this region.
	pub fn contains<E: Entity + ?Sized>(&self, entity: &E) -> bool {
		self.contains_pos(entity.block_pos())
	}

	pub fn contains_pos(&self, pos: BlockPos) -> bool {
		ContainmentQuery::new(self.arena).contains(self.id, pos)
	}

	/// Visits each distinct position once, in ascending order.
	pub fn for_each_position(&self, mut action: impl FnMut(BlockPos)) {
		for pos in self.positions() {
			action(pos);
		}
	}

	/// Value equality: same variants with equal fields and pairwise-equal
	/// children, regardless of which handles or arenas hold them.
	pub fn structurally_eq(&self, other: &RegionView<'_>) -> bool {
		structurally_eq_in(self, other, &mut HashSet::default())
	}
}

/// `matched` holds handle pairs already proven equal. A mismatch ends the
/// comparison, so no pair is ever compared twice.
fn structurally_eq_in(a: &RegionView<'_>, b: &RegionView<'_>, matched: &mut HashSet<(RegionId, RegionId)>) -> bool {
	if matched.contains(&(a.id, b.id)) {
		return true;
	}
	if a.tag() != b.tag() || !a.region.shallow_eq(b.region) {
		return false;
	}
	let ours = a.region.children();
	let theirs = b.region.children();
	if ours.len() != theirs.len() {
		return false;
	}
	for (&x, &y) in ours.iter().zip(theirs) {
		match (a.arena.view(x), b.arena.view(y)) {
			(Some(x), Some(y)) if structurally_eq_in(&x, &y, matched) => {}
			_ => return false,
		}
	}
	matched.insert((a.id, b.id));
	true
}

impl PartialEq for RegionView<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.structurally_eq(other)
	}
}

impl fmt::Debug for RegionView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegionView")
			.field("id", &self.id)
			.field("region", &self.region)
			.finish()
	}
}
