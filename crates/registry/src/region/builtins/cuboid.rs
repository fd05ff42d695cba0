use blueprint_primitives::{BlockPos, Compound};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionVariant, same_variant};

/// An axis-aligned box of blocks, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuboidRegion {
	min: BlockPos,
	max: BlockPos,
}

impl CuboidRegion {
	/// Creates a cuboid spanning two opposite corners given in any order.
	pub fn new(a: BlockPos, b: BlockPos) -> Self {
		Self {
			min: a.min(b),
			max: a.max(b),
		}
	}

	pub fn min(&self) -> BlockPos {
		self.min
	}

	pub fn max(&self) -> BlockPos {
		self.max
	}

	/// Number of blocks inside the cuboid.
	pub fn volume(&self) -> u64 {
		let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1) as u64;
		span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
	}

	/// Every block of the cuboid in x, then y, then z order.
	pub fn iter(&self) -> impl Iterator<Item = BlockPos> + use<> {
		let (min, max) = (self.min, self.max);
		(min.x..=max.x).flat_map(move |x| {
			(min.y..=max.y).flat_map(move |y| (min.z..=max.z).map(move |z| BlockPos::new(x, y, z)))
		})
	}

	pub fn contains_block(&self, pos: BlockPos) -> bool {
		(self.min.x..=self.max.x).contains(&pos.x)
			&& (self.min.y..=self.max.y).contains(&pos.y)
			&& (self.min.z..=self.max.z).contains(&pos.z)
	}
}

impl Region for CuboidRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos) {
		cx.extend(self.iter().map(|pos| pos + offset));
	}

	fn contains_pos(&self, _: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool {
		self.contains_block(pos)
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		same_variant(self, other)
	}
}

impl RegionVariant for CuboidRegion {
	const TAG: &'static str = "cuboid";

	fn encode_fields(&self, _: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		Ok(Compound::new().with("min", self.min).with("max", self.max))
	}

	fn decode_fields(fields: &Compound, _: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		Ok(Self::new(fields.get_block_pos("min")?, fields.get_block_pos("max")?))
	}
}
