use blueprint_primitives::{BlockPos, Compound, Tag};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionId, RegionVariant, downcast_region};

/// Union of child regions, optionally shifted by a fixed offset.
///
/// Children keep insertion order and may repeat. Positions are the union of
/// the children's positions plus `offset`; containment holds when any child
/// contains the position translated back by `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundRegion {
	regions: Vec<RegionId>,
	offset: BlockPos,
}

impl CompoundRegion {
	pub fn new(regions: Vec<RegionId>) -> Self {
		Self {
			regions,
			offset: BlockPos::ORIGIN,
		}
	}

	pub fn with_offset(mut self, offset: BlockPos) -> Self {
		self.offset = offset;
		self
	}

	pub fn regions(&self) -> &[RegionId] {
		&self.regions
	}

	pub fn offset(&self) -> BlockPos {
		self.offset
	}
}

impl Region for CompoundRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn children(&self) -> &[RegionId] {
		&self.regions
	}

	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos) {
		let offset = offset + self.offset;
		for &id in &self.regions {
			cx.collect(id, offset);
		}
	}

	fn contains_pos(&self, cx: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool {
		let local = pos - self.offset;
		self.regions.iter().any(|&id| cx.contains(id, local))
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		downcast_region::<Self>(other)
			.is_some_and(|other| other.offset == self.offset && other.regions.len() == self.regions.len())
	}
}

impl RegionVariant for CompoundRegion {
	const TAG: &'static str = "compound";

	fn encode_fields(&self, cx: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		let children = self
			.regions
			.iter()
			.map(|&id| cx.encode_child(id))
			.collect::<Result<Vec<Tag>, _>>()?;
		let mut fields = Compound::new().with("regions", children);
		if self.offset != BlockPos::ORIGIN {
			fields.insert("offset", self.offset);
		}
		Ok(fields)
	}

	fn decode_fields(fields: &Compound, cx: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		let regions = fields
			.get_list("regions")?
			.iter()
			.map(|node| cx.decode_child(node))
			.collect::<Result<Vec<_>, _>>()?;
		let offset = fields.get_optional_block_pos("offset")?.unwrap_or(BlockPos::ORIGIN);
		Ok(Self::new(regions).with_offset(offset))
	}
}
