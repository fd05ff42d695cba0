use blueprint_primitives::{BlockPos, Compound};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionVariant, same_variant};

/// A single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRegion {
	pub position: BlockPos,
}

impl PointRegion {
	pub fn new(position: BlockPos) -> Self {
		Self { position }
	}
}

impl Region for PointRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos) {
		cx.insert(self.position + offset);
	}

	fn contains_pos(&self, _: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool {
		pos == self.position
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		same_variant(self, other)
	}
}

impl RegionVariant for PointRegion {
	const TAG: &'static str = "point";

	fn encode_fields(&self, _: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		Ok(Compound::new().with("position", self.position))
	}

	fn decode_fields(fields: &Compound, _: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		Ok(Self::new(fields.get_block_pos("position")?))
	}
}
