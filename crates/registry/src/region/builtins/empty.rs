use blueprint_primitives::{BlockPos, Compound};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionVariant, same_variant};

/// A region with no positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyRegion;

impl Region for EmptyRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn collect_positions(&self, _: &mut PositionCollector<'_>, _: BlockPos) {}

	fn contains_pos(&self, _: &mut ContainmentQuery<'_>, _: BlockPos) -> bool {
		false
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		same_variant(self, other)
	}
}

impl RegionVariant for EmptyRegion {
	const TAG: &'static str = "empty";

	fn encode_fields(&self, _: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		Ok(Compound::new())
	}

	fn decode_fields(_: &Compound, _: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		Ok(Self)
	}
}
