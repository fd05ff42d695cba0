use std::collections::BTreeSet;

use blueprint_primitives::{BlockPos, Compound, FieldError};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionVariant, same_variant};

/// An explicit set of blocks.
///
/// Serialized as one flat int array of `x, y, z` triples in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSetRegion {
	positions: BTreeSet<BlockPos>,
}

impl PositionSetRegion {
	pub fn new(positions: impl IntoIterator<Item = BlockPos>) -> Self {
		Self {
			positions: positions.into_iter().collect(),
		}
	}

	pub fn positions(&self) -> &BTreeSet<BlockPos> {
		&self.positions
	}
}

impl Region for PositionSetRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos) {
		cx.extend(self.positions.iter().map(|&pos| pos + offset));
	}

	fn contains_pos(&self, _: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool {
		self.positions.contains(&pos)
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		same_variant(self, other)
	}
}

impl RegionVariant for PositionSetRegion {
	const TAG: &'static str = "positions";

	fn encode_fields(&self, _: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		let flat: Vec<i32> = self.positions.iter().flat_map(|pos| pos.to_array()).collect();
		Ok(Compound::new().with("positions", flat))
	}

	fn decode_fields(fields: &Compound, _: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		let flat = fields.get_int_array("positions")?;
		if flat.len() % 3 != 0 {
			return Err(FieldError::invalid("positions", format!("{} ints is not a list of xyz triples", flat.len())).into());
		}
		Ok(Self::new(flat.chunks_exact(3).map(|c| BlockPos::new(c[0], c[1], c[2]))))
	}
}
