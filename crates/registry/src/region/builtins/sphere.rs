use blueprint_primitives::{BlockPos, Compound, FieldError};

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{ContainmentQuery, PositionCollector, Region, RegionVariant, same_variant};

/// Blocks whose squared distance to `center` is at most `radius²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereRegion {
	center: BlockPos,
	radius: f64,
}

impl SphereRegion {
	/// Returns `None` unless `radius` is finite and non-negative and the
	/// bounding box around `center` stays within the `i32` grid.
	pub fn new(center: BlockPos, radius: f64) -> Option<Self> {
		if !radius.is_finite() || radius < 0.0 {
			return None;
		}
		let reach = radius.floor();
		let fits = |c: i32| {
			let c = f64::from(c);
			c - reach >= f64::from(i32::MIN) && c + reach <= f64::from(i32::MAX)
		};
		(fits(center.x) && fits(center.y) && fits(center.z)).then_some(Self { center, radius })
	}

	pub fn center(&self) -> BlockPos {
		self.center
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Whole blocks the sphere extends from its center along each axis.
	fn reach(&self) -> i64 {
		self.radius.floor() as i64
	}

	fn within(&self, pos: BlockPos) -> bool {
		let reach = self.reach();
		let near = |p: i32, c: i32| (i64::from(p) - i64::from(c)).abs() <= reach;
		near(pos.x, self.center.x)
			&& near(pos.y, self.center.y)
			&& near(pos.z, self.center.z)
			&& pos.squared_distance(self.center) <= self.radius * self.radius
	}
}

impl Region for SphereRegion {
	fn tag(&self) -> &'static str {
		Self::TAG
	}

	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos) {
		let reach = self.reach();
		// `new` keeps center ± reach inside i32.
		let span = |c: i32| (i64::from(c) - reach) as i32..=(i64::from(c) + reach) as i32;
		for x in span(self.center.x) {
			for y in span(self.center.y) {
				for z in span(self.center.z) {
					let pos = BlockPos::new(x, y, z);
					if self.within(pos) {
						cx.insert(pos + offset);
					}
				}
			}
		}
	}

	fn contains_pos(&self, _: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool {
		self.within(pos)
	}

	fn shallow_eq(&self, other: &dyn Region) -> bool {
		same_variant(self, other)
	}
}

impl RegionVariant for SphereRegion {
	const TAG: &'static str = "sphere";

	fn encode_fields(&self, _: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
		Ok(Compound::new().with("center", self.center).with("radius", self.radius))
	}

	fn decode_fields(fields: &Compound, _: &mut DecodeCx<'_>) -> Result<Self, CodecError> {
		let center = fields.get_block_pos("center")?;
		let radius = fields.get_double("radius")?;
		Self::new(center, radius)
			.ok_or_else(|| FieldError::invalid("radius", format!("{radius} is not a valid radius around {center}")).into())
	}
}
