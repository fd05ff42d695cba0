//! Region variants shipped with the registry.

mod compound;
mod cuboid;
mod empty;
mod point;
mod positions;
mod sphere;

pub use compound::CompoundRegion;
pub use cuboid::CuboidRegion;
pub use empty::EmptyRegion;
pub use point::PointRegion;
pub use positions::PositionSetRegion;
pub use sphere::SphereRegion;

use crate::error::RegistryError;
use crate::types::{RegionTypeDef, RegionTypeRegistryBuilder};

pub static EMPTY: RegionTypeDef = RegionTypeDef::of::<EmptyRegion>("Region with no positions");
pub static POINT: RegionTypeDef = RegionTypeDef::of::<PointRegion>("A single block, such as a spawn or chest position");
pub static CUBOID: RegionTypeDef = RegionTypeDef::of::<CuboidRegion>("Axis-aligned box between two inclusive corners");
pub static SPHERE: RegionTypeDef = RegionTypeDef::of::<SphereRegion>("Blocks within a radius of a center block");
pub static POSITIONS: RegionTypeDef = RegionTypeDef::of::<PositionSetRegion>("Explicit set of block positions");
pub static COMPOUND: RegionTypeDef = RegionTypeDef::of::<CompoundRegion>("Union of child regions with an optional offset");

/// Every builtin type, in registration order.
pub static ALL: [&RegionTypeDef; 6] = [&EMPTY, &POINT, &CUBOID, &SPHERE, &POSITIONS, &COMPOUND];

/// Registers all builtin region types.
pub fn register_all(builder: &mut RegionTypeRegistryBuilder) -> Result<(), RegistryError> {
	for def in ALL {
		builder.register(*def)?;
	}
	Ok(())
}
