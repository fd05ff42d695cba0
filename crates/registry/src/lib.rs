//! Polymorphic regions and their tag-dispatched codec.
//!
//! Regions are stored in a [`RegionArena`] and encoded to [`Tag`] trees by a
//! [`DispatchCodec`] that looks variants up by tag in a sealed
//! [`RegionTypeRegistry`].
//!
//! [`Tag`]: blueprint_primitives::Tag

pub mod codec;
pub mod collection;
pub mod error;
pub mod region;
pub mod types;

#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;

pub use codec::{DEFAULT_MAX_NODES, DecodeCx, DispatchCodec, EncodeCx, TYPE_KEY};
pub use collection::RegionCollection;
pub use error::{CodecError, RegionError, RegistryError};
pub use region::builtins::{
	CompoundRegion, CuboidRegion, EmptyRegion, PointRegion, PositionSetRegion, SphereRegion,
};
pub use region::{
	ContainmentQuery, DEFAULT_MAX_DEPTH, PositionCollector, Region, RegionArena, RegionId, RegionVariant,
	RegionView, downcast_region, same_variant,
};
pub use types::{RegionTypeDef, RegionTypeReg, RegionTypeRegistry, RegionTypeRegistryBuilder};
