//! Region type definitions and the tag-keyed registry.
//!
//! A [`RegionTypeDef`] pairs a type tag with the functions that encode and
//! decode that variant. Definitions are collected in a
//! [`RegionTypeRegistryBuilder`] and sealed into a [`RegionTypeRegistry`],
//! which has no way to register further types.

mod builder;
mod registry;

use std::fmt;
use std::sync::Arc;

use blueprint_primitives::Compound;
pub use builder::RegionTypeRegistryBuilder;
pub use registry::RegionTypeRegistry;

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;
use crate::region::{Region, RegionVariant, downcast_region};

/// Writes the variant fields of a region, without the `type` key.
pub type EncodeFn = fn(&dyn Region, &mut EncodeCx<'_>) -> Result<Compound, CodecError>;

/// Builds a region from its variant fields.
pub type DecodeFn = fn(&Compound, &mut DecodeCx<'_>) -> Result<Arc<dyn Region>, CodecError>;

/// Codec descriptor for one region variant.
#[derive(Clone, Copy)]
pub struct RegionTypeDef {
	/// Type tag written under the `type` key.
	pub tag: &'static str,
	/// Human-readable summary.
	pub description: &'static str,
	pub encode: EncodeFn,
	pub decode: DecodeFn,
}

impl RegionTypeDef {
	/// Descriptor for a [`RegionVariant`], using its own field codec.
	pub const fn of<R: RegionVariant>(description: &'static str) -> Self {
		Self {
			tag: R::TAG,
			description,
			encode: encode_variant::<R>,
			decode: decode_variant::<R>,
		}
	}
}

impl fmt::Debug for RegionTypeDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RegionTypeDef")
			.field("tag", &self.tag)
			.field("description", &self.description)
			.finish_non_exhaustive()
	}
}

fn encode_variant<R: RegionVariant>(region: &dyn Region, cx: &mut EncodeCx<'_>) -> Result<Compound, CodecError> {
	let region = downcast_region::<R>(region).ok_or(CodecError::VariantMismatch {
		expected: R::TAG,
		found: region.tag(),
	})?;
	region.encode_fields(cx)
}

fn decode_variant<R: RegionVariant>(fields: &Compound, cx: &mut DecodeCx<'_>) -> Result<Arc<dyn Region>, CodecError> {
	Ok(Arc::new(R::decode_fields(fields, cx)?))
}

/// Inventory wrapper for statically submitted region types.
pub struct RegionTypeReg(pub &'static RegionTypeDef);
inventory::collect!(RegionTypeReg);

/// Submits a region variant for [`RegionTypeRegistryBuilder::register_submitted`].
///
/// ```ignore
/// blueprint_registry::region_type!(HollowCuboid, "Cuboid shell");
/// ```
#[macro_export]
macro_rules! region_type {
	($ty:ident, $description:expr $(,)?) => {
		$crate::paste::paste! {
			#[allow(non_upper_case_globals)]
			pub(crate) static [<REGION_TYPE_ $ty>]: $crate::RegionTypeDef =
				$crate::RegionTypeDef::of::<$ty>($description);

			$crate::inventory::submit!($crate::RegionTypeReg(&[<REGION_TYPE_ $ty>]));
		}
	};
}

#[cfg(test)]
mod tests;
