//! Region capability set and storage.
//!
//! A region is an immutable value describing a set of block positions. Regions
//! live in a [`RegionArena`] and refer to each other through [`RegionId`]
//! handles, which is how compound regions nest without shared ownership.
//!
//! # Invariants
//!
//! - Handles stored inside a region always resolve in the arena that holds it.
//!   - Enforced in: [`RegionArena::insert_arc`], [`RegionArena::replace_arc`].
//! - The child graph is acyclic.
//!   - Enforced in: [`RegionArena::replace_arc`] (insertion cannot create a cycle
//!     because a fresh handle has no parents yet).
//! - Nesting depth never exceeds [`RegionArena::max_depth`].
//!   - Enforced in: [`RegionArena::insert_arc`], [`RegionArena::replace_arc`].
//! - Every stored region has a distinct handle.
//!   - Enforced in: [`RegionArena::insert_arc`] (fails once the arena is full).
//! - A query expands a shared child at most once per distinct input.
//!   - Enforced in: [`PositionCollector::collect`], [`ContainmentQuery::contains`].

mod arena;
pub mod builtins;
mod query;
mod view;

use std::any::Any;
use std::fmt;

use blueprint_primitives::{BlockPos, Compound};
pub use arena::{DEFAULT_MAX_DEPTH, RegionArena};
pub use query::{ContainmentQuery, PositionCollector};
pub use view::RegionView;

use crate::codec::{DecodeCx, EncodeCx};
use crate::error::CodecError;

/// Dense handle to a region stored in a [`RegionArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u32);

impl RegionId {
	/// `None` once the index no longer fits a `u32`.
	#[inline]
	pub(crate) fn from_index(index: usize) -> Option<Self> {
		u32::try_from(index).ok().map(Self)
	}

	#[inline]
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

impl fmt::Display for RegionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Behaviour shared by every region variant.
///
/// Queries receive a context that resolves child handles in the owning arena
/// and expands each shared child once per query. Callers normally go through
/// [`RegionView`], which sets those contexts up.
pub trait Region: Any + fmt::Debug + Send + Sync {
	/// Type tag this region is serialized under.
	fn tag(&self) -> &'static str;

	/// Child handles, in order. Leaf variants have none.
	fn children(&self) -> &[RegionId] {
		&[]
	}

	/// Adds every position of this region, shifted by `offset`, to the collector.
	fn collect_positions(&self, cx: &mut PositionCollector<'_>, offset: BlockPos);

	/// Whether `pos` is one of this region's positions.
	fn contains_pos(&self, cx: &mut ContainmentQuery<'_>, pos: BlockPos) -> bool;

	/// Compares variant-local fields only; children are compared by the caller.
	fn shallow_eq(&self, other: &dyn Region) -> bool;
}

/// A region variant with a registered tag and a field codec.
pub trait RegionVariant: Region + Sized {
	const TAG: &'static str;

	/// Writes this region's fields. The dispatch codec adds the `type` key.
	fn encode_fields(&self, cx: &mut EncodeCx<'_>) -> Result<Compound, CodecError>;

	/// Reads a region from its fields. Unknown keys are ignored.
	fn decode_fields(fields: &Compound, cx: &mut DecodeCx<'_>) -> Result<Self, CodecError>;
}

/// Downcasts a region to a concrete variant.
pub fn downcast_region<R: Region>(region: &dyn Region) -> Option<&R> {
	let any: &dyn Any = region;
	any.downcast_ref::<R>()
}

/// [`Region::shallow_eq`] for variants whose fields are fully covered by `PartialEq`.
pub fn same_variant<R: Region + PartialEq>(this: &R, other: &dyn Region) -> bool {
	downcast_region::<R>(other).is_some_and(|other| other == this)
}
