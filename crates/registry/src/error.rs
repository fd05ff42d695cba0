use blueprint_primitives::FieldError;

use crate::region::RegionId;

/// Errors raised while assembling a [`RegionTypeRegistry`](crate::RegionTypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two definitions claim the same type tag.
	#[error("duplicate region type tag {tag:?}")]
	DuplicateTag { tag: &'static str },
	#[error("unknown region type {tag:?}")]
	UnknownTag { tag: String },
}

/// Structural errors raised by a [`RegionArena`](crate::RegionArena).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
	/// Storing the region would make it reachable from its own children.
	#[error("region {id} would contain itself")]
	CyclicRegion { id: RegionId },
	/// A child handle does not resolve in the arena.
	#[error("dangling region handle {0}")]
	DanglingHandle(RegionId),
	#[error("region nesting depth {depth} exceeds limit {limit}")]
	DepthExceeded { depth: usize, limit: usize },
	/// No handle is left for another region.
	#[error("region arena is full at {len} regions")]
	ArenaFull { len: usize },
}

/// Errors raised while encoding or decoding region trees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
	/// The node has no `type` string.
	#[error("region node has no type tag")]
	MissingTag,
	/// The node's tag is not in the registry.
	#[error("unknown region type {tag:?}")]
	UnknownTag { tag: String },
	/// A region's variant is not registered, so it cannot be encoded.
	#[error("region type {tag:?} is not registered")]
	Unregistered { tag: &'static str },
	/// The node is not a compound tag.
	#[error("region node must be a compound, found {found}")]
	NotACompound { found: blueprint_primitives::TagKind },
	/// A field is missing or has the wrong shape.
	#[error("malformed {} region: {error}", .tag.unwrap_or("unknown"))]
	MalformedField {
		tag: Option<&'static str>,
		#[source]
		error: FieldError,
	},
	#[error("region nesting exceeds limit {limit}")]
	DepthExceeded { limit: usize },
	/// The tree holds more nodes than one codec call may write or read.
	#[error("region tree exceeds {limit} nodes")]
	NodeLimitExceeded { limit: usize },
	/// A registered encoder was handed a region of another variant.
	#[error("encoder for {expected:?} received a {found:?} region")]
	VariantMismatch { expected: &'static str, found: &'static str },
	#[error(transparent)]
	Region(#[from] RegionError),
}

impl From<FieldError> for CodecError {
	fn from(error: FieldError) -> Self {
		Self::MalformedField { tag: None, error }
	}
}

impl CodecError {
	/// Attaches the region tag to a field error that does not carry one yet.
	pub(crate) fn in_variant(self, tag: &'static str) -> Self {
		match self {
			Self::MalformedField { tag: None, error } => Self::MalformedField { tag: Some(tag), error },
			other => other,
		}
	}
}
