//! Core value types shared by the region registry and the session layer.

/// Entity access consumed by region containment queries.
pub mod entity;
/// Integer block positions and floating point vectors.
pub mod pos;
/// Self-describing compound tag tree used as the serialization target.
pub mod tag;

pub use entity::Entity;
pub use pos::{BlockPos, Vec3};
pub use tag::{BoundedTag, Compound, DEFAULT_MAX_TAG_DEPTH, FieldError, FieldErrorKind, Tag, TagKind};
