//! Compound tag tree.
//!
//! [`Tag`] mirrors the host's compound-data format: string-keyed maps, ordered
//! lists and a handful of scalar kinds. Everything the registry persists goes
//! through this tree; byte-level encoding is left to whoever stores it.

mod compound;
mod de;
mod error;

use std::fmt;

pub use compound::Compound;
pub use de::{BoundedTag, DEFAULT_MAX_TAG_DEPTH};
pub use error::{FieldError, FieldErrorKind};
use serde::Serialize;

use crate::BlockPos;

/// Discriminant of a [`Tag`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
	Byte,
	Int,
	Long,
	Double,
	String,
	IntArray,
	List,
	Compound,
}

impl fmt::Display for TagKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Byte => "byte",
			Self::Int => "int",
			Self::Long => "long",
			Self::Double => "double",
			Self::String => "string",
			Self::IntArray => "int_array",
			Self::List => "list",
			Self::Compound => "compound",
		};
		f.write_str(name)
	}
}

/// A node of the compound tag tree.
///
/// Deserializing allows at most [`DEFAULT_MAX_TAG_DEPTH`] levels of nesting;
/// use [`BoundedTag`] for a different limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Tag {
	Byte(i8),
	Int(i32),
	Long(i64),
	Double(f64),
	String(String),
	IntArray(Vec<i32>),
	List(Vec<Tag>),
	Compound(Compound),
}

impl Tag {
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Byte(_) => TagKind::Byte,
			Self::Int(_) => TagKind::Int,
			Self::Long(_) => TagKind::Long,
			Self::Double(_) => TagKind::Double,
			Self::String(_) => TagKind::String,
			Self::IntArray(_) => TagKind::IntArray,
			Self::List(_) => TagKind::List,
			Self::Compound(_) => TagKind::Compound,
		}
	}

	pub fn as_compound(&self) -> Option<&Compound> {
		match self {
			Self::Compound(c) => Some(c),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Tag]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Integer value of a `Byte` or `Int` tag.
	pub fn as_int(&self) -> Option<i32> {
		match *self {
			Self::Byte(v) => Some(i32::from(v)),
			Self::Int(v) => Some(v),
			_ => None,
		}
	}

	/// Reads a block position stored as a three element int array.
	pub fn as_block_pos(&self) -> Option<BlockPos> {
		match self {
			Self::IntArray(v) => match v.as_slice() {
				&[x, y, z] => Some(BlockPos::new(x, y, z)),
				_ => None,
			},
			_ => None,
		}
	}
}

macro_rules! impl_tag_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Tag {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_tag_from! {
	i8 => Byte,
	i32 => Int,
	i64 => Long,
	f64 => Double,
	String => String,
	Vec<i32> => IntArray,
	Vec<Tag> => List,
	Compound => Compound,
}

impl From<&str> for Tag {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<bool> for Tag {
	fn from(value: bool) -> Self {
		Self::Byte(i8::from(value))
	}
}

impl From<BlockPos> for Tag {
	fn from(pos: BlockPos) -> Self {
		Self::IntArray(pos.to_array().to_vec())
	}
}

#[cfg(test)]
mod tests;
