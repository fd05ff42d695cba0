//! Depth-bounded deserialization of [`Tag`] trees.
//!
//! The format is the one `#[derive(Serialize)]` writes for [`Tag`]: an
//! externally tagged enum whose `List` and `Compound` variants nest. Every
//! nesting level spends one unit of budget, so corrupt input fails with an
//! error instead of recursing without bound.

use std::fmt;

use serde::de::{self, DeserializeSeed, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::{Compound, Tag};

/// Nesting allowed by the plain [`Deserialize`] impls of [`Tag`] and [`Compound`].
pub const DEFAULT_MAX_TAG_DEPTH: usize = 512;

const VARIANTS: &[&str] = &["Byte", "Int", "Long", "Double", "String", "IntArray", "List", "Compound"];

/// Seed that reads a [`Tag`] nested at most `depth` levels deep.
///
/// A scalar counts as one level; each `List` or `Compound` around it adds one.
#[derive(Debug, Clone, Copy)]
pub struct BoundedTag {
	depth: usize,
}

impl BoundedTag {
	pub const fn new(depth: usize) -> Self {
		Self { depth }
	}

	fn nested(self) -> Self {
		Self { depth: self.depth - 1 }
	}
}

impl<'de> DeserializeSeed<'de> for BoundedTag {
	type Value = Tag;

	fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Tag, D::Error> {
		if self.depth == 0 {
			return Err(de::Error::custom("tag nesting exceeds depth limit"));
		}
		deserializer.deserialize_enum("Tag", VARIANTS, self)
	}
}

impl<'de> Visitor<'de> for BoundedTag {
	type Value = Tag;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a tag")
	}

	fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Tag, A::Error> {
		let (variant, access) = data.variant::<Variant>()?;
		Ok(match variant {
			Variant::Byte => Tag::Byte(access.newtype_variant()?),
			Variant::Int => Tag::Int(access.newtype_variant()?),
			Variant::Long => Tag::Long(access.newtype_variant()?),
			Variant::Double => Tag::Double(access.newtype_variant()?),
			Variant::String => Tag::String(access.newtype_variant()?),
			Variant::IntArray => Tag::IntArray(access.newtype_variant()?),
			Variant::List => Tag::List(access.newtype_variant_seed(ListSeed(self.nested()))?),
			Variant::Compound => Tag::Compound(access.newtype_variant_seed(CompoundSeed(self.nested()))?),
		})
	}
}

struct ListSeed(BoundedTag);

impl<'de> DeserializeSeed<'de> for ListSeed {
	type Value = Vec<Tag>;

	fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Vec<Tag>, D::Error> {
		deserializer.deserialize_seq(self)
	}
}

impl<'de> Visitor<'de> for ListSeed {
	type Value = Vec<Tag>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a list of tags")
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<Tag>, A::Error> {
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
		while let Some(item) = seq.next_element_seed(self.0)? {
			items.push(item);
		}
		Ok(items)
	}
}

/// Reads a [`Compound`] whose values get the wrapped budget.
pub(super) struct CompoundSeed(pub(super) BoundedTag);

impl<'de> DeserializeSeed<'de> for CompoundSeed {
	type Value = Compound;

	fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Compound, D::Error> {
		deserializer.deserialize_map(self)
	}
}

impl<'de> Visitor<'de> for CompoundSeed {
	type Value = Compound;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a compound tag")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Compound, A::Error> {
		let mut compound = Compound::new();
		while let Some(key) = map.next_key::<String>()? {
			let value = map.next_value_seed(self.0)?;
			compound.insert(key, value);
		}
		Ok(compound)
	}
}

impl<'de> Deserialize<'de> for Tag {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		BoundedTag::new(DEFAULT_MAX_TAG_DEPTH).deserialize(deserializer)
	}
}

impl<'de> Deserialize<'de> for Compound {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		CompoundSeed(BoundedTag::new(DEFAULT_MAX_TAG_DEPTH - 1)).deserialize(deserializer)
	}
}

/// Variant identifier, accepted by index or by name.
enum Variant {
	Byte,
	Int,
	Long,
	Double,
	String,
	IntArray,
	List,
	Compound,
}

impl<'de> Deserialize<'de> for Variant {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_identifier(VariantVisitor)
	}
}

struct VariantVisitor;

impl Visitor<'_> for VariantVisitor {
	type Value = Variant;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a tag variant")
	}

	fn visit_u64<E: de::Error>(self, index: u64) -> Result<Variant, E> {
		Ok(match index {
			0 => Variant::Byte,
			1 => Variant::Int,
			2 => Variant::Long,
			3 => Variant::Double,
			4 => Variant::String,
			5 => Variant::IntArray,
			6 => Variant::List,
			7 => Variant::Compound,
			_ => return Err(de::Error::invalid_value(de::Unexpected::Unsigned(index), &self)),
		})
	}

	fn visit_str<E: de::Error>(self, name: &str) -> Result<Variant, E> {
		Ok(match name {
			"Byte" => Variant::Byte,
			"Int" => Variant::Int,
			"Long" => Variant::Long,
			"Double" => Variant::Double,
			"String" => Variant::String,
			"IntArray" => Variant::IntArray,
			"List" => Variant::List,
			"Compound" => Variant::Compound,
			_ => return Err(de::Error::unknown_variant(name, VARIANTS)),
		})
	}
}
