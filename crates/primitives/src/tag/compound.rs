use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use super::{FieldError, Tag, TagKind};
use crate::BlockPos;

/// String-keyed map of tags with deterministic (sorted) key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Compound(BTreeMap<String, Tag>);

impl Compound {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Inserts a value, returning the previous value under `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Tag>) -> Option<Tag> {
		self.0.insert(key.into(), value.into())
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Tag>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&Tag> {
		self.0.get(key)
	}

	pub fn remove(&mut self, key: &str) -> Option<Tag> {
		self.0.remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, Tag> {
		self.0.iter()
	}

	/// Returns the tag under `key` or a [`FieldError`] if absent.
	pub fn get_required(&self, key: &str) -> Result<&Tag, FieldError> {
		self.get(key).ok_or_else(|| FieldError::missing(key))
	}

	pub fn get_byte(&self, key: &str) -> Result<i8, FieldError> {
		match self.get_required(key)? {
			Tag::Byte(v) => Ok(*v),
			other => Err(FieldError::wrong_kind(key, TagKind::Byte, other.kind())),
		}
	}

	/// Booleans are stored as bytes; any non-zero value reads as `true`.
	pub fn get_bool(&self, key: &str) -> Result<bool, FieldError> {
		self.get_byte(key).map(|v| v != 0)
	}

	/// Reads an `Int`, widening a `Byte` if that is what was stored.
	pub fn get_int(&self, key: &str) -> Result<i32, FieldError> {
		let tag = self.get_required(key)?;
		tag.as_int()
			.ok_or_else(|| FieldError::wrong_kind(key, TagKind::Int, tag.kind()))
	}

	pub fn get_long(&self, key: &str) -> Result<i64, FieldError> {
		match self.get_required(key)? {
			Tag::Long(v) => Ok(*v),
			Tag::Int(v) => Ok(i64::from(*v)),
			other => Err(FieldError::wrong_kind(key, TagKind::Long, other.kind())),
		}
	}

	pub fn get_double(&self, key: &str) -> Result<f64, FieldError> {
		match self.get_required(key)? {
			Tag::Double(v) => Ok(*v),
			other => Err(FieldError::wrong_kind(key, TagKind::Double, other.kind())),
		}
	}

	pub fn get_str(&self, key: &str) -> Result<&str, FieldError> {
		let tag = self.get_required(key)?;
		tag.as_str()
			.ok_or_else(|| FieldError::wrong_kind(key, TagKind::String, tag.kind()))
	}

	pub fn get_int_array(&self, key: &str) -> Result<&[i32], FieldError> {
		match self.get_required(key)? {
			Tag::IntArray(v) => Ok(v),
			other => Err(FieldError::wrong_kind(key, TagKind::IntArray, other.kind())),
		}
	}

	pub fn get_list(&self, key: &str) -> Result<&[Tag], FieldError> {
		let tag = self.get_required(key)?;
		tag.as_list()
			.ok_or_else(|| FieldError::wrong_kind(key, TagKind::List, tag.kind()))
	}

	pub fn get_compound(&self, key: &str) -> Result<&Compound, FieldError> {
		let tag = self.get_required(key)?;
		tag.as_compound()
			.ok_or_else(|| FieldError::wrong_kind(key, TagKind::Compound, tag.kind()))
	}

	pub fn get_block_pos(&self, key: &str) -> Result<BlockPos, FieldError> {
		let values = self.get_int_array(key)?;
		match *values {
			[x, y, z] => Ok(BlockPos::new(x, y, z)),
			_ => Err(FieldError::invalid(
				key,
				format!("block position needs 3 ints, found {}", values.len()),
			)),
		}
	}

	/// Like [`get_block_pos`](Self::get_block_pos) but absent keys yield `None`.
	pub fn get_optional_block_pos(&self, key: &str) -> Result<Option<BlockPos>, FieldError> {
		if self.contains_key(key) {
			self.get_block_pos(key).map(Some)
		} else {
			Ok(None)
		}
	}
}

impl FromIterator<(String, Tag)> for Compound {
	fn from_iter<I: IntoIterator<Item = (String, Tag)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Compound {
	type Item = (String, Tag);
	type IntoIter = btree_map::IntoIter<String, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Compound {
	type Item = (&'a String, &'a Tag);
	type IntoIter = btree_map::Iter<'a, String, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
