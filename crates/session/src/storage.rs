//! Region file layout.
//!
//! A region file is an 8-byte magic, a little-endian `u32` schema version and
//! the postcard encoding of a [`Tag`].

use std::io::ErrorKind;
use std::mem::size_of;
use std::path::{Path, PathBuf};

use blueprint_primitives::{BoundedTag, Tag};
use serde::de::DeserializeSeed;

use crate::error::StorageError;

/// Magic bytes identifying a region file.
pub const MAGIC: &[u8; 8] = b"BLPRGNS1";

/// Schema version for file format compatibility.
pub const SCHEMA_VERSION: u32 = 1;

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = MAGIC.len() + size_of::<u32>();

pub fn encode_blob(tag: &Tag) -> Result<Vec<u8>, StorageError> {
	let mut data = Vec::with_capacity(HEADER_SIZE + 64);
	data.extend_from_slice(MAGIC);
	data.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
	Ok(postcard::to_extend(tag, data)?)
}

/// Tag nesting a file may need to hold regions nested `max_depth` deep.
///
/// Each region level is a compound inside its parent's `regions` list. The
/// collection adds two wrapper compounds and a leaf's fields one more level.
pub fn tag_depth_for(max_depth: usize) -> usize {
	max_depth.saturating_mul(2).saturating_add(2)
}

/// Checks the header and decodes the payload, nesting at most `max_tag_depth`.
pub fn decode_blob(data: &[u8], max_tag_depth: usize) -> Result<Tag, StorageError> {
	let truncated = || StorageError::Truncated { len: data.len() };
	let (magic, rest) = data.split_first_chunk::<8>().ok_or_else(truncated)?;
	if magic != MAGIC {
		return Err(StorageError::BadMagic);
	}
	let (version, payload) = rest.split_first_chunk::<4>().ok_or_else(truncated)?;
	let found = u32::from_le_bytes(*version);
	if found != SCHEMA_VERSION {
		return Err(StorageError::UnsupportedVersion { found });
	}
	let mut de = postcard::Deserializer::from_bytes(payload);
	Ok(BoundedTag::new(max_tag_depth).deserialize(&mut de)?)
}

/// Reads a region file. A missing file is `Ok(None)`.
pub fn read_tag(path: &Path, max_tag_depth: usize) -> Result<Option<Tag>, StorageError> {
	let data = match std::fs::read(path) {
		Ok(data) => data,
		Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(e.into()),
	};
	decode_blob(&data, max_tag_depth).map(Some)
}

/// Writes a region file, creating parent directories.
///
/// The data goes to a sibling temporary file first and is renamed over
/// `path`, so readers never observe a partial file.
pub fn write_tag(path: &Path, tag: &Tag) -> Result<(), StorageError> {
	let data = encode_blob(tag)?;
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	let tmp = temp_path(path);
	std::fs::write(&tmp, &data)?;
	if let Err(e) = std::fs::rename(&tmp, path) {
		let _ = std::fs::remove_file(&tmp);
		return Err(e.into());
	}
	Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
	let mut name = path.as_os_str().to_owned();
	name.push(".tmp");
	PathBuf::from(name)
}
