//! Tag-driven encoding of region trees.
//!
//! Every node is a compound carrying its variant tag under [`TYPE_KEY`] next to
//! the variant's own fields. Decoding reads the tag first and hands the
//! remaining fields to the registered decoder, which recurses into children
//! through [`DecodeCx::decode_child`].

use blueprint_primitives::{Compound, Tag};

use crate::collection::RegionCollection;
use crate::error::{CodecError, RegionError};
use crate::region::{DEFAULT_MAX_DEPTH, RegionArena, RegionId};
use crate::types::RegionTypeRegistry;

/// Key holding the variant tag of an encoded region.
pub const TYPE_KEY: &str = "type";

/// Key holding the named regions of an encoded collection.
pub const COLLECTION_KEY: &str = "regions";

/// Default cap on nodes written or read by one codec call.
///
/// Shared children are written out in full once per parent, so a small arena
/// can describe a very large tree.
pub const DEFAULT_MAX_NODES: usize = 1 << 16;

/// Encoder/decoder bound to a registry.
#[derive(Debug, Clone, Copy)]
pub struct DispatchCodec<'r> {
	registry: &'r RegionTypeRegistry,
	max_depth: usize,
	max_nodes: usize,
}

impl<'r> DispatchCodec<'r> {
	pub fn new(registry: &'r RegionTypeRegistry) -> Self {
		Self {
			registry,
			max_depth: DEFAULT_MAX_DEPTH,
			max_nodes: DEFAULT_MAX_NODES,
		}
	}

	/// Limits how deeply encoded nodes may nest.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth.max(1);
		self
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	/// Limits how many nodes one `encode` or `decode` call may produce.
	pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
		self.max_nodes = max_nodes.max(1);
		self
	}

	pub fn max_nodes(&self) -> usize {
		self.max_nodes
	}

	fn budget(&self) -> Budget {
		Budget {
			depth: 0,
			nodes: 0,
			max_depth: self.max_depth,
			max_nodes: self.max_nodes,
		}
	}

	pub fn registry(&self) -> &'r RegionTypeRegistry {
		self.registry
	}

	/// Encodes the region stored under `id`, children included.
	pub fn encode(&self, arena: &RegionArena, id: RegionId) -> Result<Tag, CodecError> {
		let mut cx = EncodeCx {
			arena,
			registry: self.registry,
			budget: self.budget(),
		};
		cx.encode_child(id)
	}

	/// Decodes a node into `arena`, returning the handle of the root.
	///
	/// On error every region appended during the call is dropped again.
	pub fn decode(&self, arena: &mut RegionArena, node: &Tag) -> Result<RegionId, CodecError> {
		let mark = arena.len();
		let mut cx = DecodeCx {
			arena: &mut *arena,
			registry: self.registry,
			budget: self.budget(),
		};
		let result = cx.decode_child(node);
		if result.is_err() {
			arena.truncate(mark);
		}
		result
	}

	/// Encodes a collection as `{"regions": {name: node, ...}}`.
	pub fn encode_collection(&self, collection: &RegionCollection) -> Result<Tag, CodecError> {
		let mut named = Compound::new();
		for (name, id) in collection.entries() {
			named.insert(name, self.encode(collection.arena(), id)?);
		}
		Ok(Tag::Compound(Compound::new().with(COLLECTION_KEY, named)))
	}

	/// Decodes a collection into a fresh arena.
	pub fn decode_collection(&self, node: &Tag) -> Result<RegionCollection, CodecError> {
		let root = node.as_compound().ok_or(CodecError::NotACompound { found: node.kind() })?;
		let named = root.get_compound(COLLECTION_KEY)?;
		let mut collection = RegionCollection::with_max_depth(self.max_depth);
		for (name, node) in named {
			let id = self.decode(collection.arena_mut(), node)?;
			collection.bind(name.clone(), id)?;
		}
		Ok(collection)
	}
}

/// Nesting and node-count limits for one codec call.
struct Budget {
	depth: usize,
	nodes: usize,
	max_depth: usize,
	max_nodes: usize,
}

impl Budget {
	fn enter(&mut self) -> Result<(), CodecError> {
		if self.depth >= self.max_depth {
			return Err(CodecError::DepthExceeded { limit: self.max_depth });
		}
		if self.nodes >= self.max_nodes {
			return Err(CodecError::NodeLimitExceeded { limit: self.max_nodes });
		}
		self.depth += 1;
		self.nodes += 1;
		Ok(())
	}

	fn leave(&mut self) {
		self.depth -= 1;
	}
}

/// Encoding state handed to [`RegionVariant::encode_fields`](crate::RegionVariant::encode_fields).
pub struct EncodeCx<'a> {
	arena: &'a RegionArena,
	registry: &'a RegionTypeRegistry,
	budget: Budget,
}

impl EncodeCx<'_> {
	pub fn arena(&self) -> &RegionArena {
		self.arena
	}

	/// Encodes a child region as a full tagged node.
	pub fn encode_child(&mut self, id: RegionId) -> Result<Tag, CodecError> {
		self.budget.enter()?;
		let result = self.encode_node(id);
		self.budget.leave();
		result
	}

	fn encode_node(&mut self, id: RegionId) -> Result<Tag, CodecError> {
		let region = self.arena.get(id).ok_or(RegionError::DanglingHandle(id))?;
		let def = self
			.registry
			.get(region.tag())
			.ok_or(CodecError::Unregistered { tag: region.tag() })?;
		let mut fields = (def.encode)(region, self).map_err(|e| e.in_variant(def.tag))?;
		fields.insert(TYPE_KEY, def.tag);
		Ok(Tag::Compound(fields))
	}
}

/// Decoding state handed to [`RegionVariant::decode_fields`](crate::RegionVariant::decode_fields).
pub struct DecodeCx<'a> {
	arena: &'a mut RegionArena,
	registry: &'a RegionTypeRegistry,
	budget: Budget,
}

impl DecodeCx<'_> {
	/// Decodes a nested tagged node into the arena and returns its handle.
	pub fn decode_child(&mut self, node: &Tag) -> Result<RegionId, CodecError> {
		self.budget.enter()?;
		let result = self.decode_node(node);
		self.budget.leave();
		result
	}

	fn decode_node(&mut self, node: &Tag) -> Result<RegionId, CodecError> {
		let fields = node.as_compound().ok_or(CodecError::NotACompound { found: node.kind() })?;
		let tag = fields.get(TYPE_KEY).and_then(Tag::as_str).ok_or(CodecError::MissingTag)?;
		let def = self
			.registry
			.get(tag)
			.ok_or_else(|| CodecError::UnknownTag { tag: tag.to_owned() })?;
		let region = (def.decode)(fields, self).map_err(|e| e.in_variant(def.tag))?;
		Ok(self.arena.insert_arc(region)?)
	}
}
