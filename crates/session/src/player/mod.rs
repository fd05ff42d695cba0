//! Per-player payload and its record encoding.

use blueprint_primitives::{Compound, Tag};
use blueprint_registry::{CodecError, DispatchCodec, RegionCollection};

/// Key of the payload inside a player record.
pub const PLAYER_DATA_KEY: &str = "blueprint";

const RENDER_PARTICLES_KEY: &str = "render_particles";
const SELECTION_KEY: &str = "selection";

/// Blueprint state attached to one player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerData {
	/// Whether region outlines are drawn for this player.
	pub render_particles: bool,
	/// Regions the player is working on.
	pub selection: RegionCollection,
}

impl PlayerData {
	pub fn encode(&self, codec: DispatchCodec<'_>) -> Result<Compound, CodecError> {
		Ok(Compound::new()
			.with(RENDER_PARTICLES_KEY, self.render_particles)
			.with(SELECTION_KEY, codec.encode_collection(&self.selection)?))
	}

	pub fn decode(fields: &Compound, codec: DispatchCodec<'_>) -> Result<Self, CodecError> {
		let render_particles = fields.get_bool(RENDER_PARTICLES_KEY)?;
		let selection = codec.decode_collection(fields.get_required(SELECTION_KEY)?)?;
		Ok(Self {
			render_particles,
			selection,
		})
	}
}

/// Payload storage on a host player object. Absent by default.
pub trait BlueprintPlayer {
	fn blueprint_data(&self) -> Option<&PlayerData>;

	fn set_blueprint_data(&mut self, data: Option<PlayerData>);

	/// Removes the payload, leaving the player without one.
	fn take_blueprint_data(&mut self) -> Option<PlayerData>;
}

/// Ready-made [`BlueprintPlayer`] storage for hosts to embed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDataSlot(Option<PlayerData>);

impl PlayerDataSlot {
	pub fn new(data: Option<PlayerData>) -> Self {
		Self(data)
	}
}

impl BlueprintPlayer for PlayerDataSlot {
	fn blueprint_data(&self) -> Option<&PlayerData> {
		self.0.as_ref()
	}

	fn set_blueprint_data(&mut self, data: Option<PlayerData>) {
		self.0 = data;
	}

	fn take_blueprint_data(&mut self) -> Option<PlayerData> {
		self.0.take()
	}
}

/// Writes the player's payload into `record`. Players without one leave the record untouched.
pub fn write_player(player: &dyn BlueprintPlayer, record: &mut Compound, codec: DispatchCodec<'_>) -> Result<(), CodecError> {
	if let Some(data) = player.blueprint_data() {
		record.insert(PLAYER_DATA_KEY, data.encode(codec)?);
	}
	Ok(())
}

/// Restores the player's payload from `record`.
///
/// A missing key clears the payload. A malformed one is logged and also
/// clears it.
pub fn read_player(player: &mut dyn BlueprintPlayer, record: &Compound, codec: DispatchCodec<'_>) {
	let data = match record.get(PLAYER_DATA_KEY) {
		None => None,
		Some(Tag::Compound(fields)) => match PlayerData::decode(fields, codec) {
			Ok(data) => Some(data),
			Err(e) => {
				tracing::warn!(error = %e, "discarding malformed player blueprint data");
				None
			}
		},
		Some(other) => {
			tracing::warn!(found = %other.kind(), "discarding player blueprint data that is not a compound");
			None
		}
	};
	player.set_blueprint_data(data);
}

/// Moves the payload from a player object to its replacement.
pub fn copy_player(old: &mut dyn BlueprintPlayer, new: &mut dyn BlueprintPlayer) {
	let data = old.take_blueprint_data();
	if data.is_some() {
		tracing::debug!("moving blueprint data to replacement player");
	}
	new.set_blueprint_data(data);
}

#[cfg(test)]
mod tests;
