use crate::{BlockPos, Vec3};

/// Read access to a host entity's location.
///
/// Hosts implement this for whatever entity model they own; regions only ever
/// ask for the block the entity currently occupies.
pub trait Entity {
	/// Exact position of the entity.
	fn position(&self) -> Vec3;

	/// Block containing the entity's position.
	fn block_pos(&self) -> BlockPos {
		self.position().floor()
	}
}

impl Entity for Vec3 {
	fn position(&self) -> Vec3 {
		*self
	}
}

impl Entity for BlockPos {
	fn position(&self) -> Vec3 {
		Vec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
	}

	fn block_pos(&self) -> BlockPos {
		*self
	}
}
