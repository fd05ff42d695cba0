//! Attaches region collections to host session and player lifecycles.
//!
//! The host owns sessions and player objects. It drives this crate through
//! [`LifecycleHooks`], implemented by [`BlueprintContext`], which owns the
//! sealed region type registry and the [`SessionManager`].

pub mod config;
pub mod context;
pub mod error;
pub mod manager;
pub mod player;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use context::{BlueprintContext, LifecycleHooks};
pub use error::{ConfigError, LoadError, SaveError, StorageError};
pub use manager::{LoadOutcome, SessionManager};
pub use player::{BlueprintPlayer, PLAYER_DATA_KEY, PlayerData, PlayerDataSlot};
pub use session::{LevelSession, SessionHandle};
