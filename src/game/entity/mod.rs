// Entity system
//
// Everything an actor needs on its own:
// - State set and facing rules
// - Numeric attributes and their defaults
// - Movement, combat actions and damage resolution
// - Input dispatch policies
// - Per-entity image/text/animation registries

pub mod assets;
pub mod command;
#[allow(clippy::module_inception)]
pub mod entity;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use assets::{AnimationSequence, AssetHandle, AssetId, EntityAssets, ImageSet, TextureHandle};
pub use command::{Command, StandOnly, TransitionPolicy, Unrestricted};
pub use entity::Entity;
pub use state::EntityState;
pub use stats::{EntityStats, DEFAULT_STATS};
