//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod tricks;

pub use collision::{Aabb, inset_overlap};
pub use state::{
    GameEvent, GameState, GameStatus, Obstacle, ObstacleKind, Particle, Player, Trick,
};
pub use tick::{TickInput, place_obstacle, spawn_delay, tick};
pub use tricks::{handle_trick_key, resolve_trick};
