//! Simulation module
//!
//! All per-frame logic lives here. This module has no rendering or platform
//! dependencies:
//! - Timestamps come in from the host, never read from a clock
//! - Randomness goes through `RandomSource` so tests can script it
//! - Entities are dense indices into paired component arrays

pub mod clock;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod store;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{detect, detect_and_remove};
pub use motion::{Bounds, update};
pub use spawn::{RandomSource, SpawnTimer, maybe_spawn, spawn_ball};
pub use state::{SimConfig, SimPhase, SimState};
pub use store::{Entity, EntityStore, Position, Velocity};
pub use tick::{FrameStats, tick};
