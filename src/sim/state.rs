//! Simulation context
//!
//! Everything the per-frame systems read or write lives in one `SimState`,
//! owned by the host loop and passed explicitly to [`super::tick`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::FrameClock;
use super::motion::Bounds;
use super::spawn::{SpawnTimer, spawn_ball};
use super::store::EntityStore;
use crate::consts::*;

/// Loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Created but not started; ticks do nothing
    Idle,
    /// Initial balls seeded, frames advance the simulation
    Running,
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Ball radius for walls, collisions and drawing
    pub ball_radius: f32,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f64,
    /// Candidate spawn speeds (units per second)
    pub speed_options: Vec<f32>,
    /// Balls seeded by `start`
    pub initial_balls: u32,
    /// FPS counter publish period (milliseconds)
    pub fps_publish_interval_ms: f64,
    /// Optional upper bound on a frame's elapsed time (seconds).
    /// `None` passes the host delta through unchanged.
    pub max_frame_dt: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            speed_options: SPEED_OPTIONS.to_vec(),
            initial_balls: INITIAL_BALLS,
            fps_publish_interval_ms: FPS_PUBLISH_INTERVAL_MS,
            max_frame_dt: None,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    pub config: SimConfig,
    pub phase: SimPhase,
    pub store: EntityStore,
    pub clock: FrameClock,
    pub spawner: SpawnTimer,
    pub rng: Pcg32,
}

impl SimState {
    /// Create an idle simulation with the given seed
    pub fn new(seed: u64, config: SimConfig) -> Self {
        Self {
            seed,
            clock: FrameClock::with_interval(0.0, config.fps_publish_interval_ms),
            spawner: SpawnTimer::new(0.0, config.spawn_interval_ms),
            config,
            phase: SimPhase::Idle,
            store: EntityStore::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Idle -> Running: reset timers to `now_ms` and seed the initial balls.
    ///
    /// Calling this on a running simulation does nothing.
    pub fn start(&mut self, now_ms: f64, bounds: Bounds) {
        if self.phase == SimPhase::Running {
            return;
        }

        self.clock = FrameClock::with_interval(now_ms, self.config.fps_publish_interval_ms);
        self.spawner = SpawnTimer::new(now_ms, self.config.spawn_interval_ms);

        for _ in 0..self.config.initial_balls {
            spawn_ball(
                &mut self.store,
                bounds,
                self.config.ball_radius,
                &self.config.speed_options,
                &mut self.rng,
            );
        }

        self.phase = SimPhase::Running;
        log::info!(
            "Simulation started with {} ball(s), seed {}",
            self.store.count(),
            self.seed
        );
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Last published FPS value
    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }
}
