//! ECS Balls - bouncing balls that annihilate on contact
//!
//! Core modules:
//! - `sim`: Entity storage and the per-frame systems (motion, collision, spawn, clock)
//! - `renderer`: Presenter boundary and the WebGPU circle pipeline
//! - `settings`: Tunable simulation and presentation parameters

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Ball radius shared by motion, collision and drawing
    pub const BALL_RADIUS: f32 = 5.0;

    /// Time between spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 5000.0;

    /// Spawn speeds (units per second), one picked uniformly per spawn
    pub const SPEED_OPTIONS: [f32; 3] = [50.0, 100.0, 150.0];

    /// Balls created when the loop starts
    pub const INITIAL_BALLS: u32 = 1;

    /// FPS counter publish period (milliseconds)
    pub const FPS_PUBLISH_INTERVAL_MS: f64 = 1000.0;

    /// Triangle fan segments per drawn ball
    pub const CIRCLE_SEGMENTS: u32 = 16;
}
