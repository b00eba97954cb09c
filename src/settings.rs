//! Settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{CIRCLE_SEGMENTS, SPEED_OPTIONS};
use crate::sim::SimConfig;

/// Simulation and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation parameters
    pub simulation: SimConfig,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Rendering ===
    /// Triangle segments per ball
    pub circle_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimConfig::default(),
            show_fps: true,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ecs_balls_settings";

    /// Replace values that would break the simulation with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = SimConfig::default();
        let sim = &mut self.simulation;

        if !(sim.ball_radius.is_finite() && sim.ball_radius > 0.0) {
            log::warn!("Invalid ball radius {}, using default", sim.ball_radius);
            sim.ball_radius = defaults.ball_radius;
        }
        if !(sim.spawn_interval_ms.is_finite() && sim.spawn_interval_ms >= 0.0) {
            log::warn!("Invalid spawn interval {}, using default", sim.spawn_interval_ms);
            sim.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if !(sim.fps_publish_interval_ms.is_finite() && sim.fps_publish_interval_ms > 0.0) {
            log::warn!(
                "Invalid FPS interval {}, using default",
                sim.fps_publish_interval_ms
            );
            sim.fps_publish_interval_ms = defaults.fps_publish_interval_ms;
        }

        sim.speed_options.retain(|s| s.is_finite());
        if sim.speed_options.is_empty() {
            log::warn!("No usable spawn speeds, using defaults");
            sim.speed_options = SPEED_OPTIONS.to_vec();
        }

        if let Some(max) = sim.max_frame_dt {
            if !(max.is_finite() && max > 0.0) {
                log::warn!("Invalid max frame dt {}, disabling clamp", max);
                sim.max_frame_dt = None;
            }
        }

        if self.circle_segments < 3 {
            self.circle_segments = CIRCLE_SEGMENTS;
        }

        self
    }

    /// Parse stored JSON, sanitizing whatever was read
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self)
            .inspect_err(|e| log::warn!("Could not serialize settings: {}", e))
            .ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        match stored.as_deref().and_then(Self::from_json) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let (Some(storage), Some(json)) = (storage, self.to_json()) {
            match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::debug!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {:?}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
