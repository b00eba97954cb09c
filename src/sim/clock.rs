//! Frame clock and FPS counter
//!
//! The counter publishes once per `publish_interval_ms` with the number of
//! frames seen since the previous publish. No smoothing, so the displayed
//! value lags by up to one interval.

use crate::consts::FPS_PUBLISH_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Timestamp of the previous frame (milliseconds)
    pub last_frame_ms: f64,
    /// Frames counted since the last publish
    pub fps_counter: u32,
    /// Last published FPS value
    pub fps_display: u32,
    /// Timestamp of the last publish (milliseconds)
    pub last_fps_publish_ms: f64,
    pub publish_interval_ms: f64,
}

impl FrameClock {
    pub fn new(start_ms: f64) -> Self {
        Self::with_interval(start_ms, FPS_PUBLISH_INTERVAL_MS)
    }

    pub fn with_interval(start_ms: f64, publish_interval_ms: f64) -> Self {
        Self {
            last_frame_ms: start_ms,
            fps_counter: 0,
            fps_display: 0,
            last_fps_publish_ms: start_ms,
            publish_interval_ms,
        }
    }

    /// Record a frame at `now_ms` and return the elapsed time in seconds.
    ///
    /// The result is not clamped; a timestamp older than the previous frame
    /// yields a negative delta.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_frame_ms) / 1000.0) as f32;
        self.last_frame_ms = now_ms;

        self.fps_counter += 1;
        if now_ms - self.last_fps_publish_ms >= self.publish_interval_ms {
            self.fps_display = self.fps_counter;
            self.fps_counter = 0;
            self.last_fps_publish_ms = now_ms;
        }

        dt
    }

    /// Last published frames-per-second value
    pub fn fps(&self) -> u32 {
        self.fps_display
    }
}
