//! Rendering module
//!
//! The simulation hands each frame to a [`Presenter`] as a read-only
//! [`FrameView`]. `RenderState` is the WebGPU implementation used by the web
//! host; it draws balls as triangle lists converted from viewport pixels to NDC.

pub mod error;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use error::RenderError;
pub use pipeline::RenderState;

use crate::sim::{Bounds, Position, SimState};

/// Everything a presenter may look at for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub positions: &'a [Position],
    pub radius: f32,
    pub fps: u32,
    pub surface: Bounds,
}

impl<'a> FrameView<'a> {
    pub fn from_state(state: &'a SimState, surface: Bounds) -> Self {
        Self {
            positions: state.store.positions(),
            radius: state.config.ball_radius,
            fps: state.fps(),
            surface,
        }
    }
}

/// Output sink for finished frames
pub trait Presenter {
    type Error;

    fn present(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}

/// Text for the FPS overlay
pub fn fps_label(fps: u32) -> String {
    format!("fps : {}", fps)
}
