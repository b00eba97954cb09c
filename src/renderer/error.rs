//! Render setup errors

use thiserror::Error;

/// Failures while acquiring a drawing surface.
///
/// Any of these means there is nothing to draw on, so the host does not
/// start the frame loop.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Canvas could not be turned into a surface
    #[error("Failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter is compatible with the surface
    #[error("No compatible adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    /// Adapter refused to create a device
    #[error("Failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface reports no usable texture format
    #[error("Surface has no supported formats")]
    NoSurfaceFormat,
}
