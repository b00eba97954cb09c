//! Vertex layout shared by the CPU mesh builder and `shader.wgsl`

use bytemuck::{Pod, Zeroable};

use super::shapes::pixel_to_ndc;

/// Colored 2D vertex; `position` is in pixels until [`Vertex::to_ndc`]
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// `@location(0)` position, `@location(1)` color
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex with its position mapped from viewport pixels to NDC
    pub fn to_ndc(self, width: f32, height: f32) -> Self {
        let (x, y) = pixel_to_ndc(self.position[0], self.position[1], width, height);
        Self::new(x, y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Scene colors
pub mod colors {
    pub const BALL: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BACKGROUND: wgpu::Color = wgpu::Color::BLACK;
}
