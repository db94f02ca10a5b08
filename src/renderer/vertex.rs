//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (clip space) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (straight alpha)
pub mod colors {
    /// RGBA, each channel in [0, 1]
    pub type Color = [f32; 4];

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    pub const BACKGROUND: Color = rgba(16, 10, 32, 255);
    pub const STAR: Color = rgba(255, 255, 255, 70);
    pub const CLOUD: Color = rgba(255, 255, 255, 46);
    pub const BIRD: Color = rgba(255, 216, 225, 255);
    pub const STORM: Color = rgba(184, 123, 255, 64);
    pub const CRAFT_BODY: Color = rgba(230, 212, 255, 255);
    pub const CRAFT_WINDOW: Color = rgba(59, 44, 95, 255);
    /// Craft nose and progress fill
    pub const ACCENT: Color = rgba(184, 123, 255, 255);
    pub const PROGRESS_TRACK: Color = rgba(255, 255, 255, 30);
    pub const DIM: Color = rgba(0, 0, 0, 130);
    pub const COMPLETION_BACKGROUND: Color = rgba(43, 23, 79, 255);
    pub const SPARKLE: Color = rgba(255, 134, 166, 180);
    pub const FIGURE_LEFT: Color = rgba(90, 58, 133, 255);
    pub const FIGURE_RIGHT: Color = rgba(255, 143, 177, 255);
    pub const ARMS: Color = rgba(255, 214, 234, 255);
}
