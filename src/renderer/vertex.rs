//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
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

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = [0.529, 0.808, 0.922, 1.0]; // 135, 206, 235
    pub const BIRD: Color = [0.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE: Color = [0.0, 0.784, 0.0, 1.0]; // 0, 200, 0
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
}

/// sRGB channel to linear, for sRGB render targets
pub fn srgb_to_linear(color: Color) -> Color {
    let convert = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [convert(color[0]), convert(color[1]), convert(color[2]), color[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_endpoints() {
        let ends = srgb_to_linear([0.0, 1.0, 0.0, 0.5]);
        assert_eq!(ends[0], 0.0);
        assert!((ends[1] - 1.0).abs() < 1e-5);
        assert_eq!(ends[3], 0.5);
        let mid = srgb_to_linear([0.5, 0.5, 0.5, 1.0]);
        assert!((mid[0] - 0.214).abs() < 0.001);
    }
}
