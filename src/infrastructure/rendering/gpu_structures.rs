use bytemuck::{Pod, Zeroable};

/// Vertex of the full-screen quad, already in clip space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Vertex buffer descriptor for wgpu
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Two counter-clockwise triangles covering clip space.
pub const FULL_SCREEN_QUAD: [QuadVertex; 6] = [
    QuadVertex::new(-1.0, -1.0),
    QuadVertex::new(1.0, -1.0),
    QuadVertex::new(1.0, 1.0),
    QuadVertex::new(-1.0, -1.0),
    QuadVertex::new(1.0, 1.0),
    QuadVertex::new(-1.0, 1.0),
];

/// WGSL source of the aurora effect.
pub const AURORA_SHADER: &str = include_str!("aurora.wgsl");

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
        (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
    }

    #[test]
    fn quad_covers_clip_space_counter_clockwise() {
        for tri in FULL_SCREEN_QUAD.chunks(3) {
            let area = signed_area(tri[0].position, tri[1].position, tri[2].position);
            // each triangle is half of the 2x2 square
            assert_eq!(area, 4.0);
        }
        assert_eq!(std::mem::size_of::<QuadVertex>(), 8);
    }

    #[test]
    fn shader_exposes_pipeline_entry_points_and_uniforms() {
        assert!(AURORA_SHADER.contains("fn vs_main("));
        assert!(AURORA_SHADER.contains("fn fs_main("));
        assert!(AURORA_SHADER.contains("@group(0) @binding(0)"));
        assert!(AURORA_SHADER.contains("resolution: vec2<f32>"));
    }
}
