use super::Viewport;
use bytemuck::{Pod, Zeroable};

/// Uniform block of the aurora shader. Layout matches the WGSL struct:
/// `time` at offset 0, `resolution` at offset 8 (vec2 alignment).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct AuroraUniforms {
    /// Seconds of animation time
    pub time: f32,
    pub _padding: f32,
    /// Drawing surface size in pixels
    pub resolution: [f32; 2],
}

impl AuroraUniforms {
    pub fn new(viewport: Viewport) -> Self {
        Self { time: 0.0, _padding: 0.0, resolution: viewport.resolution() }
    }

    pub fn set_resolution(&mut self, viewport: Viewport) {
        self.resolution = viewport.resolution();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_sixteen_bytes_with_aligned_resolution() {
        assert_eq!(std::mem::size_of::<AuroraUniforms>(), 16);
        let uniforms = AuroraUniforms { time: 1.5, _padding: 0.0, resolution: [800.0, 600.0] };
        let bytes = bytemuck::bytes_of(&uniforms);
        assert_eq!(&bytes[0..4], &1.5f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &800.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &600.0f32.to_ne_bytes());
    }
}
