use serde::{Deserialize, Serialize};

/// Pixel dimensions of the host viewport or of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from CSS pixel sizes as reported by `window.innerWidth`.
    /// Negative and non-finite values collapse to zero.
    pub fn from_css_pixels(width: f64, height: f64) -> Self {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v.round().min(u32::MAX as f64) as u32 } else { 0 };
        Self::new(clamp(width), clamp(height))
    }

    /// A minimised window reports a zero dimension; no surface can be that size.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Smallest size a swap chain accepts.
    pub fn at_least_one_pixel(self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }

    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}
