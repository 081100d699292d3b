//! Pixel-space viewport
//!
//! The cloud projector emits screen pixels directly, so the GPU side only
//! needs an orthographic map from pixel coordinates (origin top-left, y down)
//! into clip space.

use glam::Mat4;

/// Window extent in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Orthographic projection mapping (0,0)..(width,height) pixels to clip space
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(
            0.0,
            self.width as f32,
            self.height as f32,
            0.0,
            -1.0,
            1.0,
        )
    }

    /// Whether a pixel coordinate lies inside the viewport
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

/// Viewport uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniform {
    pub proj: [[f32; 4]; 4],
}

impl ScreenUniform {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            proj: viewport.projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn contains_respects_bounds() {
        let vp = Viewport::new(800, 600);
        assert!(vp.contains(0, 0));
        assert!(vp.contains(799, 599));
        assert!(!vp.contains(800, 0));
        assert!(!vp.contains(0, 600));
        assert!(!vp.contains(-1, 10));
    }

    #[test]
    fn projection_maps_corners_to_clip_space() {
        let vp = Viewport::new(800, 600);
        let proj = vp.projection();

        let top_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x - -1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = proj * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);
    }
}
