//! 3D-to-screen projection of the electron cloud
//!
//! The cloud tumbles about the vertical and horizontal axes at fixed
//! per-frame rates, then maps orthographically into pixel space with a
//! simple depth-cued brightness. Projection is recomputed from the full
//! cloud every frame; nothing is cached across frames.

use common::Viewport;
use glam::Vec3;

/// Per-frame yaw increment (radians)
pub const YAW_RATE: f32 = 0.01;
/// Per-frame pitch increment (radians)
pub const PITCH_RATE: f32 = 0.005;

/// Orthographic scale divisor: pixels per world unit = viewport height / 45
const SCALE_DIVISOR: f32 = 45.0;

/// Depth-cue brightness: base level minus falloff per unit depth
const BRIGHT_BASE: f32 = 180.0;
const BRIGHT_FALLOFF: f32 = 8.0;

/// Accumulated rotation angles, advanced once per frame.
///
/// Unbounded on purpose; trigonometric periodicity handles the wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation {
    pub angle_y: f32,
    pub angle_x: f32,
}

impl Rotation {
    /// Advance the cosmetic tumble by one frame
    pub fn advance(&mut self) {
        self.angle_y += YAW_RATE;
        self.angle_x += PITCH_RATE;
    }
}

/// A cloud point mapped to the screen for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedPoint {
    pub x: i32,
    pub y: i32,
    pub brightness: u8,
}

impl ProjectedPoint {
    /// Blue-biased depth-cue color, channels clamped at zero
    pub fn color(&self) -> [u8; 3] {
        let b = self.brightness;
        [b.saturating_sub(100), b.saturating_sub(40), b]
    }
}

/// Rotate a point by the current angles: vertical axis first, then horizontal
pub fn rotate(p: Vec3, rot: Rotation) -> Vec3 {
    let (sy, cy) = rot.angle_y.sin_cos();
    let rx = p.x * cy - p.z * sy;
    let rz = p.x * sy + p.z * cy;

    let (sx, cx) = rot.angle_x.sin_cos();
    let ry = p.y * cx - rz * sx;
    let rz = p.y * sx + rz * cx;

    Vec3::new(rx, ry, rz)
}

/// Project the full cloud for one frame, anchored at the given pixel.
///
/// Points landing outside the viewport are dropped, not drawn.
pub fn project_cloud(
    points: &[Vec3],
    rot: Rotation,
    viewport: Viewport,
    anchor: (i32, i32),
) -> Vec<ProjectedPoint> {
    let scale = viewport.height as f32 / SCALE_DIVISOR;

    points
        .iter()
        .filter_map(|&p| {
            let r = rotate(p, rot);
            let x = anchor.0 + (r.x * scale) as i32;
            let y = anchor.1 + (r.y * scale) as i32;
            if !viewport.contains(x, y) {
                return None;
            }
            let brightness = (BRIGHT_BASE - r.z * BRIGHT_FALLOFF).clamp(0.0, 255.0) as u8;
            Some(ProjectedPoint { x, y, brightness })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_round_trip_restores_coordinates() {
        let p = Vec3::new(3.0, -1.5, 7.0);
        let forward = Rotation {
            angle_y: 0.73,
            angle_x: 0.0,
        };
        let back = Rotation {
            angle_y: -0.73,
            angle_x: 0.0,
        };
        let q = rotate(rotate(p, forward), back);
        assert!((q.x - p.x).abs() < 1e-4);
        assert!((q.y - p.y).abs() < 1e-4);
        assert!((q.z - p.z).abs() < 1e-4);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(2.0, 5.0, -3.0);
        let rot = Rotation {
            angle_y: 1.2,
            angle_x: 0.4,
        };
        assert!((rotate(p, rot).length() - p.length()).abs() < 1e-4);
    }

    #[test]
    fn origin_projects_to_the_anchor() {
        let vp = Viewport::new(1300, 850);
        let projected = project_cloud(&[Vec3::ZERO], Rotation::default(), vp, (433, 425));
        assert_eq!(projected.len(), 1);
        assert_eq!((projected[0].x, projected[0].y), (433, 425));
    }

    #[test]
    fn out_of_viewport_points_are_skipped() {
        let vp = Viewport::new(100, 100);
        // height/45 scale puts a point 30 units out far beyond a 100 px window
        let projected = project_cloud(
            &[Vec3::new(30.0, 0.0, 0.0)],
            Rotation::default(),
            vp,
            (50, 50),
        );
        assert!(projected.is_empty());
    }

    #[test]
    fn brightness_is_depth_cued_and_clamped() {
        let vp = Viewport::new(1300, 850);
        let near = project_cloud(&[Vec3::new(0.0, 0.0, -5.0)], Rotation::default(), vp, (650, 425));
        let far = project_cloud(&[Vec3::new(0.0, 0.0, 5.0)], Rotation::default(), vp, (650, 425));
        assert!(near[0].brightness > far[0].brightness);

        // deep enough to push 180 - 8z past the u8 range on either side
        let clamped = project_cloud(
            &[Vec3::new(0.0, 0.0, 30.0), Vec3::new(0.0, 0.0, -30.0)],
            Rotation::default(),
            vp,
            (650, 425),
        );
        assert_eq!(clamped[0].brightness, 0);
        assert_eq!(clamped[1].brightness, 255);
    }

    #[test]
    fn color_is_blue_biased() {
        let p = ProjectedPoint {
            x: 0,
            y: 0,
            brightness: 180,
        };
        assert_eq!(p.color(), [80, 140, 180]);

        let dim = ProjectedPoint {
            x: 0,
            y: 0,
            brightness: 30,
        };
        assert_eq!(dim.color(), [0, 0, 30]);
    }
}
