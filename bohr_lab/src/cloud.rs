//! Electron cloud generation by rejection sampling

use crate::constants::{ACCEPT_SCALE, CLOUD_POINTS, R_MAX};
use crate::density::{angular_factor, radial_density};
use crate::state::QuantumState;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Attempt budget per accepted point before giving up on a full cloud
const MAX_ATTEMPT_FACTOR: usize = 100;

/// Generate a fresh point cloud for the given state.
///
/// Candidates are drawn uniformly in r ∈ [0, R_MAX], θ ∈ [0, π] and
/// φ ∈ [0, 2π], then accepted with probability
/// `radial_density · angular_factor · ACCEPT_SCALE` and converted to
/// Cartesian coordinates. The attempt budget guards against a degenerate
/// density; on exhaustion the partial cloud is returned and a warning logged.
pub fn generate_cloud(state: QuantumState) -> Vec<Vec3> {
    let mut rng = rand::thread_rng();
    let mut points = Vec::with_capacity(CLOUD_POINTS);

    let max_attempts = CLOUD_POINTS * MAX_ATTEMPT_FACTOR;
    let mut attempts = 0;

    while points.len() < CLOUD_POINTS && attempts < max_attempts {
        attempts += 1;

        let r = rng.gen::<f32>() * R_MAX;
        let theta = rng.gen::<f32>() * PI;
        let phi = rng.gen::<f32>() * 2.0 * PI;

        let score = radial_density(r, state.n(), state.l())
            * angular_factor(theta, state.l())
            * ACCEPT_SCALE;

        if rng.gen::<f32>() < score {
            points.push(Vec3::new(
                r * theta.sin() * phi.cos(),
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
            ));
        }
    }

    if points.len() < CLOUD_POINTS {
        log::warn!(
            "cloud sampling stalled for n={} l={}: {}/{} points after {} attempts",
            state.n(),
            state.l(),
            points.len(),
            CLOUD_POINTS,
            attempts
        );
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_has_exactly_the_target_count() {
        for (n, l) in [(1, 0), (3, 0), (3, 2), (4, 3)] {
            let cloud = generate_cloud(QuantumState::new(n, l));
            assert_eq!(cloud.len(), CLOUD_POINTS, "short cloud for n={n} l={l}");
        }
    }

    #[test]
    fn points_stay_inside_the_sampling_radius() {
        let cloud = generate_cloud(QuantumState::new(3, 1));
        for p in &cloud {
            assert!(p.length() <= R_MAX + 1e-3, "point at {} exceeds bound", p.length());
        }
    }

    #[test]
    fn p_orbital_cloud_avoids_the_equatorial_plane() {
        // cos²θ weighting concentrates p-orbital points along the z axis,
        // so far more points have |z| > |xy| than the other way around.
        let cloud = generate_cloud(QuantumState::new(2, 1));
        let polar = cloud
            .iter()
            .filter(|p| p.z.abs() > (p.x * p.x + p.y * p.y).sqrt())
            .count();
        assert!(polar * 2 > cloud.len(), "only {polar} polar points");
    }
}
