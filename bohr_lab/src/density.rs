//! Radial and angular probability densities
//!
//! Stylized stand-ins for the hydrogen radial wavefunctions: the polynomial
//! factors reproduce the node count of each (n, l) shell, not the exact
//! Laguerre normalization. Every variant carries at least an r² factor, so
//! the density vanishes at the origin.

/// Radial probability density for the (n, l) shell, unnormalized.
///
/// Combinations outside the enumerated table fall through to zero; the
/// clamped [`QuantumState`](crate::state::QuantumState) domain never
/// reaches that arm.
pub fn radial_density(r: f32, n: u32, l: u32) -> f32 {
    let e = (-r).exp();
    match (n, l) {
        (1, _) => r * r * e,                                       // 1s
        (2, 0) => r * r * (2.0 - r).powi(2) * e,                   // 2s
        (2, _) => r.powi(4) * e,                                   // 2p
        (3, 0) => r * r * (6.0 - 6.0 * r + r * r).powi(2) * e,     // 3s
        (3, 1) => r.powi(4) * (4.0 - r).powi(2) * e,               // 3p
        (3, _) => r.powi(6) * e,                                   // 3d
        (4, 0) => r * r * (24.0 - 36.0 * r + 12.0 * r * r - r.powi(3)).powi(2) * e, // 4s
        (4, _) => r.powi(4) * (10.0 - r).powi(2) * e,              // 4p and up
        _ => 0.0,
    }
}

/// Angular acceptance weight for polar angle theta.
///
/// Squared Legendre-shaped factors, used as a multiplier on the acceptance
/// probability rather than a normalized PDF. Azimuthal symmetry assumed.
pub fn angular_factor(theta: f32, l: u32) -> f32 {
    let c = theta.cos();
    match l {
        0 => 1.0,
        1 => c * c,
        2 => (3.0 * c * c - 1.0).powi(2),
        _ => (c * (5.0 * c * c - 3.0)).powi(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn valid_states() -> impl Iterator<Item = (u32, u32)> {
        (1..=4u32).flat_map(|n| (0..n).map(move |l| (n, l)))
    }

    #[test]
    fn radial_density_is_nonnegative() {
        for (n, l) in valid_states() {
            for i in 0..=300 {
                let r = i as f32 * 0.1;
                assert!(
                    radial_density(r, n, l) >= 0.0,
                    "negative density at r={r} n={n} l={l}"
                );
            }
        }
    }

    #[test]
    fn radial_density_vanishes_at_origin() {
        for (n, l) in valid_states() {
            assert_eq!(radial_density(0.0, n, l), 0.0);
        }
    }

    #[test]
    fn unlisted_n_falls_through_to_zero() {
        assert_eq!(radial_density(2.0, 5, 0), 0.0);
        assert_eq!(radial_density(2.0, 0, 0), 0.0);
    }

    #[test]
    fn ground_state_peaks_near_two() {
        // r²e^(-r) has its maximum at r = 2
        let (mut best_r, mut best) = (0.0, 0.0);
        for i in 0..=3000 {
            let r = i as f32 * 0.01;
            let p = radial_density(r, 1, 0);
            if p > best {
                best = p;
                best_r = r;
            }
        }
        assert!((best_r - 2.0).abs() < 0.05, "peak at {best_r}");
    }

    #[test]
    fn angular_factor_is_nonnegative() {
        for l in 0..=3 {
            for i in 0..=100 {
                let theta = PI * i as f32 / 100.0;
                assert!(angular_factor(theta, l) >= 0.0);
            }
        }
    }

    #[test]
    fn s_orbital_is_isotropic() {
        for i in 0..=10 {
            let theta = PI * i as f32 / 10.0;
            assert_eq!(angular_factor(theta, 0), 1.0);
        }
    }

    #[test]
    fn p_orbital_vanishes_in_the_equatorial_plane() {
        assert!(angular_factor(PI / 2.0, 1) < 1e-12);
    }
}
