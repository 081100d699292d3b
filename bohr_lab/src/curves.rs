//! Density curves for the comparison charts

use crate::constants::{BOHR_PEAK_WIDTH, BOHR_RADIUS_SCALE, CURVE_R_MAX, CURVE_SAMPLES};
use crate::density::radial_density;
use crate::state::QuantumState;

/// A sampled 1D density curve as (r, density) pairs
#[derive(Debug, Clone, Default)]
pub struct DensityCurve {
    pub samples: Vec<(f32, f32)>,
}

impl DensityCurve {
    /// Largest density value in the curve
    pub fn max_density(&self) -> f32 {
        self.samples.iter().map(|&(_, p)| p).fold(0.0, f32::max)
    }

    /// Scale so the peak is 1.0; an all-zero curve is left untouched
    fn normalize(&mut self) {
        let max = self.max_density();
        if max > 0.0 {
            for (_, p) in &mut self.samples {
                *p /= max;
            }
        }
    }
}

/// Both comparison curves for one state, plus chart metadata
#[derive(Debug, Clone, Default)]
pub struct CurveSet {
    /// Single Gaussian peak at the scaled Bohr orbit radius
    pub bohr: DensityCurve,
    /// Radial density normalized to a unit peak
    pub quantum: DensityCurve,
    /// Radial node count n - l - 1, shown in the quantum chart title
    pub radial_nodes: u32,
}

/// Sample both curves at CURVE_SAMPLES evenly spaced radii in [0, CURVE_R_MAX]
pub fn build_curves(state: QuantumState) -> CurveSet {
    let r_at = |i: usize| CURVE_R_MAX * i as f32 / (CURVE_SAMPLES - 1) as f32;

    let bohr_r = (state.n() * state.n()) as f32 * BOHR_RADIUS_SCALE;
    let bohr = DensityCurve {
        samples: (0..CURVE_SAMPLES)
            .map(|i| {
                let r = r_at(i);
                (r, (-(r - bohr_r).powi(2) / BOHR_PEAK_WIDTH).exp())
            })
            .collect(),
    };

    let mut quantum = DensityCurve {
        samples: (0..CURVE_SAMPLES)
            .map(|i| {
                let r = r_at(i);
                (r, radial_density(r, state.n(), state.l()))
            })
            .collect(),
    };
    quantum.normalize();

    CurveSet {
        bohr,
        quantum,
        radial_nodes: state.radial_nodes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak_radius(curve: &DensityCurve) -> f32 {
        curve
            .samples
            .iter()
            .fold((0.0, f32::MIN), |(br, bp), &(r, p)| {
                if p > bp {
                    (r, p)
                } else {
                    (br, bp)
                }
            })
            .0
    }

    #[test]
    fn quantum_curve_peaks_at_one_for_every_state() {
        for n in 1..=4u32 {
            for l in 0..n {
                let set = build_curves(QuantumState::new(n, l));
                assert!((set.quantum.max_density() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn all_zero_curve_survives_normalization() {
        let mut curve = DensityCurve {
            samples: vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
        };
        curve.normalize();
        assert!(curve.samples.iter().all(|&(_, p)| p == 0.0));
    }

    #[test]
    fn ground_state_scenario() {
        // n=1: Bohr peak at 0.8·1² = 0.8, quantum peak near r = 2, no nodes
        let set = build_curves(QuantumState::new(1, 0));
        assert!((peak_radius(&set.bohr) - 0.8).abs() < 0.15);
        assert!((peak_radius(&set.quantum) - 2.0).abs() < 0.15);
        assert_eq!(set.radial_nodes, 0);
    }

    #[test]
    fn d_orbital_scenario() {
        // n=3, l=2: nodeless r⁶e^(-r), normalized peak at r = 6
        let set = build_curves(QuantumState::new(3, 2));
        assert_eq!(set.radial_nodes, 0);
        assert!((peak_radius(&set.quantum) - 6.0).abs() < 0.15);
    }

    #[test]
    fn curve_sampling_grid() {
        let set = build_curves(QuantumState::default());
        assert_eq!(set.bohr.samples.len(), CURVE_SAMPLES);
        assert_eq!(set.quantum.samples.len(), CURVE_SAMPLES);
        assert_eq!(set.bohr.samples[0].0, 0.0);
        let last = set.bohr.samples.last().unwrap().0;
        assert!((last - CURVE_R_MAX).abs() < 1e-4);
    }
}
