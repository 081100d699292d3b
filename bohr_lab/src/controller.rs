//! Orchestration of slider input and recomputation

use crate::cloud::generate_cloud;
use crate::constants::CLOUD_POINTS;
use crate::curves::{build_curves, CurveSet};
use crate::state::QuantumState;
use glam::Vec3;

/// Owns the current quantum state and everything derived from it.
///
/// Slider input funnels through here; an effective (n, l) change discards
/// and fully replaces the cloud and both curves. Nothing is mutated in
/// place and no stale artifacts survive a state change.
pub struct Controller {
    state: QuantumState,
    cloud: Vec<Vec3>,
    curves: CurveSet,
}

impl Controller {
    pub fn new() -> Self {
        let state = QuantumState::default();
        Self {
            state,
            cloud: generate_cloud(state),
            curves: build_curves(state),
        }
    }

    pub fn state(&self) -> QuantumState {
        self.state
    }

    pub fn cloud(&self) -> &[Vec3] {
        &self.cloud
    }

    pub fn curves(&self) -> &CurveSet {
        &self.curves
    }

    /// Apply raw slider values. l is clamped to n - 1 here, independent of
    /// the slider's own 0..=3 range. Recomputes only on an effective change.
    pub fn set_sliders(&mut self, n: u32, l: u32) {
        let mut next = self.state;
        next.set_n(n);
        next.set_l(l);

        if next != self.state {
            self.state = next;
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        log::info!(
            "regenerating cloud and curves for n={} l={}",
            self.state.n(),
            self.state.l()
        );
        self.cloud = generate_cloud(self.state);
        self.curves = build_curves(self.state);
    }

    /// Expected cloud size, for status display
    pub fn target_points(&self) -> usize {
        CLOUD_POINTS
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
