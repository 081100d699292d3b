//! Quantum vs Bohr Laboratory
//!
//! Interactive comparison of the Bohr orbit picture with the quantum-mechanical
//! radial probability model:
//!
//! - **Electron cloud**: rotating 3D point cloud rejection-sampled from a
//!   radial-times-angular probability density
//! - **Bohr chart**: single Gaussian peak at the scaled classical orbit radius
//! - **Quantum chart**: normalized radial density with its n - l - 1 nodes
//!
//! Two sliders select the principal quantum number n and the orbital shape l.

pub mod state;
pub mod density;
pub mod cloud;
pub mod curves;
pub mod projector;
pub mod controller;
pub mod renderer;
pub mod ui;

/// Tunables for the sampling and chart pipeline
pub mod constants {
    /// Number of accepted samples in the electron cloud
    pub const CLOUD_POINTS: usize = 4500;

    /// Radial bound of the sampling domain
    pub const R_MAX: f32 = 30.0;

    /// Empirical acceptance-rate scale for the unnormalized densities.
    /// Keeps the rejection rate in a usable range; not a physical quantity.
    pub const ACCEPT_SCALE: f32 = 1.5;

    /// Samples per density curve
    pub const CURVE_SAMPLES: usize = 200;

    /// Radial extent of the comparison charts
    pub const CURVE_R_MAX: f32 = 25.0;

    /// Visual scaling of the Bohr orbit radius: r = n² · 0.8
    pub const BOHR_RADIUS_SCALE: f32 = 0.8;

    /// Width parameter of the Bohr chart's Gaussian peak
    pub const BOHR_PEAK_WIDTH: f32 = 0.5;
}
