//! Shared plumbing for the Quantum vs Bohr laboratory
//!
//! This crate provides the window/GPU setup and the pixel-space viewport
//! used by the point-cloud and chart renderers.

pub mod graphics;
pub mod viewport;

pub use graphics::*;
pub use viewport::*;
