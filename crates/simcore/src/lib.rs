//! Shared simulation primitives
//!
//! This crate provides:
//! - Phase-space state and the Hamiltonian system trait
//! - Integrators over that trait
//! - Viewport geometry, colors and the run-time configuration

pub mod color;
pub mod config;
pub mod error;
pub mod integrators;
pub mod traits;
pub mod viewport;

pub use color::{palette_color, Color, PALETTE};
pub use config::{Origin, SimulationConfig};
pub use error::{ConfigError, ConfigResult};
pub use integrators::{ExplicitEuler, Integrator};
pub use traits::*;
pub use viewport::{Bounds, Viewport};
