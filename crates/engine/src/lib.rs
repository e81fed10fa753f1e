//! Simulation engine for double-pendulum trails
//!
//! This crate provides:
//! - Pendulum bodies owning their state and trail
//! - The per-frame loop driving integration, trails and rendering
//! - Commands and angle readouts for a control surface

pub mod body;
pub mod command;
pub mod readout;
pub mod simulation;

pub use body::{integrate_step, update_trail, PendulumBody, DEFAULT_THETA, RESTART_OFFSET};
pub use command::{AngleKind, Command};
pub use readout::{format_angle, normalize_angle, AngleReadout};
pub use simulation::{Simulation, MIN_BODIES};
