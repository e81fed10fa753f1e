use std::f64::consts::TAU;

use serde::Serialize;
use simcore::PhaseState;

/// Wraps an angle into `[0, 2*pi)`.
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Fixed-width `"  60.0° (1.047 rad)"` text for a monospaced readout.
pub fn format_angle(radians: f64) -> String {
    let normalized = normalize_angle(radians);
    format!("{:>6.1}° ({:>5.3} rad)", normalized.to_degrees(), normalized)
}

/// Display copy of one body's angles, normalized to `[0, 2*pi)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AngleReadout {
    pub theta1: f64,
    pub theta2: f64,
}

impl AngleReadout {
    pub fn from_state(state: &PhaseState) -> Self {
        AngleReadout {
            theta1: normalize_angle(state.theta1),
            theta2: normalize_angle(state.theta2),
        }
    }

    pub fn theta1_degrees(&self) -> f64 {
        self.theta1.to_degrees()
    }

    pub fn theta2_degrees(&self) -> f64 {
        self.theta2.to_degrees()
    }

    pub fn theta1_text(&self) -> String {
        format_angle(self.theta1)
    }

    pub fn theta2_text(&self) -> String {
        format_angle(self.theta2)
    }
}
