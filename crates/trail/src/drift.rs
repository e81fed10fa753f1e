//! Per-frame drift ("gravity") acting on recorded trail points
//!
//! Drift moves the trail itself, not the pendulum. It is applied once per
//! rendered frame, so at high refresh rates it compounds faster than physics.

use simcore::{SimulationConfig, Vec2, Viewport};

/// Length of the directional drift vector before the strength multiplier.
pub const DIRECTIONAL_SCALE: f64 = 2.0;

/// Distances from the viewport center below this are treated as this length
/// when normalizing, so a point sitting on the center does not blow up.
pub const MIN_CENTER_DISTANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drift {
    /// Vacuum: offsets are frozen
    None,
    /// Constant vertical displacement; negative strength pushes upward
    Uniform { strength: f64 },
    /// Radial displacement away from `center` (toward it when strength is negative)
    Directional { strength: f64, center: Vec2 },
}

impl Drift {
    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        if config.vacuum {
            return Drift::None;
        }
        let sign = if config.gravity_reversed { -1.0 } else { 1.0 };
        let strength = config.gravity_strength * sign;
        if config.directional_gravity {
            Drift::Directional { strength, center: viewport.center() }
        } else {
            Drift::Uniform { strength }
        }
    }

    /// Displacement to add this frame to a point currently drawn at `position`.
    pub fn displacement(&self, position: &Vec2) -> Vec2 {
        match *self {
            Drift::None => Vec2::zeros(),
            Drift::Uniform { strength } => Vec2::new(0.0, strength),
            Drift::Directional { strength, center } => {
                let dir = position - center;
                let length = dir.norm().max(MIN_CENTER_DISTANCE);
                dir / length * DIRECTIONAL_SCALE * strength
            }
        }
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, Drift::None)
    }
}
