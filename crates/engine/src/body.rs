//! Pendulum bodies and the per-body steps of a tick

use std::f64::consts::FRAC_PI_3;

use mechanics::{joints, DoublePendulum, Joints};
use simcore::{Color, PhaseState, Vec2};
use trail::{Segment, Trail, TrailSettings};

/// Starting angle of both links for every new body
pub const DEFAULT_THETA: f64 = FRAC_PI_3;
/// Extra first-link angle of the second body after a restart
pub const RESTART_OFFSET: f64 = 0.01;

/// One simulated double pendulum. Owns its trail exclusively.
#[derive(Debug, Clone)]
pub struct PendulumBody {
    pub state: PhaseState,
    pub color: Color,
    pub trail: Trail,
    /// Hue rotation counter in `[0, 360)`
    pub cycle: u16,
}

impl PendulumBody {
    /// A body at rest at the given angles.
    pub fn new(theta1: f64, theta2: f64, color: Color) -> Self {
        PendulumBody {
            state: PhaseState::new(theta1, theta2),
            color,
            trail: Trail::new(),
            cycle: 0,
        }
    }

    pub fn with_default_angles(color: Color) -> Self {
        Self::new(DEFAULT_THETA, DEFAULT_THETA, color)
    }

    pub fn joints(&self, origin: Vec2, length: f64) -> Joints {
        joints(&self.state, origin, length)
    }
}

/// Advances the body's dynamics by `dt` and records the new tip in its trail.
pub fn integrate_step(
    body: &mut PendulumBody,
    system: &DoublePendulum,
    dt: f64,
    origin: Vec2,
    settings: &TrailSettings,
) {
    mechanics::integrate_step(system, &mut body.state, dt);
    let tip = body.joints(origin, system.params.length).tip;
    body.cycle = trail::record(&mut body.trail, tip, body.cycle, body.color, settings);
}

/// Drifts, recolors and prunes the body's trail, returning what should be drawn.
pub fn update_trail(body: &mut PendulumBody, settings: &TrailSettings) -> Vec<Segment> {
    trail::refresh(&mut body.trail, body.cycle, body.color, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanics::PendulumParams;
    use simcore::{SimulationConfig, Viewport};

    #[test]
    fn test_new_body_is_at_rest() {
        let body = PendulumBody::with_default_angles(Color::WHITE);
        let at_rest = PhaseState { theta1: FRAC_PI_3, theta2: FRAC_PI_3, p1: 0.0, p2: 0.0 };
        assert_eq!(body.state, at_rest);
        assert!(body.trail.is_empty());
        assert_eq!(body.cycle, 0);
    }

    #[test]
    fn test_integrate_step_records_tip_and_cycle() {
        let vp = Viewport::new(1000.0, 800.0);
        let config = SimulationConfig::default();
        let settings = TrailSettings::from_config(&config, &vp);
        let system = DoublePendulum::new(PendulumParams::from_config(&config, &vp));
        let origin = config.origin_px(&vp);

        let mut body = PendulumBody::with_default_angles(Color::WHITE);
        integrate_step(&mut body, &system, config.dt, origin, &settings);

        assert_eq!(body.trail.len(), 1);
        assert_eq!(body.cycle, 1);
        let point = body.trail.points()[0];
        assert_eq!(point.cycle, 0);
        assert_eq!(point.position, body.joints(origin, 100.0).tip);
        // gravity pulls both momenta negative from a rightward swing
        assert!(body.state.p1 < 0.0);
        assert!(body.state.p2 < 0.0);
    }
}
