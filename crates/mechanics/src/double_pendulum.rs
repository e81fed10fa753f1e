//! Double Pendulum - Hamiltonian dynamics of two equal uniform rods
//!
//! Both links share mass `m` and length `l`. With `d = theta1 - theta2`:
//!
//! ```text
//! theta1_dot =  6/(m l^2) * (2 p1 - 3 cos(d) p2) / (16 - 9 cos^2(d))
//! theta2_dot =  6/(m l^2) * (8 p2 - 3 cos(d) p1) / (16 - 9 cos^2(d))
//! p1_dot     = -m l^2/2 * ( theta1_dot theta2_dot sin(d) + 3 g/l sin(theta1))
//! p2_dot     = -m l^2/2 * (-theta1_dot theta2_dot sin(d) +   g/l sin(theta2))
//! ```

use serde::{Deserialize, Serialize};
use simcore::{
    ExplicitEuler, HamiltonianSystem, Integrator, PhaseState, SimContext, SimulationConfig,
    Viewport,
};

/// Physical parameters of the pendulum pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumParams {
    /// Mass of each rod
    pub mass: f64,
    /// Length of each rod (pixels when driven from the viewport)
    pub length: f64,
    /// Gravitational acceleration
    pub gravity: f64,
}

impl Default for PendulumParams {
    fn default() -> Self {
        PendulumParams { mass: 1.0, length: 1.0, gravity: 9.81 }
    }
}

impl PendulumParams {
    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        PendulumParams {
            mass: config.mass,
            length: config.arm_length(viewport),
            gravity: config.gravity,
        }
    }
}

/// Prefactors of the equations of motion, derived once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumConstants {
    /// `6 / (m l^2)`
    pub prefactor_t: f64,
    /// `m l^2 / 2`
    pub prefactor_p: f64,
    /// `g / l`
    pub constant: f64,
}

impl From<&PendulumParams> for PendulumConstants {
    fn from(p: &PendulumParams) -> Self {
        let ml2 = p.mass * p.length * p.length;
        PendulumConstants {
            prefactor_t: 6.0 / ml2,
            prefactor_p: ml2 / 2.0,
            constant: p.gravity / p.length,
        }
    }
}

/// Shared denominator `16 - 9 cos^2(d)`. Bounded below by 7 for every real `d`.
pub fn denominator(delta: f64) -> f64 {
    let c = delta.cos();
    16.0 - 9.0 * c * c
}

#[derive(Debug, Clone, Copy)]
pub struct DoublePendulum {
    pub params: PendulumParams,
    pub constants: PendulumConstants,
}

impl DoublePendulum {
    pub fn new(params: PendulumParams) -> Self {
        DoublePendulum { constants: PendulumConstants::from(&params), params }
    }

    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        Self::new(PendulumParams::from_config(config, viewport))
    }

    /// Angular velocities `(theta1_dot, theta2_dot)`.
    pub fn angular_velocities(&self, s: &PhaseState) -> (f64, f64) {
        let k = &self.constants;
        let cos_d = (s.theta1 - s.theta2).cos();
        let denom = denominator(s.theta1 - s.theta2);
        let t1_dot = k.prefactor_t * (2.0 * s.p1 - 3.0 * cos_d * s.p2) / denom;
        let t2_dot = k.prefactor_t * (8.0 * s.p2 - 3.0 * cos_d * s.p1) / denom;
        (t1_dot, t2_dot)
    }

    /// Kinetic energy, `(p1 theta1_dot + p2 theta2_dot) / 2`.
    pub fn kinetic_energy(&self, s: &PhaseState) -> f64 {
        let (t1_dot, t2_dot) = self.angular_velocities(s);
        0.5 * (s.p1 * t1_dot + s.p2 * t2_dot)
    }

    /// Potential energy relative to the pivot, positive `theta` swinging right.
    pub fn potential_energy(&self, s: &PhaseState) -> f64 {
        let p = &self.params;
        -0.5 * p.mass * p.gravity * p.length * (3.0 * s.theta1.cos() + s.theta2.cos())
    }
}

impl HamiltonianSystem for DoublePendulum {
    fn derivatives(&self, s: &PhaseState) -> PhaseState {
        let k = &self.constants;
        let (t1_dot, t2_dot) = self.angular_velocities(s);
        let sin_d = (s.theta1 - s.theta2).sin();
        let p1_dot = -k.prefactor_p * (t1_dot * t2_dot * sin_d + 3.0 * k.constant * s.theta1.sin());
        let p2_dot = -k.prefactor_p * (-t1_dot * t2_dot * sin_d + k.constant * s.theta2.sin());
        PhaseState { theta1: t1_dot, theta2: t2_dot, p1: p1_dot, p2: p2_dot }
    }

    fn energy(&self, s: &PhaseState) -> f64 {
        self.kinetic_energy(s) + self.potential_energy(s)
    }
}

/// Advances `state` by one explicit Euler step of size `dt`.
pub fn integrate_step(system: &DoublePendulum, state: &mut PhaseState, dt: f64) {
    ExplicitEuler.step(&SimContext { dt, t: 0.0 }, system, state);
}
