use serde::{Deserialize, Serialize};

/// Planar position or displacement in screen pixels (y grows downward).
pub type Vec2 = nalgebra::Vector2<f64>;

/// Canonical coordinates of a two-link planar system.
///
/// Angles are measured from the downward vertical and are never wrapped in
/// storage; only display code normalizes them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseState {
    pub theta1: f64,
    pub theta2: f64,
    pub p1: f64,
    pub p2: f64,
}

impl PhaseState {
    pub fn new(theta1: f64, theta2: f64) -> Self {
        PhaseState { theta1, theta2, p1: 0.0, p2: 0.0 }
    }

    /// `self += rate * dt`, component-wise.
    pub fn advance(&mut self, rate: &PhaseState, dt: f64) {
        self.theta1 += dt * rate.theta1;
        self.theta2 += dt * rate.theta2;
        self.p1 += dt * rate.p1;
        self.p2 += dt * rate.p2;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimContext {
    pub dt: f64,
    pub t: f64,
}

/// A conservative system described by Hamilton's equations.
pub trait HamiltonianSystem {
    /// Time derivatives `(theta1_dot, theta2_dot, p1_dot, p2_dot)` at `state`.
    fn derivatives(&self, state: &PhaseState) -> PhaseState;

    /// Total energy at `state`.
    fn energy(&self, state: &PhaseState) -> f64;
}

pub trait Model {
    fn reset(&mut self);
}
