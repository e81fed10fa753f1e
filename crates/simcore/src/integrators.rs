use crate::{HamiltonianSystem, PhaseState, SimContext};

/// A generic integration strategy trait.
pub trait Integrator {
    /// Advances the state by one timestep.
    fn step<S: HamiltonianSystem>(&self, ctx: &SimContext, system: &S, state: &mut PhaseState);
}

/// Explicit (forward) Euler integrator.
/// First-order accurate and not symplectic: energy of a conservative system
/// drifts over long runs. Every derivative is taken at the start-of-step state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step<S: HamiltonianSystem>(&self, ctx: &SimContext, system: &S, state: &mut PhaseState) {
        let rate = system.derivatives(state);
        state.advance(&rate, ctx.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit-mass, unit-frequency harmonic oscillator in both coordinates.
    struct Oscillator;

    impl HamiltonianSystem for Oscillator {
        fn derivatives(&self, s: &PhaseState) -> PhaseState {
            PhaseState { theta1: s.p1, theta2: s.p2, p1: -s.theta1, p2: -s.theta2 }
        }

        fn energy(&self, s: &PhaseState) -> f64 {
            0.5 * (s.p1 * s.p1 + s.p2 * s.p2 + s.theta1 * s.theta1 + s.theta2 * s.theta2)
        }
    }

    #[test]
    fn test_explicit_euler_uses_start_of_step_rates() {
        let mut state = PhaseState { theta1: 1.0, theta2: 0.0, p1: 0.0, p2: 2.0 };
        let ctx = SimContext { dt: 0.1, t: 0.0 };

        ExplicitEuler.step(&ctx, &Oscillator, &mut state);

        // theta1 moves with the old p1 (zero), p1 with the old theta1
        assert!((state.theta1 - 1.0).abs() < 1e-12);
        assert!((state.p1 - (-0.1)).abs() < 1e-12);
        assert!((state.theta2 - 0.2).abs() < 1e-12);
        assert!((state.p2 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let start = PhaseState { theta1: 0.3, theta2: -1.2, p1: 4.0, p2: -0.5 };
        let mut state = start;
        ExplicitEuler.step(&SimContext { dt: 0.0, t: 0.0 }, &Oscillator, &mut state);
        assert_eq!(state, start);
    }

    #[test]
    fn test_explicit_euler_gains_energy_on_oscillator() {
        let mut state = PhaseState::new(1.0, 0.0);
        let e0 = Oscillator.energy(&state);
        let ctx = SimContext { dt: 0.01, t: 0.0 };
        for _ in 0..1000 {
            ExplicitEuler.step(&ctx, &Oscillator, &mut state);
        }
        // Forward Euler multiplies oscillator energy by (1 + dt^2) per step
        let expected = e0 * (1.0f64 + 1e-4).powi(1000);
        assert_relative_eq!(Oscillator.energy(&state), expected, max_relative = 1e-12);
    }
}
