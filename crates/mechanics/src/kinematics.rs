use simcore::{PhaseState, Vec2};

/// Screen positions of the two joints of a double pendulum hanging from `origin`.
///
/// Screen y grows downward, so `theta = 0` points straight down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joints {
    pub origin: Vec2,
    pub elbow: Vec2,
    pub tip: Vec2,
}

pub fn joints(state: &PhaseState, origin: Vec2, length: f64) -> Joints {
    let elbow = origin + length * Vec2::new(state.theta1.sin(), state.theta1.cos());
    let tip = elbow + length * Vec2::new(state.theta2.sin(), state.theta2.cos());
    Joints { origin, elbow, tip }
}

/// Position of the second bob, the point the trail follows.
pub fn tip_position(state: &PhaseState, origin: Vec2, length: f64) -> Vec2 {
    joints(state, origin, length).tip
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_hanging_down() {
        let j = joints(&PhaseState::new(0.0, 0.0), Vec2::new(100.0, 50.0), 10.0);
        assert!((j.elbow - Vec2::new(100.0, 60.0)).norm() < 1e-12);
        assert!((j.tip - Vec2::new(100.0, 70.0)).norm() < 1e-12);
    }

    #[test]
    fn test_tip_matches_closed_form() {
        let state = PhaseState::new(PI / 3.0, -PI / 4.0);
        let origin = Vec2::new(640.0, 400.0);
        let l = 128.0;
        let expected = Vec2::new(
            origin.x + l * (state.theta1.sin() + state.theta2.sin()),
            origin.y + l * (state.theta1.cos() + state.theta2.cos()),
        );
        assert!((tip_position(&state, origin, l) - expected).norm() < 1e-9);
    }
}
