pub mod double_pendulum;
pub mod kinematics;

pub use double_pendulum::{
    denominator, integrate_step, DoublePendulum, PendulumConstants, PendulumParams,
};
pub use kinematics::{joints, tip_position, Joints};
