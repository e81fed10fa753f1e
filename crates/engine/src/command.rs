use serde::{Deserialize, Serialize};

/// Which link of a body an angle override targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleKind {
    Theta1,
    Theta2,
}

/// Operations the control surface can request between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append a body at the default angles with the next palette color
    AddBody,
    /// Remove the last body, keeping at least two
    DeleteBody,
    /// Replace every body with two fresh defaults
    Restart,
    /// Empty every trail, keeping angles and momenta
    Clear,
    SetAngle { body: usize, which: AngleKind, value: f64 },
}
