//! Simulation configuration
//!
//! Everything the core reads from the outside world each tick: integration
//! step, geometry of the pendulums, trail drift toggles and display toggles.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::{Vec2, Viewport};

/// Normalized pivot position; `(0,0)` is the top-left corner of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const CENTER: Origin = Origin { x: 0.5, y: 0.5 };
    pub const TOP_LEFT: Origin = Origin { x: 0.0, y: 0.0 };
}

impl Default for Origin {
    fn default() -> Self {
        Origin::CENTER
    }
}

pub const DT_RANGE: (f64, f64) = (0.0, 1.0);
pub const ARM_LENGTH_RANGE: (f64, f64) = (0.05, 0.3);
pub const BOB_RADIUS_RANGE: (f64, f64) = (0.0, 0.05);
pub const MASS_RANGE: (f64, f64) = (1e-6, 1e6);
pub const GRAVITY_RANGE: (f64, f64) = (0.0, 1e3);
pub const GRAVITY_STRENGTH_RANGE: (f64, f64) = (0.1, 3.0);
const UNIT_RANGE: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Integration step per tick
    pub dt: f64,
    /// Arm length as a fraction of viewport width
    pub arm_length_fraction: f64,
    /// Bob radius as a fraction of viewport width
    pub bob_radius_fraction: f64,
    pub mass: f64,
    /// Gravitational acceleration acting on the pendulum itself
    pub gravity: f64,
    /// Per-frame drift applied to trail points
    pub gravity_strength: f64,
    /// Freeze trail drift entirely
    pub vacuum: bool,
    /// Drift radially from the viewport center instead of straight down
    pub directional_gravity: bool,
    pub gravity_reversed: bool,
    /// Rotate trail hues every frame
    pub trail_color_cycling: bool,
    /// Skip clearing the canvas between frames
    pub persist_trails: bool,
    pub hide_arms: bool,
    pub paused: bool,
    pub origin: Origin,
    /// Hard cap on points per trail, oldest dropped first (0 = unlimited)
    pub max_trail_points: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            arm_length_fraction: 0.1,
            bob_radius_fraction: 0.0075,
            mass: 1.0,
            gravity: 9.81,
            gravity_strength: 1.0,
            vacuum: false,
            directional_gravity: false,
            gravity_reversed: false,
            trail_color_cycling: false,
            persist_trails: false,
            hide_arms: false,
            paused: false,
            origin: Origin::CENTER,
            max_trail_points: 20_000,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: SimulationConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_arm_length_fraction(mut self, fraction: f64) -> Self {
        self.arm_length_fraction = fraction;
        self
    }

    pub fn with_gravity_strength(mut self, strength: f64) -> Self {
        self.gravity_strength = strength;
        self
    }

    pub fn with_vacuum(mut self, vacuum: bool) -> Self {
        self.vacuum = vacuum;
        self
    }

    pub fn with_directional_gravity(mut self, directional: bool) -> Self {
        self.directional_gravity = directional;
        self
    }

    pub fn with_gravity_reversed(mut self, reversed: bool) -> Self {
        self.gravity_reversed = reversed;
        self
    }

    pub fn with_trail_color_cycling(mut self, cycling: bool) -> Self {
        self.trail_color_cycling = cycling;
        self
    }

    pub fn with_hide_arms(mut self, hide: bool) -> Self {
        self.hide_arms = hide;
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Origin { x, y };
        self
    }

    pub fn with_max_trail_points(mut self, max: usize) -> Self {
        self.max_trail_points = max;
        self
    }

    /// Arm length in pixels.
    pub fn arm_length(&self, viewport: &Viewport) -> f64 {
        self.arm_length_fraction * viewport.width
    }

    /// Bob radius in pixels.
    pub fn bob_radius(&self, viewport: &Viewport) -> f64 {
        self.bob_radius_fraction * viewport.width
    }

    /// Pivot position in pixels.
    pub fn origin_px(&self, viewport: &Viewport) -> Vec2 {
        viewport.denormalize(self.origin.x, self.origin.y)
    }

    fn ranges(&self) -> [(&'static str, f64, (f64, f64)); 8] {
        [
            ("dt", self.dt, DT_RANGE),
            ("arm_length_fraction", self.arm_length_fraction, ARM_LENGTH_RANGE),
            ("bob_radius_fraction", self.bob_radius_fraction, BOB_RADIUS_RANGE),
            ("mass", self.mass, MASS_RANGE),
            ("gravity", self.gravity, GRAVITY_RANGE),
            ("gravity_strength", self.gravity_strength, GRAVITY_STRENGTH_RANGE),
            ("origin.x", self.origin.x, UNIT_RANGE),
            ("origin.y", self.origin.y, UNIT_RANGE),
        ]
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value, (min, max)) in self.ranges() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < min || value > max {
                return Err(ConfigError::OutOfRange { field, value, min, max });
            }
        }
        Ok(())
    }

    /// A copy with every numeric field forced into range. Non-finite values
    /// fall back to the default.
    pub fn clamped(&self) -> Self {
        let d = SimulationConfig::default();
        Self {
            dt: clamp_field("dt", self.dt, d.dt, DT_RANGE),
            arm_length_fraction: clamp_field(
                "arm_length_fraction",
                self.arm_length_fraction,
                d.arm_length_fraction,
                ARM_LENGTH_RANGE,
            ),
            bob_radius_fraction: clamp_field(
                "bob_radius_fraction",
                self.bob_radius_fraction,
                d.bob_radius_fraction,
                BOB_RADIUS_RANGE,
            ),
            mass: clamp_field("mass", self.mass, d.mass, MASS_RANGE),
            gravity: clamp_field("gravity", self.gravity, d.gravity, GRAVITY_RANGE),
            gravity_strength: clamp_field(
                "gravity_strength",
                self.gravity_strength,
                d.gravity_strength,
                GRAVITY_STRENGTH_RANGE,
            ),
            origin: Origin {
                x: clamp_field("origin.x", self.origin.x, d.origin.x, UNIT_RANGE),
                y: clamp_field("origin.y", self.origin.y, d.origin.y, UNIT_RANGE),
            },
            ..self.clone()
        }
    }
}

fn clamp_field(field: &str, value: f64, fallback: f64, (min, max): (f64, f64)) -> f64 {
    let fixed = if value.is_finite() { value.clamp(min, max) } else { fallback };
    if fixed != value {
        warn!("config {field} = {value} adjusted to {fixed}");
    }
    fixed
}
