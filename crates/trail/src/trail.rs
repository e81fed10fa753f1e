//! Trail - recorded tip positions of one pendulum
//!
//! Points are appended at the tip and removed individually once they drift
//! far enough off screen. A parallel color record is kept index-aligned with
//! the points at all times.

use log::trace;
use simcore::{Bounds, Color, Vec2};

use crate::drift::Drift;
use crate::segment::{visible_runs, Segment};

/// Number of distinct hue steps; the body's cycle counter wraps at this value.
pub const CYCLE_PERIOD: u16 = 360;

/// Advances a cycle counter by one step, wrapping at [`CYCLE_PERIOD`].
pub fn next_cycle(cycle: u16) -> u16 {
    (cycle + 1) % CYCLE_PERIOD
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Tip position when recorded
    pub position: Vec2,
    /// Accumulated drift since recording
    pub offset: Vec2,
    /// Body cycle index at the time of recording
    pub cycle: u16,
}

impl TrailPoint {
    pub fn new(position: Vec2, cycle: u16) -> Self {
        TrailPoint { position, offset: Vec2::zeros(), cycle }
    }

    /// Where the point is drawn this frame.
    pub fn drifted(&self) -> Vec2 {
        self.position + self.offset
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<TrailPoint>,
    colors: Vec<Color>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }

    pub fn push(&mut self, point: TrailPoint, color: Color) {
        self.points.push(point);
        self.colors.push(color);
    }

    /// Drops the oldest points until at most `max` remain. `max == 0` means unbounded.
    pub fn enforce_cap(&mut self, max: usize) -> usize {
        if max == 0 || self.points.len() <= max {
            return 0;
        }
        let excess = self.points.len() - max;
        self.points.drain(..excess);
        self.colors.drain(..excess);
        trace!("trail cap {max} dropped {excess} oldest points");
        excess
    }

    /// Adds one frame of drift to every point's offset. Each point's
    /// displacement is computed from its already-drifted position.
    pub fn apply_drift(&mut self, drift: &Drift) {
        if drift.is_frozen() {
            return;
        }
        for point in &mut self.points {
            point.offset += drift.displacement(&point.drifted());
        }
    }

    /// Rewrites every display color: a hue ramp starting at `cycle` when
    /// cycling, otherwise the body's base color.
    pub fn recolor(&mut self, cycle: u16, cycling: bool, base: Color) {
        for (index, color) in self.colors.iter_mut().enumerate() {
            *color = if cycling {
                let hue = (cycle as usize + index) % CYCLE_PERIOD as usize;
                Color::from_hue(hue as f64)
            } else {
                base
            };
        }
    }

    /// Runs of points whose drifted position lies inside `visible`.
    pub fn segments(&self, visible: &Bounds) -> Vec<Segment> {
        visible_runs(self.points.iter().map(|p| visible.contains(&p.drifted())))
            .into_iter()
            .map(|run| Segment {
                points: self.points[run.clone()].iter().map(TrailPoint::drifted).collect(),
                colors: self.colors[run].to_vec(),
            })
            .collect()
    }

    /// Permanently removes points whose drifted position left `keep`, along
    /// with their colors. Returns the number removed.
    pub fn prune(&mut self, keep: &Bounds) -> usize {
        let before = self.points.len();
        let mut colors = std::mem::take(&mut self.colors).into_iter();
        let mut kept_colors = Vec::with_capacity(before);
        self.points.retain(|p| {
            let color = colors.next();
            let inside = keep.contains(&p.drifted());
            if inside {
                kept_colors.extend(color);
            }
            inside
        });
        self.colors = kept_colors;
        before - self.points.len()
    }
}
