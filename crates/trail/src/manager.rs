//! Per-frame trail pipeline: drift, recolor, segment, prune.
//!
//! The order matters. Visibility and pruning both test the position after
//! this frame's drift.

use log::trace;
use simcore::{Bounds, Color, SimulationConfig, Vec2, Viewport};

use crate::drift::Drift;
use crate::segment::Segment;
use crate::trail::{next_cycle, Trail, TrailPoint};

/// Points this far outside the viewport are still drawn.
pub const VISIBLE_MARGIN: f64 = 100.0;
/// Points further than this outside the viewport are discarded.
pub const PRUNE_MARGIN: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSettings {
    pub drift: Drift,
    pub color_cycling: bool,
    pub visible: Bounds,
    pub keep: Bounds,
    pub max_points: usize,
}

impl TrailSettings {
    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        TrailSettings {
            drift: Drift::from_config(config, viewport),
            color_cycling: config.trail_color_cycling,
            visible: viewport.bounds(VISIBLE_MARGIN),
            keep: viewport.bounds(PRUNE_MARGIN),
            max_points: config.max_trail_points,
        }
    }
}

/// Records a new tip position stamped with `cycle` and returns the advanced cycle.
pub fn record(
    trail: &mut Trail,
    tip: Vec2,
    cycle: u16,
    base: Color,
    settings: &TrailSettings,
) -> u16 {
    trail.push(TrailPoint::new(tip, cycle), base);
    trail.enforce_cap(settings.max_points);
    next_cycle(cycle)
}

/// Runs one frame of the trail pipeline and returns the drawable segments.
pub fn refresh(
    trail: &mut Trail,
    cycle: u16,
    base: Color,
    settings: &TrailSettings,
) -> Vec<Segment> {
    trail.apply_drift(&settings.drift);
    trail.recolor(cycle, settings.color_cycling, base);
    let segments = trail.segments(&settings.visible);
    let pruned = trail.prune(&settings.keep);
    if pruned > 0 {
        trace!("pruned {pruned} trail points, {} remain", trail.len());
    }
    segments
}
