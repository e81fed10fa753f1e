//! Trail management for pendulum tips
//!
//! This crate provides:
//! - Trail storage with an index-aligned color record
//! - Drift models (uniform, directional, vacuum)
//! - Visibility segmentation and off-screen pruning

pub mod drift;
pub mod manager;
pub mod segment;
pub mod trail;

pub use drift::Drift;
pub use manager::{record, refresh, TrailSettings, PRUNE_MARGIN, VISIBLE_MARGIN};
pub use segment::{visible_runs, Segment};
pub use trail::{next_cycle, Trail, TrailPoint, CYCLE_PERIOD};
