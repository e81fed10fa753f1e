use std::ops::Range;

use simcore::{Color, Vec2};

/// Shortest run of visible points that is worth drawing.
pub const MIN_SEGMENT_POINTS: usize = 2;

/// A maximal run of consecutive visible trail points, drawn as one polyline.
///
/// `colors[i]` belongs to `points[i]`; the edge ending at point `i` is drawn in
/// `colors[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segment {
    pub points: Vec<Vec2>,
    pub colors: Vec<Color>,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges `(from, to, color)` in drawing order, colored by the later endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.points
            .windows(2)
            .zip(self.colors.iter().skip(1))
            .map(|(w, c)| (w[0], w[1], *c))
    }
}

/// Index ranges of the maximal `true` runs with at least
/// [`MIN_SEGMENT_POINTS`] entries.
pub fn visible_runs(visible: impl IntoIterator<Item = bool>) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    let mut len = 0;

    for (i, is_visible) in visible.into_iter().enumerate() {
        match (is_visible, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= MIN_SEGMENT_POINTS {
                    runs.push(s..i);
                }
                start = None;
            }
            _ => {}
        }
        len = i + 1;
    }
    if let Some(s) = start {
        if len - s >= MIN_SEGMENT_POINTS {
            runs.push(s..len);
        }
    }
    runs
}
