use crate::Vec2;

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// The viewport grown by `margin` pixels on every side.
    pub fn bounds(&self, margin: f64) -> Bounds {
        Bounds {
            min: Vec2::new(-margin, -margin),
            max: Vec2::new(self.width + margin, self.height + margin),
        }
    }

    /// True when there is no area to draw or simulate in.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Maps a normalized `[0,1]` coordinate pair to pixels.
    pub fn denormalize(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(x * self.width, y * self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 1280.0, height: 800.0 }
    }
}

/// Axis-aligned rectangle, closed on all sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn contains(&self, p: &Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
