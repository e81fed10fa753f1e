//! egui backend for the renderer's draw surface

use std::collections::VecDeque;

use egui::{Color32, Pos2, Shape, Stroke};
use render::{DrawSurface, BACKGROUND};
use simcore::{Color, Vec2};

/// Shapes kept while the canvas is not being cleared
pub const MAX_RETAINED_SHAPES: usize = 60_000;

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_pos(p: Vec2) -> Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

/// Retained shapes in viewport pixels. egui repaints from scratch every frame,
/// so skipping a clear means replaying everything drawn since the last one.
pub struct ShapeLayer {
    shapes: VecDeque<Shape>,
    background: Color32,
    cap: usize,
}

impl ShapeLayer {
    pub fn new(cap: usize) -> Self {
        ShapeLayer { shapes: VecDeque::new(), background: to_color32(BACKGROUND), cap }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn reset(&mut self) {
        self.shapes.clear();
    }

    /// Paints the background and every retained shape into `rect`.
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, self.background);
        let offset = rect.min.to_vec2();
        painter.extend(self.shapes.iter().map(|shape| {
            let mut shape = shape.clone();
            shape.translate(offset);
            shape
        }));
    }

    fn push(&mut self, shape: Shape) {
        self.shapes.push_back(shape);
        while self.shapes.len() > self.cap {
            self.shapes.pop_front();
        }
    }
}

impl DrawSurface for ShapeLayer {
    fn clear(&mut self, color: Color) {
        self.shapes.clear();
        self.background = to_color32(color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f64, color: Color) {
        let stroke = Stroke::new(width as f32, to_color32(color));
        self.push(Shape::line_segment([to_pos(from), to_pos(to)], stroke));
    }

    fn polyline(&mut self, points: &[Vec2], width: f64, color: Color) {
        let points = points.iter().copied().map(to_pos).collect();
        self.push(Shape::line(points, Stroke::new(width as f32, to_color32(color))));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.push(Shape::circle_filled(to_pos(center), radius as f32, to_color32(color)));
    }
}
