use simcore::{Color, Vec2};

/// A 2D target the renderer paints onto. Coordinates are viewport pixels.
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f64, color: Color);
    /// Connected line strip in a single color.
    fn polyline(&mut self, points: &[Vec2], width: f64, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { from: Vec2, to: Vec2, width: f64, color: Color },
    Polyline { points: Vec<Vec2>, width: f64, color: Color },
    Circle { center: Vec2, radius: f64, color: Color },
}

/// Records draw calls so a frame can be inspected or replayed onto a real surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replay(&self, surface: &mut impl DrawSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => surface.clear(*color),
                DrawCommand::Line { from, to, width, color } => {
                    surface.line(*from, *to, *width, *color)
                }
                DrawCommand::Polyline { points, width, color } => {
                    surface.polyline(points, *width, *color)
                }
                DrawCommand::Circle { center, radius, color } => {
                    surface.fill_circle(*center, *radius, *color)
                }
            }
        }
    }

    /// True when the frame starts by wiping the canvas.
    pub fn clears(&self) -> bool {
        matches!(self.commands.first(), Some(DrawCommand::Clear(_)))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn polyline(&mut self, points: &[Vec2], width: f64, color: Color) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), width, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}
