//! Renderer - paints trails, arms and bobs for one body at a time

use mechanics::Joints;
use simcore::{Color, SimulationConfig, Viewport};
use trail::Segment;

use crate::surface::DrawSurface;

pub const TRAIL_WIDTH: f64 = 2.0;
pub const ARM_WIDTH: f64 = 3.0;
pub const BACKGROUND: Color = Color::BLACK;

/// Display options shared by every body in a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub bob_radius: f64,
    pub hide_arms: bool,
    /// Leave the previous frame's pixels in place
    pub persist: bool,
}

impl RenderStyle {
    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        RenderStyle {
            bob_radius: if config.hide_arms { 0.0 } else { config.bob_radius(viewport) },
            hide_arms: config.hide_arms,
            persist: config.persist_trails,
        }
    }
}

/// What the renderer needs to know about one body this frame.
#[derive(Debug, Clone, Copy)]
pub struct BodyView<'a> {
    pub joints: Joints,
    pub color: Color,
    pub segments: &'a [Segment],
}

pub fn begin_frame(surface: &mut impl DrawSurface, style: &RenderStyle) {
    if !style.persist {
        surface.clear(BACKGROUND);
    }
}

pub fn render_body(surface: &mut impl DrawSurface, body: &BodyView<'_>, style: &RenderStyle) {
    for segment in body.segments {
        for (from, to, color) in segment.edges() {
            surface.line(from, to, TRAIL_WIDTH, color);
        }
    }

    if style.hide_arms {
        return;
    }

    let j = &body.joints;
    surface.polyline(&[j.origin, j.elbow, j.tip], ARM_WIDTH, body.color);
    if style.bob_radius > 0.0 {
        surface.fill_circle(j.elbow, style.bob_radius, body.color);
        surface.fill_circle(j.tip, style.bob_radius, body.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CommandList, DrawCommand};
    use simcore::Vec2;

    fn joints() -> Joints {
        Joints {
            origin: Vec2::new(400.0, 300.0),
            elbow: Vec2::new(400.0, 380.0),
            tip: Vec2::new(400.0, 460.0),
        }
    }

    fn style(hide_arms: bool, persist: bool) -> RenderStyle {
        let config = SimulationConfig { hide_arms, persist_trails: persist, ..Default::default() };
        RenderStyle::from_config(&config, &Viewport::new(800.0, 600.0))
    }

    #[test]
    fn test_clear_unless_persisting() {
        let mut frame = CommandList::new();
        begin_frame(&mut frame, &style(false, false));
        assert_eq!(frame.commands, vec![DrawCommand::Clear(Color::BLACK)]);

        let mut frame = CommandList::new();
        begin_frame(&mut frame, &style(false, true));
        assert!(frame.is_empty());
    }

    #[test]
    fn test_trail_edges_use_later_endpoint_color() {
        let a = Color::rgb(1, 1, 1);
        let b = Color::rgb(2, 2, 2);
        let c = Color::rgb(3, 3, 3);
        let segments = vec![Segment {
            points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
            colors: vec![a, b, c],
        }];
        let body = BodyView { joints: joints(), color: Color::WHITE, segments: &segments };

        let mut frame = CommandList::new();
        render_body(&mut frame, &body, &style(true, false));

        assert_eq!(
            frame.commands,
            vec![
                DrawCommand::Line {
                    from: Vec2::new(0.0, 0.0),
                    to: Vec2::new(1.0, 0.0),
                    width: TRAIL_WIDTH,
                    color: b,
                },
                DrawCommand::Line {
                    from: Vec2::new(1.0, 0.0),
                    to: Vec2::new(2.0, 0.0),
                    width: TRAIL_WIDTH,
                    color: c,
                },
            ]
        );
    }

    #[test]
    fn test_arms_and_bobs() {
        let color = Color::rgb(0, 0, 255);
        let body = BodyView { joints: joints(), color, segments: &[] };
        let mut frame = CommandList::new();
        render_body(&mut frame, &body, &style(false, false));

        assert_eq!(frame.len(), 3);
        assert_eq!(
            frame.commands[0],
            DrawCommand::Polyline {
                points: vec![joints().origin, joints().elbow, joints().tip],
                width: ARM_WIDTH,
                color,
            }
        );
        // 0.0075 * 800
        let bob = DrawCommand::Circle { center: joints().tip, radius: 6.0, color };
        assert_eq!(frame.commands[2], bob);
    }

    #[test]
    fn test_hidden_arms_draw_nothing_but_trail() {
        let body = BodyView { joints: joints(), color: Color::WHITE, segments: &[] };
        let mut frame = CommandList::new();
        render_body(&mut frame, &body, &style(true, false));
        assert!(frame.is_empty());
    }
}
