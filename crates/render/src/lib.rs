pub mod renderer;
pub mod surface;

pub use renderer::{
    begin_frame, render_body, BodyView, RenderStyle, ARM_WIDTH, BACKGROUND, TRAIL_WIDTH,
};
pub use surface::{CommandList, DrawCommand, DrawSurface};
