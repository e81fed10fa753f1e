use colorsys::{Hsl, Rgb};
use serde::{Deserialize, Serialize};

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Converts HSL (hue in degrees, saturation and lightness in percent).
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let rgb = Rgb::from(Hsl::new(hue.rem_euclid(360.0), saturation, lightness, None));
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(rgb.red()), channel(rgb.green()), channel(rgb.blue()))
    }

    /// Fully saturated, mid-lightness color on the hue wheel.
    pub fn from_hue(hue: f64) -> Self {
        Color::from_hsl(hue, 100.0, 50.0)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Base colors handed out to bodies in creation order.
pub const PALETTE: [Color; 6] = [
    Color::rgb(0x00, 0x00, 0xff), // blue
    Color::rgb(0xff, 0x00, 0x00), // red
    Color::rgb(0xff, 0xff, 0x00), // yellow
    Color::rgb(0xff, 0xa5, 0x00), // orange
    Color::rgb(0x80, 0x00, 0x80), // purple
    Color::rgb(0x00, 0x80, 0x00), // green
];

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
