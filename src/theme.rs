use raylib::prelude::*;

pub const BACKGROUND: Color = Color::new(0x0a, 0x16, 0x28, 0xff);
pub const SURFACE: Color = Color::new(0x13, 0x24, 0x3d, 0xff);
pub const TEXT: Color = Color::new(0xff, 0xff, 0xff, 0xff);
pub const MUTED: Color = Color::new(0x8a, 0x9b, 0xb4, 0xff);
pub const ACCENT: Color = Color::new(0x64, 0xff, 0xda, 0xff);
pub const ERROR: Color = Color::new(0xef, 0x44, 0x44, 0xff);

/// `color` with its alpha scaled by `alpha` in `[0, 1]`.
pub fn fade(color: Color, alpha: f32) -> Color {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}
