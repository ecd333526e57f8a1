use raylib::prelude::*;

/// Screen placement handed to a section for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SectionFrame {
    pub origin: Vector2,
    pub width: f32,
    /// Reveal opacity of the section content.
    pub alpha: f32,
}

/// Renders one section of the page.
pub trait Engine {
    fn height(&self) -> f32;
    fn draw(&self, d: &mut RaylibDrawHandle, frame: &SectionFrame);
}
