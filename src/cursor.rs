use raylib::prelude::*;

use crate::constants::*;
use crate::theme;

const DOT_RADIUS: f32 = 4.0;
const RING_RADIUS: f32 = 18.0;
const RING_HOVER_RADIUS: f32 = 30.0;

/// A dot that tracks the pointer and a ring that trails behind it.
#[derive(Debug, Clone)]
pub struct CustomCursor {
    dot: Vector2,
    ring: Vector2,
    ring_radius: f32,
    hovering: bool,
    visible: bool,
}

impl CustomCursor {
    pub fn new() -> Self {
        Self {
            dot: Vector2::new(0.0, 0.0),
            ring: Vector2::new(0.0, 0.0),
            ring_radius: RING_RADIUS,
            hovering: false,
            visible: false,
        }
    }

    pub fn dot(&self) -> Vector2 {
        self.dot
    }

    pub fn ring(&self) -> Vector2 {
        self.ring
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    pub fn update(&mut self, dt: f32, pointer: Vector2, hovering: bool) {
        if !self.visible {
            // Start the ring under the pointer rather than flying in from the corner.
            self.ring = pointer;
            self.visible = true;
        }
        self.dot = pointer;
        self.hovering = hovering;

        let follow = 1.0 - (-CURSOR_RING_LAG * dt).exp();
        self.ring = self.ring.lerp(pointer, follow);

        let target = if hovering { RING_HOVER_RADIUS } else { RING_RADIUS };
        self.ring_radius += (target - self.ring_radius) * follow;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }
        let ring_color = if self.hovering {
            theme::fade(theme::ACCENT, 0.8)
        } else {
            theme::fade(theme::ACCENT, 0.5)
        };
        d.draw_circle_lines(self.ring.x as i32, self.ring.y as i32, self.ring_radius, ring_color);
        d.draw_circle_v(self.dot, DOT_RADIUS, theme::ACCENT);
    }
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self::new()
    }
}
