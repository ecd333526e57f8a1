use raylib::core::math;
use raylib::prelude::*;

use crate::constants::*;
use crate::theme;

const TOAST_TOP: f32 = 100.0;
const TOAST_MARGIN: f32 = 20.0;
const TOAST_MAX_WIDTH: f32 = 400.0;
const TOAST_HEIGHT: f32 = 56.0;
const FONT_SIZE: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn colors(self) -> (Color, Color) {
        match self {
            ToastKind::Success => (theme::TEXT, theme::BACKGROUND),
            ToastKind::Error => (theme::ERROR, theme::TEXT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    age: f32,
    leave_at: f32,
    leave_from: f32,
}

impl Toast {
    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            age: 0.0,
            leave_at: TOAST_LIFETIME,
            leave_from: 0.0,
        }
    }

    /// Horizontal offset from the resting position; `TOAST_OFFSCREEN` is fully hidden.
    pub fn offset(&self) -> f32 {
        if self.age >= self.leave_at {
            let t = ((self.age - self.leave_at) / TOAST_SLIDE_DURATION).min(1.0);
            return math::lerp(self.leave_from, TOAST_OFFSCREEN, ease_out(t));
        }
        if self.age < TOAST_ENTER_DELAY {
            return TOAST_OFFSCREEN;
        }
        let t = ((self.age - TOAST_ENTER_DELAY) / TOAST_SLIDE_DURATION).min(1.0);
        math::lerp(TOAST_OFFSCREEN, 0.0, ease_out(t))
    }

    pub fn is_leaving(&self) -> bool {
        self.age >= self.leave_at
    }

    pub fn is_finished(&self) -> bool {
        self.age >= self.leave_at + TOAST_SLIDE_DURATION
    }

    fn dismiss(&mut self) {
        if !self.is_leaving() {
            self.leave_from = self.offset();
            self.leave_at = self.age;
        }
    }

    fn width(&self) -> f32 {
        let text = measure_text(&self.message, FONT_SIZE) as f32;
        (text + 80.0).min(TOAST_MAX_WIDTH)
    }

    fn bounds(&self, screen_width: f32) -> Rectangle {
        let width = self.width();
        Rectangle::new(
            screen_width - TOAST_MARGIN - width + self.offset(),
            TOAST_TOP,
            width,
            TOAST_HEIGHT,
        )
    }

    fn close_button(&self, screen_width: f32) -> Rectangle {
        let bounds = self.bounds(screen_width);
        Rectangle::new(bounds.x + bounds.width - 40.0, bounds.y + 12.0, 32.0, 32.0)
    }
}

/// Holds at most one toast; a new one replaces whatever is showing.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Toast>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        match kind {
            ToastKind::Success => tracing::info!(%message, "notification"),
            ToastKind::Error => tracing::warn!(%message, "notification"),
        }
        self.current = Some(Toast::new(message, kind));
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Starts the slide-out early, as the close button does.
    pub fn dismiss(&mut self) {
        if let Some(toast) = self.current.as_mut() {
            toast.dismiss();
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(toast) = self.current.as_mut() {
            toast.age += dt;
            if toast.is_finished() {
                self.current = None;
            }
        }
    }

    /// Returns `true` if the click landed on the close button.
    pub fn handle_click(&mut self, point: Vector2, screen_width: f32) -> bool {
        let hit = self
            .current
            .as_ref()
            .is_some_and(|toast| toast.close_button(screen_width).check_collision_point_rec(point));
        if hit {
            self.dismiss();
        }
        hit
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32) {
        let Some(toast) = &self.current else {
            return;
        };
        let (background, foreground) = toast.kind.colors();
        let bounds = toast.bounds(screen_width);

        let shadow = Rectangle::new(bounds.x + 2.0, bounds.y + 4.0, bounds.width, bounds.height);
        d.draw_rectangle_rounded(shadow, 0.15, 6, Color::new(0, 0, 0, 76));
        d.draw_rectangle_rounded(bounds, 0.15, 6, background);
        d.draw_text(
            &toast.message,
            (bounds.x + 20.0) as i32,
            (bounds.y + (TOAST_HEIGHT - FONT_SIZE as f32) / 2.0) as i32,
            FONT_SIZE,
            foreground,
        );

        let close = toast.close_button(screen_width);
        d.draw_text("x", (close.x + 10.0) as i32, (close.y + 4.0) as i32, 24, foreground);
    }
}

fn ease_out(t: f32) -> f32 {
    ease::cubic_out(t, 0.0, 1.0, 1.0)
}
