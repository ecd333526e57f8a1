use raylib::prelude::*;

use crate::engine::{Engine, SectionFrame};
use crate::form::{ContactForm, FormLayout};
use crate::theme;
use crate::typing::TypingEffect;

const CARET_BLINK: f32 = 0.5;

/// Landing section: owner name and the typing tagline.
pub struct HeroSection {
    owner: String,
    pub typing: TypingEffect,
    height: f32,
    clock: f32,
}

impl HeroSection {
    pub fn new(owner: impl Into<String>, typing: TypingEffect, height: f32) -> Self {
        Self {
            owner: owner.into(),
            typing,
            height,
            clock: 0.0,
        }
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
        self.typing.update(dt);
    }

    fn caret_visible(&self) -> bool {
        (self.clock / CARET_BLINK) as u32 % 2 == 0
    }
}

impl Engine for HeroSection {
    fn height(&self) -> f32 {
        self.height
    }

    fn draw(&self, d: &mut RaylibDrawHandle, frame: &SectionFrame) {
        let x = frame.origin.x as i32;
        let y = frame.origin.y + self.height * 0.3;
        d.draw_text("Hi, my name is", x, y as i32, 24, theme::ACCENT);
        d.draw_text(&self.owner, x, (y + 40.0) as i32, 72, theme::TEXT);

        let tagline = self.typing.text();
        let tagline_y = (y + 130.0) as i32;
        d.draw_text(tagline, x, tagline_y, 40, theme::MUTED);
        if self.caret_visible() {
            let caret_x = x + measure_text(tagline, 40) + 4;
            d.draw_rectangle(caret_x, tagline_y, 3, 40, theme::ACCENT);
        }
    }
}

pub struct AboutSection {
    text: String,
}

impl AboutSection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Engine for AboutSection {
    fn height(&self) -> f32 {
        200.0 + self.text.lines().count() as f32 * 34.0
    }

    fn draw(&self, d: &mut RaylibDrawHandle, frame: &SectionFrame) {
        let x = frame.origin.x as i32;
        let y = frame.origin.y as i32;
        d.draw_text("About Me", x, y + 30, 40, theme::fade(theme::TEXT, frame.alpha));
        for (i, line) in self.text.lines().enumerate() {
            d.draw_text(
                line.trim(),
                x,
                y + 100 + i as i32 * 34,
                22,
                theme::fade(theme::MUTED, frame.alpha),
            );
        }
    }
}

/// Last section of the page; at least `min_height` tall so the page can
/// scroll it fully into view.
pub struct ContactSection {
    pub form: ContactForm,
    min_height: f32,
}

impl ContactSection {
    pub fn new(min_height: f32) -> Self {
        Self {
            form: ContactForm::new(),
            min_height,
        }
    }

    pub fn set_min_height(&mut self, min_height: f32) {
        self.min_height = min_height;
    }

    pub fn form_layout(&self, origin: Vector2, width: f32) -> FormLayout {
        FormLayout::new(Vector2::new(origin.x, origin.y + 110.0), width.min(640.0))
    }
}

impl Engine for ContactSection {
    fn height(&self) -> f32 {
        let content = self.form_layout(Vector2::new(0.0, 0.0), 640.0).height() + 180.0;
        content.max(self.min_height)
    }

    fn draw(&self, d: &mut RaylibDrawHandle, frame: &SectionFrame) {
        d.draw_text(
            "Get In Touch",
            frame.origin.x as i32,
            (frame.origin.y + 30.0) as i32,
            40,
            theme::fade(theme::TEXT, frame.alpha),
        );
        let layout = self.form_layout(frame.origin, frame.width);
        self.form.draw(d, &layout, frame.alpha);
    }
}
