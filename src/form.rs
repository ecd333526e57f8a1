use once_cell::sync::Lazy;
use raylib::prelude::*;
use regex::Regex;
use thiserror::Error;

use crate::input::{FrameInput, Key};
use crate::theme;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmailShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn slot(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn next(self) -> Field {
        Field::ALL[(self.slot() + 1) % Field::ALL.len()]
    }

    fn is_multiline(self) -> bool {
        self == Field::Message
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// What a frame of input asked the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
}

#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    values: [String; 4],
    focus: Option<Field>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.slot()] = value.into();
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn set_focus(&mut self, field: Option<Field>) {
        self.focus = field;
    }

    /// Checks presence of every field, then the email shape.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.values.iter().any(|v| v.is_empty()) {
            return Err(FormError::MissingField);
        }
        if !is_valid_email(self.value(Field::Email)) {
            return Err(FormError::InvalidEmailShape);
        }
        Ok(())
    }

    /// Validates and, on success, clears the form. Nothing is sent anywhere.
    pub fn submit(&mut self) -> Result<(), FormError> {
        self.validate()?;
        tracing::info!(subject = %self.value(Field::Subject), "contact form accepted");
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.focus = None;
    }

    /// Applies typed text and editing keys to the focused field.
    pub fn handle_keys(&mut self, input: &FrameInput) -> FormAction {
        let Some(field) = self.focus else {
            return FormAction::None;
        };

        let value = &mut self.values[field.slot()];
        for c in input.chars.iter().filter(|c| !c.is_control()) {
            value.push(*c);
        }

        let mut action = FormAction::None;
        for key in &input.keys {
            match key {
                Key::Backspace => {
                    self.values[field.slot()].pop();
                }
                Key::Tab => self.focus = Some(field.next()),
                Key::Escape => self.focus = None,
                Key::Enter if field.is_multiline() => self.values[field.slot()].push('\n'),
                Key::Enter => action = FormAction::Submit,
                _ => {}
            }
        }
        action
    }

    /// Moves focus to a clicked field, or reports a click on the submit button.
    pub fn handle_click(&mut self, layout: &FormLayout, point: Vector2) -> FormAction {
        if layout.submit.check_collision_point_rec(point) {
            return FormAction::Submit;
        }
        self.focus = Field::ALL
            .into_iter()
            .find(|field| layout.field(*field).check_collision_point_rec(point));
        FormAction::None
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &FormLayout, alpha: f32) {
        for field in Field::ALL {
            let rect = layout.field(field);
            d.draw_text(
                field.label(),
                rect.x as i32,
                (rect.y - 22.0) as i32,
                18,
                theme::fade(theme::MUTED, alpha),
            );
            d.draw_rectangle_rec(rect, theme::fade(theme::SURFACE, alpha));
            let border = if self.focus == Some(field) { theme::ACCENT } else { theme::MUTED };
            d.draw_rectangle_lines_ex(rect, 2.0, theme::fade(border, alpha));

            let text = if field.is_multiline() {
                self.value(field).to_string()
            } else {
                tail_that_fits(self.value(field), rect.width - 20.0, 20)
            };
            for (row, line) in text.lines().enumerate() {
                d.draw_text(
                    line,
                    rect.x as i32 + 10,
                    rect.y as i32 + 10 + row as i32 * 24,
                    20,
                    theme::fade(theme::TEXT, alpha),
                );
            }
        }

        d.draw_rectangle_rec(layout.submit, theme::fade(theme::ACCENT, alpha));
        let label = "Send Message";
        let w = measure_text(label, 20) as f32;
        d.draw_text(
            label,
            (layout.submit.x + (layout.submit.width - w) / 2.0) as i32,
            (layout.submit.y + 14.0) as i32,
            20,
            theme::fade(theme::BACKGROUND, alpha),
        );
    }
}

/// Screen placement of the form, computed from the section origin each frame.
#[derive(Debug, Clone, Copy)]
pub struct FormLayout {
    fields: [Rectangle; 4],
    pub submit: Rectangle,
}

impl FormLayout {
    pub fn new(origin: Vector2, width: f32) -> Self {
        let row = |y: f32, h: f32| Rectangle::new(origin.x, origin.y + y, width, h);
        Self {
            fields: [
                row(30.0, 44.0),
                row(110.0, 44.0),
                row(190.0, 44.0),
                row(270.0, 140.0),
            ],
            submit: Rectangle::new(origin.x, origin.y + 430.0, 200.0, 48.0),
        }
    }

    pub fn field(&self, field: Field) -> Rectangle {
        self.fields[field.slot()]
    }

    pub fn height(&self) -> f32 {
        self.submit.y + self.submit.height - self.fields[0].y + 30.0
    }
}

fn tail_that_fits(text: &str, max_width: f32, font_size: i32) -> String {
    let mut start = 0;
    while start < text.len() && measure_text(&text[start..], font_size) as f32 > max_width {
        start += text[start..].chars().next().map_or(1, char::len_utf8);
    }
    text[start..].to_string()
}
