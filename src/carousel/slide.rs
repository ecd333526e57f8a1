use raylib::prelude::*;

use crate::constants::*;
use crate::state::SlideRole;
use crate::theme;

/// Where a slide sits on the carousel stage.
///
/// `offset` is a fraction of the stage width from its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Placement {
    pub fn for_role(role: SlideRole) -> Self {
        match role {
            SlideRole::Center => Placement { offset: 0.0, scale: 1.0, opacity: 1.0 },
            SlideRole::Left => Placement { offset: -0.32, scale: 0.7, opacity: 0.5 },
            SlideRole::Right => Placement { offset: 0.32, scale: 0.7, opacity: 0.5 },
            SlideRole::Hidden => Placement { offset: 0.0, scale: 0.5, opacity: 0.0 },
        }
    }

    fn lerp(self, to: Placement, t: f32) -> Placement {
        Placement {
            offset: raylib::core::math::lerp(self.offset, to.offset, t),
            scale: raylib::core::math::lerp(self.scale, to.scale, t),
            opacity: raylib::core::math::lerp(self.opacity, to.opacity, t),
        }
    }
}

pub enum SlideContent {
    Image(Texture2D),
    Card { title: String, description: String },
}

pub struct Slide {
    content: SlideContent,
    role: SlideRole,

    placement: Placement,
    start: Placement,
    end: Placement,

    animation_timer: f32,
    pub is_animating: bool,
}

impl Slide {
    pub fn new(content: SlideContent) -> Self {
        let placement = Placement::for_role(SlideRole::Hidden);
        Self {
            content,
            role: SlideRole::Hidden,
            placement,
            start: placement,
            end: placement,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn card(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(SlideContent::Card {
            title: title.into(),
            description: description.into(),
        })
    }

    pub fn role(&self) -> SlideRole {
        self.role
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Starts easing towards the placement of `role`; a no-op if the role is unchanged.
    pub fn set_role(&mut self, role: SlideRole) {
        if role == self.role {
            return;
        }
        self.role = role;
        self.start = self.placement;
        self.end = Placement::for_role(role);
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    /// Jumps straight to the placement of `role`.
    pub fn snap_to(&mut self, role: SlideRole) {
        self.role = role;
        self.placement = Placement::for_role(role);
        self.start = self.placement;
        self.end = self.placement;
        self.is_animating = false;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / SLIDE_ANIMATION_DURATION).min(1.0);
        let t = ease::cubic_out(t, 0.0, 1.0, 1.0);

        self.placement = self.start.lerp(self.end, t);

        if self.animation_timer >= SLIDE_ANIMATION_DURATION {
            self.is_animating = false;
            self.placement = self.end;
        }
    }

    /// Draws the slide inside `stage`, the carousel area on screen.
    pub fn draw(&self, d: &mut RaylibDrawHandle, stage: Rectangle, alpha: f32) {
        let opacity = self.placement.opacity * alpha;
        if opacity <= 0.01 {
            return;
        }

        let card_height = stage.height * self.placement.scale;
        let card_width = (card_height * 1.6).min(stage.width * 0.6 * self.placement.scale);
        let center_x = stage.x + stage.width * (0.5 + self.placement.offset);
        let center_y = stage.y + stage.height * 0.5;
        let card = Rectangle::new(
            center_x - card_width * 0.5,
            center_y - card_height * 0.5,
            card_width,
            card_height,
        );

        match &self.content {
            SlideContent::Image(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                // Fit inside the card, keeping the aspect ratio
                let scale = (card.width / tex_width).min(card.height / tex_height);
                let (w, h) = (tex_width * scale, tex_height * scale);
                d.draw_rectangle_rec(card, theme::fade(theme::SURFACE, opacity));
                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center_x - w * 0.5, center_y - h * 0.5, w, h),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    theme::fade(Color::WHITE, opacity),
                );
            }
            SlideContent::Card { title, description } => {
                d.draw_rectangle_rounded(card, 0.05, 8, theme::fade(theme::SURFACE, opacity));
                d.draw_rectangle_lines_ex(card, 2.0, theme::fade(theme::ACCENT, opacity));
                let title_size = (36.0 * self.placement.scale) as i32;
                let body_size = (20.0 * self.placement.scale) as i32;
                d.draw_text(
                    title,
                    (card.x + 30.0 * self.placement.scale) as i32,
                    (card.y + 30.0 * self.placement.scale) as i32,
                    title_size,
                    theme::fade(theme::ACCENT, opacity),
                );
                d.draw_text(
                    description,
                    (card.x + 30.0 * self.placement.scale) as i32,
                    (card.y + 90.0 * self.placement.scale) as i32,
                    body_size,
                    theme::fade(theme::TEXT, opacity),
                );
            }
        }
    }
}
