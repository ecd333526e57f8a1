use raylib::prelude::*;

use crate::carousel::controller::SlideshowController;
use crate::carousel::slide::Slide;
use crate::engine::{Engine, SectionFrame};
use crate::error::Result;
use crate::input::Key;
use crate::state::SlideRole;
use crate::theme;
use crate::timer::Interval;

const SECTION_HEIGHT: f32 = 640.0;
const STAGE_TOP: f32 = 110.0;
const STAGE_HEIGHT: f32 = 400.0;
const BUTTON_SIZE: f32 = 48.0;
const INDICATOR_SIZE: f32 = 12.0;
const INDICATOR_GAP: f32 = 16.0;

/// Screen rectangles of the carousel controls for one frame.
#[derive(Debug, Clone)]
pub struct CarouselLayout {
    pub stage: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Rectangle>,
}

impl CarouselLayout {
    pub fn new(origin: Vector2, width: f32, count: usize) -> Self {
        let stage = Rectangle::new(origin.x, origin.y + STAGE_TOP, width, STAGE_HEIGHT);
        let button_y = stage.y + (stage.height - BUTTON_SIZE) / 2.0;

        let row_width = count as f32 * INDICATOR_SIZE + count.saturating_sub(1) as f32 * INDICATOR_GAP;
        let row_x = origin.x + (width - row_width) / 2.0;
        let row_y = stage.y + stage.height + 30.0;
        let indicators = (0..count)
            .map(|i| {
                Rectangle::new(
                    row_x + i as f32 * (INDICATOR_SIZE + INDICATOR_GAP),
                    row_y,
                    INDICATOR_SIZE,
                    INDICATOR_SIZE,
                )
            })
            .collect();

        Self {
            stage,
            prev: Rectangle::new(stage.x + 10.0, button_y, BUTTON_SIZE, BUTTON_SIZE),
            next: Rectangle::new(
                stage.x + stage.width - 10.0 - BUTTON_SIZE,
                button_y,
                BUTTON_SIZE,
                BUTTON_SIZE,
            ),
            indicators,
        }
    }

    /// Whether `point` is over any control.
    pub fn is_interactive(&self, point: Vector2) -> bool {
        self.prev.check_collision_point_rec(point)
            || self.next.check_collision_point_rec(point)
            || self.indicators.iter().any(|rect| rect.check_collision_point_rec(point))
    }
}

/// The projects carousel: slides, the index controller and the autoplay timer.
pub struct CarouselEngine {
    controller: SlideshowController,
    slides: Vec<Slide>,
    autoplay: Option<Interval>,
}

impl CarouselEngine {
    pub fn new(mut slides: Vec<Slide>, autoplay_period: Option<f32>) -> Result<Self> {
        let controller = SlideshowController::new(slides.len())?;
        for (i, slide) in slides.iter_mut().enumerate() {
            slide.snap_to(controller.role_of(i));
        }
        tracing::info!(slides = slides.len(), autoplay = ?autoplay_period, "carousel ready");
        Ok(Self {
            controller,
            slides,
            autoplay: autoplay_period.map(Interval::new),
        })
    }

    pub fn controller(&self) -> &SlideshowController {
        &self.controller
    }

    pub fn roles(&self) -> Vec<SlideRole> {
        self.slides.iter().map(Slide::role).collect()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.as_ref().is_some_and(|timer| !timer.is_cancelled())
    }

    pub fn advance(&mut self) {
        self.controller.advance();
        self.after_manual_change();
    }

    pub fn retreat(&mut self) {
        self.controller.retreat();
        self.after_manual_change();
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.controller.jump_to(index)?;
        self.after_manual_change();
        Ok(())
    }

    fn after_manual_change(&mut self) {
        if let Some(timer) = self.autoplay.as_mut() {
            timer.restart();
        }
        self.render();
    }

    /// Pushes the controller's roles onto the slides.
    fn render(&mut self) {
        tracing::debug!(index = self.controller.current_index(), "slide changed");
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_role(self.controller.role_of(i));
        }
    }

    pub fn update(&mut self, dt: f32) {
        let fired = self.autoplay.as_mut().map_or(0, |timer| timer.tick(dt));
        for _ in 0..fired {
            self.controller.advance();
        }
        if fired > 0 {
            self.render();
        }
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn layout(&self, origin: Vector2, width: f32) -> CarouselLayout {
        CarouselLayout::new(origin, width, self.slides.len())
    }

    /// Routes a click to the prev/next buttons or an indicator.
    /// Returns `true` if the click hit a control.
    pub fn handle_click(&mut self, layout: &CarouselLayout, point: Vector2) -> bool {
        if layout.prev.check_collision_point_rec(point) {
            self.retreat();
            return true;
        }
        if layout.next.check_collision_point_rec(point) {
            self.advance();
            return true;
        }
        match layout.indicators.iter().position(|rect| rect.check_collision_point_rec(point)) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Left => self.retreat(),
            Key::Right => self.advance(),
            _ => {}
        }
    }

    /// Stops autoplay for good.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.autoplay.as_mut() {
            timer.cancel();
            tracing::debug!("carousel autoplay cancelled");
        }
    }
}

impl Engine for CarouselEngine {
    fn height(&self) -> f32 {
        SECTION_HEIGHT
    }

    fn draw(&self, d: &mut RaylibDrawHandle, frame: &SectionFrame) {
        let alpha = frame.alpha;
        d.draw_text(
            "Projects",
            frame.origin.x as i32,
            (frame.origin.y + 30.0) as i32,
            40,
            theme::fade(theme::TEXT, alpha),
        );

        let layout = self.layout(frame.origin, frame.width);

        let mut order: Vec<&Slide> = self.slides.iter().collect();
        order.sort_by_key(|slide| slide.role().z_order());
        for slide in order {
            slide.draw(d, layout.stage, alpha);
        }

        for (rect, label) in [(layout.prev, "<"), (layout.next, ">")] {
            let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            d.draw_circle_v(center, rect.width / 2.0, theme::fade(theme::BACKGROUND, alpha * 0.8));
            d.draw_circle_lines(center.x as i32, center.y as i32, rect.width / 2.0, theme::fade(theme::ACCENT, alpha));
            d.draw_text(label, (center.x - 7.0) as i32, (center.y - 12.0) as i32, 24, theme::fade(theme::ACCENT, alpha));
        }

        for (i, rect) in layout.indicators.iter().enumerate() {
            let center = Vector2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            let color = if self.controller.is_indicator_active(i) {
                theme::ACCENT
            } else {
                theme::MUTED
            };
            d.draw_circle_v(center, rect.width / 2.0, theme::fade(color, alpha));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SlideRole::*;

    fn engine(n: usize, autoplay: Option<f32>) -> CarouselEngine {
        let slides = (0..n).map(|i| Slide::card(format!("p{i}"), "")).collect();
        CarouselEngine::new(slides, autoplay).unwrap()
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert!(CarouselEngine::new(Vec::new(), None).is_err());
    }

    #[test]
    fn slides_start_in_their_roles() {
        let carousel = engine(5, None);
        assert_eq!(carousel.roles(), vec![Center, Right, Hidden, Hidden, Left]);
    }

    #[test]
    fn autoplay_advances_every_period() {
        let mut carousel = engine(5, Some(5.0));
        carousel.update(4.9);
        assert_eq!(carousel.controller().current_index(), 0);
        carousel.update(0.2);
        assert_eq!(carousel.controller().current_index(), 1);
        assert_eq!(carousel.roles(), vec![Left, Center, Right, Hidden, Hidden]);
    }

    #[test]
    fn manual_navigation_restarts_autoplay() {
        let mut carousel = engine(5, Some(5.0));
        carousel.update(4.0);
        carousel.advance();
        carousel.update(4.0);
        assert_eq!(carousel.controller().current_index(), 1);
        carousel.update(1.5);
        assert_eq!(carousel.controller().current_index(), 2);
    }

    #[test]
    fn shutdown_stops_autoplay() {
        let mut carousel = engine(3, Some(1.0));
        carousel.shutdown();
        assert!(!carousel.is_autoplaying());
        carousel.update(10.0);
        assert_eq!(carousel.controller().current_index(), 0);
    }

    #[test]
    fn clicks_drive_the_controller() {
        let mut carousel = engine(4, None);
        let layout = carousel.layout(Vector2::new(0.0, 0.0), 1000.0);
        let at = |r: Rectangle| Vector2::new(r.x + 1.0, r.y + 1.0);

        assert!(carousel.handle_click(&layout, at(layout.prev)));
        assert_eq!(carousel.controller().current_index(), 3);

        assert!(carousel.handle_click(&layout, at(layout.next)));
        assert_eq!(carousel.controller().current_index(), 0);

        assert!(carousel.handle_click(&layout, at(layout.indicators[2])));
        assert_eq!(carousel.controller().current_index(), 2);
        assert!(carousel.controller().is_indicator_active(2));

        assert!(!carousel.handle_click(&layout, Vector2::new(500.0, 5.0)));
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut carousel = engine(3, None);
        carousel.handle_key(Key::Left);
        assert_eq!(carousel.controller().current_index(), 2);
        carousel.handle_key(Key::Right);
        carousel.handle_key(Key::Right);
        assert_eq!(carousel.controller().current_index(), 1);
    }
}
