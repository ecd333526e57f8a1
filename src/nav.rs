use raylib::prelude::*;

use crate::constants::*;
use crate::theme;

const TAB_FONT_SIZE: i32 = 20;
const TAB_GAP: f32 = 36.0;
const HAMBURGER_SIZE: f32 = 36.0;

/// A page section as laid out on the page, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    fn band_contains(&self, scroll_y: f32) -> bool {
        let band_top = self.top - NAV_OFFSET;
        scroll_y >= band_top && scroll_y < band_top + self.height
    }
}

/// The one section whose activation band contains `scroll_y`.
///
/// Bands may overlap by the nav offset; the later section in page order is
/// chosen.
pub fn active_section(sections: &[Section], scroll_y: f32) -> Option<usize> {
    sections.iter().rposition(|section| section.band_contains(scroll_y))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    ToggledMenu,
    Tab(usize),
}

#[derive(Debug, Clone)]
pub struct NavBar {
    brand: String,
    sections: Vec<Section>,
    active: Option<usize>,
    menu_open: bool,
}

impl NavBar {
    pub fn new(brand: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            brand: brand.into(),
            sections,
            active: None,
            menu_open: false,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Replaces the section layout, e.g. after a resize. The active tab is
    /// recomputed on the next scroll event.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        let active = active_section(&self.sections, scroll_y);
        if active != self.active {
            tracing::debug!(
                section = active.map(|i| self.sections[i].id.as_str()),
                scroll_y,
                "active section changed"
            );
        }
        self.active = active;
    }

    /// Activates the tab right away and returns the scroll target of its section.
    pub fn on_tab_click(&mut self, index: usize) -> Option<f32> {
        let section = self.sections.get(index)?;
        self.active = Some(index);
        self.menu_open = false;
        Some(section.top)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_compact(screen_width: f32) -> bool {
        screen_width < COMPACT_NAV_WIDTH as f32
    }

    pub fn hamburger_rect(screen_width: f32) -> Rectangle {
        Rectangle::new(
            screen_width - 24.0 - HAMBURGER_SIZE,
            (NAV_HEIGHT - HAMBURGER_SIZE) / 2.0,
            HAMBURGER_SIZE,
            HAMBURGER_SIZE,
        )
    }

    /// Clickable tab areas; empty when the compact menu is closed.
    pub fn tab_rects(&self, screen_width: f32) -> Vec<Rectangle> {
        if Self::is_compact(screen_width) {
            if !self.menu_open {
                return Vec::new();
            }
            return (0..self.sections.len())
                .map(|i| Rectangle::new(0.0, NAV_HEIGHT + i as f32 * 48.0, screen_width, 48.0))
                .collect();
        }

        let widths: Vec<f32> = self
            .sections
            .iter()
            .map(|s| measure_text(&s.title, TAB_FONT_SIZE) as f32)
            .collect();
        let total: f32 = widths.iter().sum::<f32>() + TAB_GAP * widths.len() as f32;
        let mut x = screen_width - 24.0 - total;
        widths
            .into_iter()
            .map(|w| {
                let rect = Rectangle::new(x, 0.0, w + TAB_GAP, NAV_HEIGHT);
                x += w + TAB_GAP;
                rect
            })
            .collect()
    }

    pub fn handle_click(&mut self, point: Vector2, screen_width: f32) -> NavAction {
        if Self::is_compact(screen_width) && Self::hamburger_rect(screen_width).check_collision_point_rec(point) {
            self.toggle_menu();
            return NavAction::ToggledMenu;
        }
        match self
            .tab_rects(screen_width)
            .iter()
            .position(|rect| rect.check_collision_point_rec(point))
        {
            Some(index) => NavAction::Tab(index),
            None => NavAction::None,
        }
    }

    /// Height of the area the navigation covers, dropdown included.
    pub fn covered_height(&self, screen_width: f32) -> f32 {
        match self.tab_rects(screen_width).last() {
            Some(rect) if Self::is_compact(screen_width) => rect.y + rect.height,
            _ => NAV_HEIGHT,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: f32) {
        d.draw_rectangle_rec(
            Rectangle::new(0.0, 0.0, screen_width, NAV_HEIGHT),
            theme::fade(theme::BACKGROUND, 0.95),
        );
        d.draw_text(&self.brand, 24, ((NAV_HEIGHT - 28.0) / 2.0) as i32, 28, theme::ACCENT);

        let compact = Self::is_compact(screen_width);
        if compact {
            let r = Self::hamburger_rect(screen_width);
            if self.menu_open {
                // Bars turn into an X while open.
                let (a, b) = (Vector2::new(r.x, r.y), Vector2::new(r.x + r.width, r.y + r.height));
                d.draw_line_ex(a, b, 3.0, theme::TEXT);
                d.draw_line_ex(Vector2::new(a.x, b.y), Vector2::new(b.x, a.y), 3.0, theme::TEXT);
            } else {
                for i in 0..3 {
                    let y = r.y + 6.0 + i as f32 * 11.0;
                    d.draw_rectangle_rec(Rectangle::new(r.x, y, r.width, 3.0), theme::TEXT);
                }
            }
        }

        for (i, rect) in self.tab_rects(screen_width).iter().enumerate() {
            if compact {
                d.draw_rectangle_rec(*rect, theme::SURFACE);
            }
            let color = if self.active == Some(i) { theme::ACCENT } else { theme::TEXT };
            let title = &self.sections[i].title;
            d.draw_text(
                title,
                (rect.x + TAB_GAP / 2.0) as i32,
                (rect.y + (rect.height - TAB_FONT_SIZE as f32) / 2.0) as i32,
                TAB_FONT_SIZE,
                color,
            );
            if self.active == Some(i) && !compact {
                let w = measure_text(title, TAB_FONT_SIZE) as f32;
                d.draw_rectangle_rec(
                    Rectangle::new(rect.x + TAB_GAP / 2.0, rect.y + rect.height - 18.0, w, 2.0),
                    theme::ACCENT,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        ["home", "about", "projects", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| Section {
                id: id.to_string(),
                title: id.to_string(),
                top: i as f32 * 800.0,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn scroll_inside_band_selects_that_section() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some(0));
        assert_eq!(active_section(&sections, 650.0), Some(0));
        assert_eq!(active_section(&sections, 700.0), Some(1));
        assert_eq!(active_section(&sections, 2350.0), Some(3));
    }

    #[test]
    fn nothing_matches_past_the_last_band() {
        let sections = sections();
        assert_eq!(active_section(&sections, 3100.0), None);
    }

    #[test]
    fn overlapping_bands_pick_the_later_section() {
        let mut sections = sections();
        sections[0].height = 1000.0;
        assert_eq!(active_section(&sections, 750.0), Some(1));
    }

    #[test]
    fn scroll_clears_active_tab_when_nothing_matches() {
        let mut nav = NavBar::new("me", sections());
        nav.on_scroll(900.0);
        assert_eq!(nav.active(), Some(1));
        nav.on_scroll(5000.0);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn tab_click_activates_and_returns_target() {
        let mut nav = NavBar::new("me", sections());
        nav.toggle_menu();
        assert_eq!(nav.on_tab_click(2), Some(1600.0));
        assert_eq!(nav.active(), Some(2));
        assert!(!nav.is_menu_open());
        assert_eq!(nav.on_tab_click(9), None);
        assert_eq!(nav.active(), Some(2));
    }

    #[test]
    fn hamburger_toggles_in_compact_mode() {
        let mut nav = NavBar::new("me", sections());
        let width = 600.0;
        let r = NavBar::hamburger_rect(width);
        let point = Vector2::new(r.x + 1.0, r.y + 1.0);

        assert_eq!(nav.handle_click(point, width), NavAction::ToggledMenu);
        assert!(nav.is_menu_open());
        assert_eq!(nav.tab_rects(width).len(), 4);

        let first = nav.tab_rects(width)[1];
        let tab_point = Vector2::new(first.x + 5.0, first.y + 5.0);
        assert_eq!(nav.handle_click(tab_point, width), NavAction::Tab(1));

        nav.handle_click(point, width);
        assert!(!nav.is_menu_open());
        assert!(nav.tab_rects(width).is_empty());
    }

    #[test]
    fn hamburger_edges_are_clickable() {
        let mut nav = NavBar::new("me", sections());
        let width = 600.0;
        let r = NavBar::hamburger_rect(width);

        let corner = Vector2::new(r.x + r.width, r.y + r.height);
        assert_eq!(nav.handle_click(corner, width), NavAction::ToggledMenu);

        let outside = Vector2::new(r.x + r.width + 1.0, r.y + r.height);
        nav.toggle_menu();
        assert_eq!(nav.handle_click(outside, width), NavAction::None);
    }

    #[test]
    fn scroll_above_the_first_band_selects_none() {
        let sections = sections();
        assert_eq!(active_section(&sections, -NAV_OFFSET), Some(0));
        assert_eq!(active_section(&sections, -NAV_OFFSET - 0.1), None);
        assert_eq!(active_section(&[], 0.0), None);
    }
}
