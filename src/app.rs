//! The whole page: section layout, event routing and drawing.

use raylib::prelude::*;

use crate::carousel::{CarouselEngine, Slide};
use crate::config::PortfolioConfig;
use crate::constants::*;
use crate::cursor::CustomCursor;
use crate::engine::{Engine, SectionFrame};
use crate::error::Result;
use crate::events::{EventKind, Handler, Subscriptions};
use crate::form::{FormAction, SUCCESS_MESSAGE};
use crate::input::{FrameInput, Key};
use crate::nav::{NavAction, NavBar, Section};
use crate::notification::{NotificationCenter, ToastKind};
use crate::reveal::{RevealId, RevealTracker};
use crate::scroll::ScrollState;
use crate::sections::{AboutSection, ContactSection, HeroSection};
use crate::theme;
use crate::typing::TypingEffect;

const CONTENT_MAX_WIDTH: f32 = 1100.0;
const CONTENT_MARGIN: f32 = 48.0;
const MIN_HERO_HEIGHT: f32 = 600.0;

const HOME: usize = 0;
const ABOUT: usize = 1;
const PROJECTS: usize = 2;
const CONTACT: usize = 3;

const SUBSCRIPTIONS: [(EventKind, Handler); 14] = [
    (EventKind::Tick, Handler::Carousel),
    (EventKind::Tick, Handler::Typing),
    (EventKind::Tick, Handler::Notification),
    (EventKind::Tick, Handler::Reveal),
    (EventKind::Scroll, Handler::Navigation),
    (EventKind::Scroll, Handler::Reveal),
    (EventKind::Click, Handler::Notification),
    (EventKind::Click, Handler::Navigation),
    (EventKind::Click, Handler::Carousel),
    (EventKind::Click, Handler::ContactForm),
    (EventKind::Key, Handler::ContactForm),
    (EventKind::Key, Handler::Carousel),
    (EventKind::Text, Handler::ContactForm),
    (EventKind::PointerMove, Handler::Cursor),
];

pub struct Portfolio {
    nav: NavBar,
    scroll: ScrollState,
    hero: HeroSection,
    about: AboutSection,
    projects: CarouselEngine,
    contact: ContactSection,
    reveals: RevealTracker,
    reveal_ids: [RevealId; 4],
    notifications: NotificationCenter,
    cursor: CustomCursor,
    subscriptions: Subscriptions,
    screen: Vector2,
    last_scroll: Option<f32>,
}

impl Portfolio {
    pub fn new(config: &PortfolioConfig, slides: Vec<Slide>, screen_width: f32, screen_height: f32) -> Result<Self> {
        let typing = TypingEffect::new(config.phrases.clone()).with_jitter(config.typing_jitter);
        let hero = HeroSection::new(config.owner.clone(), typing, screen_height.max(MIN_HERO_HEIGHT));
        let about = AboutSection::new(config.about.clone());
        let autoplay = config.autoplay.then_some(config.slide_interval);
        let projects = CarouselEngine::new(slides, autoplay)?;
        let contact = ContactSection::new(screen_height);

        let sections = stack_sections([hero.height(), about.height(), projects.height(), contact.height()]);
        let page_height: f32 = sections.iter().map(|s| s.height).sum();

        let mut reveals = RevealTracker::new();
        let reveal_ids = [HOME, ABOUT, PROJECTS, CONTACT].map(|i| reveals.register(sections[i].top, sections[i].height));

        let mut subscriptions = Subscriptions::new();
        for (kind, handler) in SUBSCRIPTIONS {
            subscriptions.subscribe(kind, handler);
        }

        let mut portfolio = Self {
            nav: NavBar::new(config.owner.clone(), sections),
            scroll: ScrollState::new(page_height, screen_height),
            hero,
            about,
            projects,
            contact,
            reveals,
            reveal_ids,
            notifications: NotificationCenter::new(),
            cursor: CustomCursor::new(),
            subscriptions,
            screen: Vector2::new(screen_width, screen_height),
            last_scroll: None,
        };
        // Highlight the right tab before the first scroll event
        portfolio.dispatch_scroll();
        Ok(portfolio)
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn projects(&self) -> &CarouselEngine {
        &self.projects
    }

    pub fn contact(&self) -> &ContactSection {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactSection {
        &mut self.contact
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn reveals(&self) -> &RevealTracker {
        &self.reveals
    }

    pub fn reveal_id(&self, section: usize) -> Option<RevealId> {
        self.reveal_ids.get(section).copied()
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    fn page_height(&self) -> f32 {
        self.nav.sections().iter().map(|s| s.height).sum()
    }

    fn content_x(&self) -> f32 {
        (self.screen.x - self.content_width()) / 2.0
    }

    fn content_width(&self) -> f32 {
        (self.screen.x - 2.0 * CONTENT_MARGIN).clamp(0.0, CONTENT_MAX_WIDTH)
    }

    /// Screen position of the top-left corner of a section's content.
    pub fn section_origin(&self, section: usize) -> Vector2 {
        let top = self.nav.sections().get(section).map_or(0.0, |s| s.top);
        Vector2::new(self.content_x(), top - self.scroll.offset())
    }

    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        let screen = Vector2::new(input.screen_width, input.screen_height);
        if screen != self.screen {
            self.screen = screen;
            self.relayout();
        }

        let form_focused = self.contact.form.focus().is_some();
        if input.wheel != 0.0 {
            self.scroll.scroll_by(-input.wheel * SCROLL_STEP);
        }
        if !form_focused {
            for key in &input.keys {
                match key {
                    Key::Up => self.scroll.scroll_by(-SCROLL_STEP),
                    Key::Down => self.scroll.scroll_by(SCROLL_STEP),
                    Key::PageUp => self.scroll.scroll_by(-self.screen.y * 0.9),
                    Key::PageDown => self.scroll.scroll_by(self.screen.y * 0.9),
                    _ => {}
                }
            }
        }
        self.scroll.update(dt);
        if self.last_scroll != Some(self.scroll.offset()) {
            self.dispatch_scroll();
        }

        if input.clicked {
            self.dispatch_click(input.mouse);
        }
        if !input.keys.is_empty() || !input.chars.is_empty() {
            self.dispatch_keys(input);
        }
        self.dispatch_tick(dt);

        for handler in self.subscriptions.handlers_for(EventKind::PointerMove) {
            if handler == Handler::Cursor {
                let hovering = self.is_interactive(input.mouse);
                self.cursor.update(dt, input.mouse, hovering);
            }
        }
    }

    /// Recomputes section heights and positions for the current screen size.
    fn relayout(&mut self) {
        self.hero.set_height(self.screen.y.max(MIN_HERO_HEIGHT));
        self.contact.set_min_height(self.screen.y);

        let heights = [self.hero.height(), self.about.height(), self.projects.height(), self.contact.height()];
        let sections = stack_sections(heights);
        for (section, id) in sections.iter().zip(self.reveal_ids) {
            self.reveals.relocate(id, section.top, section.height);
        }
        self.nav.set_sections(sections);
        self.scroll.set_extent(self.page_height(), self.screen.y);
        tracing::debug!(width = self.screen.x, height = self.screen.y, page_height = self.page_height(), "page relaid out");
        self.dispatch_scroll();
    }

    fn dispatch_scroll(&mut self) {
        let offset = self.scroll.offset();
        self.last_scroll = Some(offset);
        let handlers: Vec<Handler> = self.subscriptions.handlers_for(EventKind::Scroll).collect();
        for handler in handlers {
            match handler {
                Handler::Navigation => self.nav.on_scroll(offset),
                Handler::Reveal => self.reveals.observe(offset, self.screen.y),
                _ => {}
            }
        }
    }

    fn dispatch_click(&mut self, point: Vector2) {
        let handlers: Vec<Handler> = self.subscriptions.handlers_for(EventKind::Click).collect();
        for handler in handlers {
            let consumed = match handler {
                Handler::Notification => self.notifications.handle_click(point, self.screen.x),
                Handler::Navigation => self.click_nav(point),
                Handler::Carousel => {
                    let layout = self.projects.layout(self.section_origin(PROJECTS), self.content_width());
                    self.projects.handle_click(&layout, point)
                }
                Handler::ContactForm => {
                    let layout = self.contact.form_layout(self.section_origin(CONTACT), self.content_width());
                    if self.contact.form.handle_click(&layout, point) == FormAction::Submit {
                        self.submit_form();
                    }
                    true
                }
                _ => false,
            };
            if consumed {
                break;
            }
        }
    }

    fn click_nav(&mut self, point: Vector2) -> bool {
        match self.nav.handle_click(point, self.screen.x) {
            NavAction::Tab(index) => {
                if let Some(target) = self.nav.on_tab_click(index) {
                    self.scroll.scroll_to(target);
                }
                true
            }
            NavAction::ToggledMenu => true,
            // The bar sits on top of the page
            NavAction::None => point.y < self.nav.covered_height(self.screen.x),
        }
    }

    fn dispatch_keys(&mut self, input: &FrameInput) {
        let mut kinds = Vec::new();
        if !input.keys.is_empty() {
            kinds.push(EventKind::Key);
        }
        if !input.chars.is_empty() {
            kinds.push(EventKind::Text);
        }

        let mut handlers: Vec<Handler> = Vec::new();
        for kind in kinds {
            for handler in self.subscriptions.handlers_for(kind) {
                if !handlers.contains(&handler) {
                    handlers.push(handler);
                }
            }
        }

        for handler in handlers {
            match handler {
                Handler::ContactForm if self.contact.form.focus().is_some() => {
                    if self.contact.form.handle_keys(input) == FormAction::Submit {
                        self.submit_form();
                    }
                    // A focused field owns the keyboard
                    return;
                }
                Handler::Carousel if self.is_section_on_screen(PROJECTS) => {
                    for key in &input.keys {
                        self.projects.handle_key(*key);
                    }
                }
                _ => {}
            }
        }
    }

    fn dispatch_tick(&mut self, dt: f32) {
        let handlers: Vec<Handler> = self.subscriptions.handlers_for(EventKind::Tick).collect();
        for handler in handlers {
            match handler {
                Handler::Carousel => self.projects.update(dt),
                Handler::Typing => self.hero.update(dt),
                Handler::Notification => self.notifications.update(dt),
                Handler::Reveal => self.reveals.update(dt),
                _ => {}
            }
        }
    }

    fn submit_form(&mut self) {
        match self.contact.form.submit() {
            Ok(()) => self.notifications.show(SUCCESS_MESSAGE, ToastKind::Success),
            Err(e) => self.notifications.show(e.to_string(), ToastKind::Error),
        }
    }

    fn is_section_on_screen(&self, section: usize) -> bool {
        let origin = self.section_origin(section);
        let height = self.nav.sections().get(section).map_or(0.0, |s| s.height);
        origin.y < self.screen.y && origin.y + height > NAV_HEIGHT
    }

    fn is_interactive(&self, point: Vector2) -> bool {
        if self.nav.tab_rects(self.screen.x).iter().any(|r| r.check_collision_point_rec(point)) {
            return true;
        }
        if NavBar::is_compact(self.screen.x) && NavBar::hamburger_rect(self.screen.x).check_collision_point_rec(point) {
            return true;
        }
        let carousel = self.projects.layout(self.section_origin(PROJECTS), self.content_width());
        if carousel.is_interactive(point) {
            return true;
        }
        let form = self.contact.form_layout(self.section_origin(CONTACT), self.content_width());
        form.submit.check_collision_point_rec(point)
    }

    /// Cancels timers and drops every subscription.
    pub fn shutdown(&mut self) {
        self.projects.shutdown();
        self.subscriptions.clear();
        tracing::info!("portfolio shut down");
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(theme::BACKGROUND);

        let width = self.content_width();
        let engines: [&dyn Engine; 4] = [&self.hero, &self.about, &self.projects, &self.contact];
        for (i, engine) in engines.iter().enumerate() {
            let origin = self.section_origin(i);
            if origin.y > self.screen.y || origin.y + engine.height() < 0.0 {
                continue;
            }
            let id = self.reveal_ids[i];
            let frame = SectionFrame {
                origin: Vector2::new(origin.x, origin.y + self.reveals.rise(id)),
                width,
                alpha: self.reveals.alpha(id),
            };
            engine.draw(d, &frame);
        }

        self.nav.draw(d, self.screen.x);
        self.notifications.draw(d, self.screen.x);
        self.cursor.draw(d);
    }
}

/// Stacks the page sections top to bottom in page order.
fn stack_sections(heights: [f32; 4]) -> Vec<Section> {
    let titles = [("home", "Home"), ("about", "About"), ("projects", "Projects"), ("contact", "Contact")];
    let mut top = 0.0;
    titles
        .into_iter()
        .zip(heights)
        .map(|((id, title), height)| {
            let section = Section {
                id: id.to_string(),
                title: title.to_string(),
                top,
                height,
            };
            top += height;
            section
        })
        .collect()
}
