//! Page-level behavior driven through `Portfolio::update`, without a window.

use portfolio::carousel::Slide;
use portfolio::constants::*;
use portfolio::events::EventKind;
use portfolio::form::{Field, SUCCESS_MESSAGE};
use portfolio::input::{FrameInput, Key};
use portfolio::nav::NavBar;
use portfolio::notification::ToastKind;
use portfolio::{Portfolio, PortfolioConfig};
use raylib::prelude::*;

// Narrow enough for the compact menu, so tab geometry does not depend on fonts.
const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 700.0;

fn page(autoplay: bool) -> Portfolio {
    let config = PortfolioConfig {
        autoplay,
        typing_jitter: 0.0,
        ..PortfolioConfig::default()
    };
    let slides = config
        .projects
        .iter()
        .map(|p| Slide::card(&p.title, &p.description))
        .collect();
    Portfolio::new(&config, slides, WIDTH, HEIGHT).unwrap()
}

fn idle() -> FrameInput {
    FrameInput::idle(WIDTH, HEIGHT)
}

fn click(point: Vector2) -> FrameInput {
    FrameInput {
        mouse: point,
        clicked: true,
        ..idle()
    }
}

fn keys(keys: &[Key]) -> FrameInput {
    FrameInput {
        keys: keys.to_vec(),
        ..idle()
    }
}

fn settle(page: &mut Portfolio, seconds: f32) {
    let mut elapsed = 0.0;
    while elapsed < seconds {
        page.update(FRAME_TIME, &idle());
        elapsed += FRAME_TIME;
    }
}

#[test]
fn first_section_is_active_and_revealed_at_start() {
    let page = page(false);
    assert_eq!(page.nav().active(), Some(0));

    let hero = page.reveal_id(0).unwrap();
    let about = page.reveal_id(1).unwrap();
    assert!(page.reveals().is_revealed(hero));
    assert!(!page.reveals().is_revealed(about));
}

#[test]
fn scrolling_updates_active_tab_and_reveals() {
    let mut page = page(false);
    for _ in 0..10 {
        page.update(FRAME_TIME, &FrameInput { wheel: -1.0, ..idle() });
    }
    assert_eq!(page.scroll().offset(), 10.0 * SCROLL_STEP);
    assert_eq!(page.nav().active(), Some(1));
    assert!(page.reveals().is_revealed(page.reveal_id(1).unwrap()));
}

#[test]
fn tab_click_smooth_scrolls_to_section() {
    let mut page = page(false);

    let hamburger = NavBar::hamburger_rect(WIDTH);
    page.update(FRAME_TIME, &click(Vector2::new(hamburger.x + 2.0, hamburger.y + 2.0)));
    assert!(page.nav().is_menu_open());

    let about_tab = page.nav().tab_rects(WIDTH)[1];
    page.update(FRAME_TIME, &click(Vector2::new(about_tab.x + 5.0, about_tab.y + 5.0)));
    assert_eq!(page.nav().active(), Some(1));
    assert!(!page.nav().is_menu_open());
    assert!(page.scroll().is_animating());

    settle(&mut page, SCROLL_DURATION + 0.1);
    let about_top = page.nav().sections()[1].top;
    assert_eq!(page.scroll().offset(), about_top);
    assert_eq!(page.nav().active(), Some(1));
}

#[test]
fn last_tab_activates_after_window_grows() {
    let mut page = page(false);
    let tall = FrameInput::idle(WIDTH, 1000.0);
    page.update(FRAME_TIME, &tall);

    let contact = &page.nav().sections()[3];
    assert_eq!(contact.height, 1000.0);
    assert_eq!(page.scroll().max_offset(), contact.top);

    while page.scroll().offset() < page.scroll().max_offset() {
        page.update(FRAME_TIME, &FrameInput { wheel: -1.0, ..tall.clone() });
    }
    assert_eq!(page.nav().active(), Some(3));
    assert!(page.reveals().is_revealed(page.reveal_id(3).unwrap()));
}

#[test]
fn empty_form_submission_shows_error_and_keeps_input() {
    let mut page = page(false);
    page.contact_mut().form.set(Field::Email, "a@b.com");
    page.contact_mut().form.set_focus(Some(Field::Name));

    page.update(FRAME_TIME, &keys(&[Key::Enter]));

    let toast = page.notifications().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please fill in all fields");
    assert_eq!(page.contact().form.value(Field::Email), "a@b.com");
}

#[test]
fn invalid_email_shows_error() {
    let mut page = page(false);
    let form = &mut page.contact_mut().form;
    form.set(Field::Name, "A");
    form.set(Field::Email, "bad-email");
    form.set(Field::Subject, "x");
    form.set(Field::Message, "y");
    form.set_focus(Some(Field::Subject));

    page.update(FRAME_TIME, &keys(&[Key::Enter]));

    let toast = page.notifications().current().unwrap();
    assert_eq!(toast.message, "Please enter a valid email address");
    assert_eq!(page.contact().form.value(Field::Name), "A");
}

#[test]
fn valid_form_shows_success_and_resets() {
    let mut page = page(false);
    let form = &mut page.contact_mut().form;
    form.set(Field::Name, "A");
    form.set(Field::Email, "a@b.com");
    form.set(Field::Subject, "x");
    form.set(Field::Message, "y");
    form.set_focus(Some(Field::Email));

    page.update(FRAME_TIME, &keys(&[Key::Enter]));

    let toast = page.notifications().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, SUCCESS_MESSAGE);
    for field in Field::ALL {
        assert_eq!(page.contact().form.value(field), "");
    }

    settle(&mut page, TOAST_LIFETIME + TOAST_SLIDE_DURATION + 0.1);
    assert!(page.notifications().current().is_none());
}

#[test]
fn typed_text_goes_to_focused_field_only() {
    let mut page = page(false);
    page.contact_mut().form.set_focus(Some(Field::Name));
    let before = page.projects().controller().current_index();

    page.update(
        FRAME_TIME,
        &FrameInput {
            chars: vec!['h', 'i'],
            keys: vec![Key::Right],
            ..idle()
        },
    );

    assert_eq!(page.contact().form.value(Field::Name), "hi");
    assert_eq!(page.projects().controller().current_index(), before);
}

#[test]
fn arrow_keys_move_carousel_when_in_view() {
    let mut page = page(false);
    page.update(FRAME_TIME, &keys(&[Key::Right]));
    assert_eq!(page.projects().controller().current_index(), 0);

    let projects_top = page.nav().sections()[2].top;
    while page.scroll().offset() < projects_top {
        page.update(FRAME_TIME, &FrameInput { wheel: -1.0, ..idle() });
    }
    page.update(FRAME_TIME, &keys(&[Key::Right]));
    assert_eq!(page.projects().controller().current_index(), 1);
}

#[test]
fn autoplay_runs_until_shutdown() {
    let mut page = page(true);
    settle(&mut page, SLIDE_INTERVAL + 0.1);
    assert_eq!(page.projects().controller().current_index(), 1);

    page.shutdown();
    assert!(page.subscriptions().is_empty());
    assert!(!page.projects().is_autoplaying());
    assert_eq!(page.subscriptions().handlers_for(EventKind::Tick).count(), 0);

    settle(&mut page, SLIDE_INTERVAL * 2.0);
    assert_eq!(page.projects().controller().current_index(), 1);
}
