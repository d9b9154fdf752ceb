//! End-to-end tests for the banner/host contract
//!
//! Drives the component exactly the way the dashboard does: dispatch render
//! events on the bus, pump the component, observe the reported height.

mod common;

use common::{buffer_text, sample_args};
use marquee::banner::{OPEN_HEIGHT, RENDER_EVENT, View};
use marquee::host::{EventBus, SharedHeight};
use marquee::{App, Config, DisplayArgs};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::json;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn mounted() -> (EventBus, View, SharedHeight) {
    let bus = EventBus::new();
    let height = SharedHeight::new();
    let view = View::mount(&bus, Box::new(height.clone()));
    (bus, view, height)
}

#[test]
fn scenario_announcement_without_subtitle() {
    let (bus, mut view, height) = mounted();

    bus.dispatch(
        RENDER_EVENT,
        &json!({ "args": { "title": "Introducing GPT-5", "subtitle": "", "gradient": true } }),
    );
    view.pump();

    assert_eq!(view.args().title, "Introducing GPT-5");
    assert!(!view.args().has_subtitle());
    assert_eq!(height.get(), OPEN_HEIGHT);
}

#[test]
fn scenario_title_and_subtitle() {
    let (bus, mut view, height) = mounted();

    bus.dispatch(RENDER_EVENT, &json!({ "args": { "title": "X", "subtitle": "Y" } }));
    view.pump();

    assert_eq!(view.args().title, "X");
    assert_eq!(view.args().subtitle, "Y");
    assert_eq!(height.get(), OPEN_HEIGHT);
}

#[test]
fn scenario_missing_detail_uses_defaults() {
    let (bus, mut view, height) = mounted();

    bus.dispatch(RENDER_EVENT, &json!({}));
    view.pump();

    assert_eq!(*view.args(), DisplayArgs::default());
    assert!(view.args().gradient);
    assert_eq!(height.get(), OPEN_HEIGHT);
}

#[test]
fn scenario_close_then_render_event_empties_everything() -> TestResult {
    let (bus, mut view, height) = mounted();
    bus.dispatch(RENDER_EVENT, &json!({ "args": sample_args() }));
    view.pump();

    view.close();
    bus.dispatch(RENDER_EVENT, &json!({ "args": sample_args() }));
    view.pump();

    assert_eq!(height.get(), 0);

    // A closed banner renders nothing at all.
    let backend = TestBackend::new(40, 8);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| {
        if let Some(widget) = view.widget() {
            widget.render(frame, frame.area());
        }
    })?;
    let text = buffer_text(terminal.backend().buffer());
    assert_eq!(text.trim(), "");
    Ok(())
}

#[test]
fn height_stays_constant_across_render_events_before_close() {
    let (bus, mut view, height) = mounted();

    for title in ["a", "b", "c"] {
        bus.dispatch(RENDER_EVENT, &json!({ "args": { "title": title } }));
        view.pump();
        assert_eq!(height.get(), OPEN_HEIGHT);
    }
}

#[test]
fn unmount_releases_the_render_listener() {
    let (bus, view, _height) = mounted();
    assert_eq!(bus.listener_count(RENDER_EVENT), 1);

    drop(view);

    assert_eq!(bus.listener_count(RENDER_EVENT), 0);
    assert_eq!(bus.dispatch(RENDER_EVENT, &json!({})), 0);
}

#[test]
fn render_events_do_not_leak_to_other_names() {
    let (bus, mut view, height) = mounted();
    let other = bus.subscribe("marquee:other");

    bus.dispatch("marquee:other", &json!({ "args": { "title": "X" } }));
    assert_eq!(view.pump(), 0);
    assert_eq!(height.get(), 0);
    assert!(other.try_next().is_some());
}

#[test]
fn dashboard_drives_the_full_contract() {
    let mut app = App::new(Config::default());

    // Mount: first render event reports the open height.
    app.dispatch_current();
    app.pump_banner();
    assert_eq!(app.height.get(), OPEN_HEIGHT);

    // User cycles presets; the height never changes while open.
    app.dispatch_next();
    app.pump_banner();
    assert_eq!(app.height.get(), OPEN_HEIGHT);
    assert_eq!(app.banner.args(), &app.config.presets[1]);

    // Close, then the next host dispatch frees the space.
    app.activate_close();
    assert_eq!(app.height.get(), OPEN_HEIGHT);
    app.dispatch_current();
    app.pump_banner();
    assert_eq!(app.height.get(), 0);
    assert_eq!(app.banner_rows(), 0);
}
