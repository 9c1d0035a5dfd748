//! Wheel gestures in presentation mode.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use kickoff_engine::config::ScrollRoot;
use kickoff_engine::{AppOptions, NavOutcome};
use kickoff_tui::apply_event;
use kickoff_types::{ListenerKind, ScrollScope};

use crate::common::{app_with, builtin_app, builtin_deck, instant_options};

fn notch(kind: MouseEventKind) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: 10,
        row: 4,
        modifiers: KeyModifiers::NONE,
    })
}

fn present(app: &mut kickoff_engine::App, now: Instant) {
    apply_event(
        app,
        Event::Key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)),
        now,
    );
}

#[test]
fn a_trackpad_burst_moves_one_slide() {
    let mut app = builtin_app();
    let t0 = Instant::now();
    present(&mut app, t0);

    // Inertial scrolling: a notch every 50ms for half a second.
    for step in 0..10 {
        apply_event(
            &mut app,
            notch(MouseEventKind::ScrollDown),
            t0 + Duration::from_millis(step * 50),
        );
    }
    assert_eq!(app.current_slide(), 1);
    assert_eq!(app.viewport().offset(), 10);

    apply_event(
        &mut app,
        notch(MouseEventKind::ScrollDown),
        t0 + Duration::from_millis(700),
    );
    assert_eq!(app.current_slide(), 2);
}

#[test]
fn boundary_hits_still_start_the_cooldown() {
    let mut app = builtin_app();
    let t0 = Instant::now();
    present(&mut app, t0);

    assert_eq!(app.handle_wheel(-1.0, t0), NavOutcome::AtBoundary);
    assert_eq!(
        app.handle_wheel(1.0, t0 + Duration::from_millis(100)),
        NavOutcome::Debounced
    );
    assert_eq!(app.current_slide(), 0);
    assert!(app.handle_wheel(1.0, t0 + Duration::from_millis(701)).moved());
}

#[test]
fn keys_are_not_debounced_by_the_wheel() {
    let mut app = builtin_app();
    let t0 = Instant::now();
    present(&mut app, t0);

    assert!(app.handle_wheel(1.0, t0).moved());
    assert!(app.handle_key(kickoff_engine::Key::ArrowDown, t0).moved());
    assert_eq!(app.current_slide(), 2);
    assert_eq!(app.handle_wheel(1.0, t0), NavOutcome::Debounced);
}

#[test]
fn wheel_scrolls_lines_outside_presentation() {
    let mut app = builtin_app();
    let now = Instant::now();
    apply_event(&mut app, notch(MouseEventKind::ScrollDown), now);
    apply_event(&mut app, notch(MouseEventKind::ScrollDown), now);
    assert_eq!(app.viewport().offset(), 6);
    assert_eq!(app.current_slide(), 0);
}

#[test]
fn document_root_listens_on_the_window() {
    let mut app = app_with(
        builtin_deck(),
        AppOptions {
            scroll_root: ScrollRoot::Document,
            ..instant_options()
        },
    );
    assert_eq!(app.navigator().scope(), &ScrollScope::Document);

    let t0 = Instant::now();
    present(&mut app, t0);
    assert!(app.viewport().has_listener(ListenerKind::Wheel));
    assert!(!app.viewport().allows_native_scroll());
    assert!(app.handle_wheel(1.0, t0).moved());

    app.set_presentation(false);
    assert_eq!(app.viewport().listener_count(), 0);
    assert!(app.viewport().allows_native_scroll());
}

#[test]
fn custom_cooldown_is_honoured() {
    let mut app = app_with(
        builtin_deck(),
        AppOptions {
            wheel_cooldown: Duration::from_millis(200),
            ..instant_options()
        },
    );
    let t0 = Instant::now();
    present(&mut app, t0);

    assert!(app.handle_wheel(1.0, t0).moved());
    assert_eq!(
        app.handle_wheel(1.0, t0 + Duration::from_millis(150)),
        NavOutcome::Debounced
    );
    assert!(app.handle_wheel(1.0, t0 + Duration::from_millis(200)).moved());
    assert_eq!(app.current_slide(), 2);
}
