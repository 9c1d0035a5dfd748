//! The shipped deck driven through terminal events.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use kickoff_engine::{NavOutcome, TerminalRequest};
use kickoff_tui::apply_event;

use crate::common::{builtin_app, builtin_deck};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn builtin_deck_has_the_six_sections_in_order() {
    let deck = builtin_deck();
    let ids: Vec<&str> = deck.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["home", "context", "goals", "refs", "team", "plan"]);
    assert_eq!(deck.sections[2].title, "Objectifs de la mission");
    assert_eq!(deck.sections[4].team.len(), 6);
}

#[test]
fn arrows_walk_every_slide_then_stop() {
    let mut app = builtin_app();
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('p')), now);
    assert_eq!(
        app.take_terminal_requests(),
        [TerminalRequest::EnableMouseCapture]
    );

    for expected in 1..6 {
        apply_event(&mut app, press(KeyCode::Down), now);
        assert_eq!(app.current_slide(), expected);
        assert_eq!(app.viewport().offset(), 10 * expected as u32);
    }
    assert_eq!(app.handle_key(kickoff_engine::Key::ArrowDown, now), NavOutcome::AtBoundary);
    assert_eq!(app.current_slide(), 5);

    apply_event(&mut app, press(KeyCode::Up), now);
    apply_event(&mut app, press(KeyCode::Left), now);
    assert_eq!(app.current_slide(), 3);
}

#[test]
fn leaving_presentation_keeps_the_slide_on_screen() {
    let mut app = builtin_app();
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('p')), now);
    apply_event(&mut app, press(KeyCode::Right), now);
    apply_event(&mut app, press(KeyCode::Right), now);
    app.take_terminal_requests();

    apply_event(&mut app, press(KeyCode::Esc), now);
    assert!(!app.presentation_enabled());
    assert!(!app.should_quit());
    assert_eq!(
        app.take_terminal_requests(),
        [TerminalRequest::DisableMouseCapture]
    );
    assert_eq!(app.visible_section(), Some(2));

    // Native scrolling resumes from where the slide left off.
    apply_event(&mut app, press(KeyCode::Down), now);
    assert_eq!(app.viewport().offset(), 21);
    assert_eq!(app.current_slide(), 2);
}

#[test]
fn section_links_jump_in_scroll_mode() {
    let mut app = builtin_app();
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('n')), now);
    assert_eq!(app.visible_section(), Some(5));
    apply_event(&mut app, press(KeyCode::Char('2')), now);
    assert_eq!(app.visible_section(), Some(1));
    apply_event(&mut app, press(KeyCode::Home), now);
    assert_eq!(app.viewport().offset(), 0);
    apply_event(&mut app, press(KeyCode::End), now);
    assert_eq!(app.viewport().offset(), app.viewport().max_offset());
}

#[test]
fn resize_during_presentation_realigns_the_slide() {
    let mut app = builtin_app();
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('p')), now);
    apply_event(&mut app, press(KeyCode::Down), now);
    apply_event(&mut app, press(KeyCode::Down), now);
    assert_eq!(app.viewport().offset(), 20);

    apply_event(&mut app, Event::Resize(100, 32), now);
    assert_eq!(app.viewport().height(), 30);
    assert_eq!(app.viewport().offset(), 60);
    assert_eq!(app.current_slide(), 2);
}

#[test]
fn quit_keys_end_the_session() {
    let mut app = builtin_app();
    assert!(apply_event(&mut app, press(KeyCode::Char('q')), Instant::now()));

    let mut app = builtin_app();
    let now = Instant::now();
    assert!(!apply_event(&mut app, press(KeyCode::Char('p')), now));
    assert!(!apply_event(&mut app, press(KeyCode::Esc), now));
    assert!(apply_event(&mut app, press(KeyCode::Esc), now));
}
