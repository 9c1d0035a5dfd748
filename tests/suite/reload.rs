//! Reloading the deck file while presenting.

use std::fs;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use kickoff_tui::apply_event;
use tempfile::tempdir;

use crate::common::{deck_toml, file_backed_app};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn shrinking_deck_clamps_the_current_slide() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.toml");
    fs::write(&path, deck_toml(&["home", "goals", "plan"])).unwrap();

    let mut app = file_backed_app(path.clone());
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('p')), now);
    apply_event(&mut app, press(KeyCode::Down), now);
    apply_event(&mut app, press(KeyCode::Down), now);
    assert_eq!(app.current_slide(), 2);

    fs::write(&path, deck_toml(&["home", "goals"])).unwrap();
    apply_event(&mut app, press(KeyCode::Char('r')), now);

    assert_eq!(app.status(), Some("Deck reloaded (2 sections)"));
    assert_eq!(app.total_slides(), 2);
    assert_eq!(app.current_slide(), 1);
    assert_eq!(app.viewport().offset(), 10);
    assert!(app.presentation_enabled());
}

#[test]
fn growing_deck_extends_navigation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.toml");
    fs::write(&path, deck_toml(&["home"])).unwrap();

    let mut app = file_backed_app(path.clone());
    let now = Instant::now();
    apply_event(&mut app, press(KeyCode::Char('p')), now);
    assert!(!app.next_slide().moved());

    fs::write(&path, deck_toml(&["home", "plan"])).unwrap();
    apply_event(&mut app, press(KeyCode::Char('r')), now);
    assert!(app.next_slide().moved());
    assert_eq!(app.current_slide(), 1);
}

#[test]
fn broken_file_keeps_the_previous_deck() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deck.toml");
    fs::write(&path, deck_toml(&["home", "goals"])).unwrap();
    let mut app = file_backed_app(path.clone());
    let now = Instant::now();

    fs::write(&path, "title = [").unwrap();
    apply_event(&mut app, press(KeyCode::Char('r')), now);
    assert!(app.status().is_some_and(|s| s.starts_with("Reload failed")));
    assert_eq!(app.total_slides(), 2);

    fs::write(&path, deck_toml(&["home", "home"])).unwrap();
    apply_event(&mut app, press(KeyCode::Char('r')), now);
    let status = app.status().unwrap_or_default();
    assert!(status.contains("duplicate section id `home`"), "{status}");
    assert_eq!(app.total_slides(), 2);

    fs::remove_file(&path).unwrap();
    assert!(app.reload_deck().is_err());
    assert_eq!(app.total_slides(), 2);
}
