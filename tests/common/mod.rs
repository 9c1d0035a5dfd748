//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use kickoff_engine::config::parse_deck;
use kickoff_engine::{App, AppOptions, Deck};
use kickoff_types::{Section, SectionId};

/// The deck shipped with the binary.
pub const BUILTIN_DECK: &str = include_str!("../../cli/assets/deck.toml");

/// Terminal height used by most scenarios: a 10-row deck pane.
pub const TERM_HEIGHT: u16 = 12;

pub fn builtin_deck() -> Deck {
    parse_deck(BUILTIN_DECK).expect("built-in deck parses")
}

/// A bare deck with one empty section per id.
pub fn deck_of(ids: &[&str]) -> Deck {
    Deck {
        title: "Fixture".into(),
        sections: ids
            .iter()
            .map(|id| Section {
                id: SectionId::new(*id).expect("valid id"),
                eyebrow: String::new(),
                title: id.to_uppercase(),
                subtitle: None,
                cards: Vec::new(),
                team: Vec::new(),
            })
            .collect(),
    }
}

/// Options with instant scrolling so offsets settle without ticking.
pub fn instant_options() -> AppOptions {
    AppOptions {
        scroll_duration: Duration::ZERO,
        ..AppOptions::default()
    }
}

pub fn app_with(deck: Deck, options: AppOptions) -> App {
    let mut app = App::new(deck, options);
    app.resize(TERM_HEIGHT);
    app
}

pub fn builtin_app() -> App {
    app_with(builtin_deck(), instant_options())
}

/// App bound to a deck file so reloads have something to read.
pub fn file_backed_app(path: PathBuf) -> App {
    let deck = kickoff_engine::config::load_deck(&path).expect("fixture deck loads");
    app_with(
        deck,
        AppOptions {
            deck_path: Some(path),
            ..instant_options()
        },
    )
}

/// Deck TOML with one section per id.
pub fn deck_toml(ids: &[&str]) -> String {
    let mut out = String::from("title = \"Fixture\"\n");
    for id in ids {
        out.push_str(&format!("\n[[sections]]\nid = \"{id}\"\ntitle = \"{id}\"\n"));
    }
    out
}
