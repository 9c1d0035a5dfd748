//! Application state for Kickoff.
//!
//! This crate contains the [`App`] state without TUI dependencies. The TUI
//! layer (`kickoff_tui`) reads state from `App` and forwards input back to it.
//! No rendering logic lives in this crate.

mod app;
mod viewport;

pub use app::{App, AppOptions, ClickRegion, NavButtons, CHROME_ROWS, WHEEL_LINES};
pub use viewport::{DECK_CONTAINER, DeckViewport, TerminalRequest};

pub use kickoff_config::{self as config, KickoffConfig};
pub use kickoff_core::{NavOutcome, PresentationNavigator};
pub use kickoff_types::{Deck, InputEvent, Key, SectionList, ui::UiOptions};
