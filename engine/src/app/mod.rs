//! The `App` state: deck content, the deck pane and its navigator.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use kickoff_config::{DeckLoadError, KickoffConfig, ScrollRoot, load_deck};
use kickoff_core::{NavOutcome, PresentationNavigator, ScrollHost};
use kickoff_types::ui::UiOptions;
use kickoff_types::{Deck, InputEvent, Key, ScrollIntoView, SectionList};

use crate::viewport::{DeckViewport, TerminalRequest};

/// Rows taken by the header and footer bars.
pub const CHROME_ROWS: u16 = 2;

/// Lines moved by one wheel notch when native scrolling.
pub const WHEEL_LINES: i32 = 3;

const INITIAL_PANE_HEIGHT: u16 = 22;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub ui: UiOptions,
    pub wheel_cooldown: Duration,
    pub scroll_duration: Duration,
    pub scroll_root: ScrollRoot,
    pub start_in_presentation: bool,
    /// Deck file reloaded by [`App::reload_deck`]. `None` for the embedded deck.
    pub deck_path: Option<PathBuf>,
}

impl AppOptions {
    #[must_use]
    pub fn from_config(config: &KickoffConfig, deck_path: Option<PathBuf>) -> Self {
        let ui = UiOptions {
            ascii_only: config.app.ascii_only,
            high_contrast: config.app.high_contrast,
            reduced_motion: config.app.reduced_motion,
        };
        let scroll_duration = if ui.reduced_motion {
            Duration::ZERO
        } else {
            config.presentation.scroll_duration()
        };
        Self {
            ui,
            wheel_cooldown: config.presentation.wheel_cooldown(),
            scroll_duration,
            scroll_root: config.presentation.scroll_root,
            start_in_presentation: config.app.start_in_presentation,
            deck_path,
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&KickoffConfig::default(), None)
    }
}

/// A clickable cell rectangle, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Where the previous/next slide buttons were last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavButtons {
    pub prev: Option<ClickRegion>,
    pub next: Option<ClickRegion>,
}

#[derive(Debug)]
pub struct App {
    deck: Deck,
    deck_path: Option<PathBuf>,
    navigator: PresentationNavigator<DeckViewport>,
    ui_options: UiOptions,
    nav_buttons: NavButtons,
    status: Option<String>,
    should_quit: bool,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(deck: Deck, options: AppOptions) -> Self {
        let sections = deck.section_ids();
        let viewport =
            DeckViewport::new(sections.clone(), INITIAL_PANE_HEIGHT, options.scroll_duration);
        let container = match options.scroll_root {
            ScrollRoot::Container => Some(DeckViewport::container_scope()),
            ScrollRoot::Document => None,
        };
        let mut navigator = PresentationNavigator::new(sections, container, viewport)
            .with_wheel_cooldown(options.wheel_cooldown);
        if options.start_in_presentation {
            navigator.set_enabled(true);
        }

        tracing::info!(
            title = %deck.title,
            sections = deck.len(),
            scope = %navigator.scope(),
            "Deck opened"
        );

        Self {
            deck,
            deck_path: options.deck_path,
            navigator,
            ui_options: options.ui,
            nav_buttons: NavButtons::default(),
            status: None,
            should_quit: false,
            last_frame: Instant::now(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn viewport(&self) -> &DeckViewport {
        self.navigator.host()
    }

    fn viewport_mut(&mut self) -> &mut DeckViewport {
        self.navigator.host_mut()
    }

    #[must_use]
    pub fn navigator(&self) -> &PresentationNavigator<DeckViewport> {
        &self.navigator
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn presentation_enabled(&self) -> bool {
        self.navigator.enabled()
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.navigator.total()
    }

    /// Section at the top of the pane, for the header's location hint.
    #[must_use]
    pub fn visible_section(&self) -> Option<usize> {
        self.viewport().section_at_top()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_presentation(&mut self, enabled: bool) {
        self.navigator.set_enabled(enabled);
        if !enabled {
            self.nav_buttons = NavButtons::default();
        }
    }

    pub fn toggle_presentation(&mut self) {
        self.set_presentation(!self.presentation_enabled());
    }

    /// Esc: leave presentation mode, or quit when already out of it.
    pub fn escape(&mut self) {
        if self.presentation_enabled() {
            self.set_presentation(false);
        } else {
            self.request_quit();
        }
    }

    pub fn next_slide(&mut self) -> NavOutcome {
        self.navigator.next()
    }

    pub fn prev_slide(&mut self) -> NavOutcome {
        self.navigator.prev()
    }

    /// Routes a wheel notch. Falls back to native line scrolling when no
    /// listener prevented the default.
    pub fn handle_wheel(&mut self, delta_y: f64, now: Instant) -> NavOutcome {
        let mut event = InputEvent::wheel(delta_y);
        let outcome = self.dispatch(&mut event, now);
        if !event.default_prevented() {
            let lines = if delta_y > 0.0 {
                WHEEL_LINES
            } else if delta_y < 0.0 {
                -WHEEL_LINES
            } else {
                0
            };
            self.viewport_mut().scroll_by(lines);
        }
        outcome
    }

    pub fn handle_key(&mut self, key: Key, now: Instant) -> NavOutcome {
        let mut event = InputEvent::key(key);
        let outcome = self.dispatch(&mut event, now);
        if !event.default_prevented() {
            match key {
                Key::ArrowDown => {
                    self.viewport_mut().scroll_by(1);
                }
                Key::ArrowUp => {
                    self.viewport_mut().scroll_by(-1);
                }
                Key::Char(_) | Key::Other => {}
            }
        }
        outcome
    }

    fn dispatch(&mut self, event: &mut InputEvent, now: Instant) -> NavOutcome {
        if !self.viewport().has_listener(event.listener_kind()) {
            return NavOutcome::Ignored;
        }
        self.navigator.dispatch(event, now)
    }

    pub fn page_down(&mut self) -> bool {
        self.viewport_mut().page_down()
    }

    pub fn page_up(&mut self) -> bool {
        self.viewport_mut().page_up()
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.viewport_mut().scroll_to_top()
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.viewport_mut().scroll_to_bottom()
    }

    /// Follows the in-page link to section `index`.
    pub fn jump_to_section(&mut self, index: usize) -> bool {
        self.viewport_mut().scroll_to_section(index)
    }

    /// Follows the "next steps" link to the last section.
    pub fn jump_to_last_section(&mut self) -> bool {
        let last = self.navigator.sections().last_index();
        self.jump_to_section(last)
    }

    #[must_use]
    pub fn nav_buttons(&self) -> NavButtons {
        self.nav_buttons
    }

    pub fn set_nav_buttons(&mut self, buttons: NavButtons) {
        self.nav_buttons = buttons;
    }

    /// Handles a left click. Returns whether a control was hit.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        if !self.presentation_enabled() {
            return false;
        }
        let buttons = self.nav_buttons;
        if buttons.prev.is_some_and(|r| r.contains(column, row)) {
            self.prev_slide();
            true
        } else if buttons.next.is_some_and(|r| r.contains(column, row)) {
            self.next_slide();
            true
        } else {
            false
        }
    }

    /// Swaps in new deck content, keeping the slide index when possible.
    pub fn replace_deck(&mut self, deck: Deck) {
        let sections: SectionList = deck.section_ids();
        self.viewport_mut().set_sections(sections.clone());
        self.navigator.set_sections(sections);
        self.deck = deck;
    }

    /// Reloads the deck file. `Ok(false)` when running the embedded deck.
    pub fn reload_deck(&mut self) -> Result<bool, DeckLoadError> {
        let Some(path) = self.deck_path.clone() else {
            return Ok(false);
        };
        let deck = load_deck(&path)?;
        self.replace_deck(deck);
        Ok(true)
    }

    /// Reloads the deck and reports the result in the status line.
    pub fn reload_and_report(&mut self) {
        match self.reload_deck() {
            Ok(true) => {
                tracing::info!(sections = self.deck.len(), "Deck reloaded");
                let message = format!("Deck reloaded ({} sections)", self.deck.len());
                self.set_status(message);
            }
            Ok(false) => self.set_status("Built-in deck: nothing to reload"),
            Err(err) => {
                tracing::warn!(error = %err, "Deck reload failed");
                self.set_status(format!("Reload failed: {}", error_chain(&err)));
            }
        }
    }

    /// Applies a terminal resize. `height` is the full terminal height.
    pub fn resize(&mut self, height: u16) {
        let pane = height.saturating_sub(CHROME_ROWS);
        if pane == self.viewport().height() {
            return;
        }
        self.viewport_mut().resize(pane);
        if self.presentation_enabled() {
            let index = self.navigator.current_index();
            if let Some(id) = self.navigator.sections().get(index).cloned() {
                self.viewport_mut()
                    .scroll_into_view(&id, ScrollIntoView::INSTANT_START);
            }
        }
    }

    /// Advances animations to `now`.
    pub fn tick(&mut self, now: Instant) {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.viewport_mut().tick(delta);
    }

    pub fn take_terminal_requests(&mut self) -> Vec<TerminalRequest> {
        self.viewport_mut().take_requests()
    }
}

/// One-line rendering of an error and its causes for the status line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if let Some(first) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
            message.push_str(": ");
            message.push_str(first);
        }
        source = cause.source();
    }
    message
}
