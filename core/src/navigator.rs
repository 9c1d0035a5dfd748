//! Slide-mode navigator.

use std::mem;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use kickoff_types::{
    InputEvent, InputKind, Key, ListenerKind, ListenerTarget, Overflow, ScrollIntoView,
    ScrollScope, SectionList,
};

use crate::host::{ListenerRegistration, OverflowGuard, ScrollHost};
use crate::lock::InputLock;

/// Window during which further wheel steps are discarded after one step.
pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(700);

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The current index changed.
    Moved { from: usize, to: usize },
    /// Already at the first/last section, or there are no sections.
    AtBoundary,
    /// A wheel event arrived during the cooldown and was discarded.
    Debounced,
    /// No listener wanted the event (inactive navigator, unrelated key,
    /// wheel without vertical movement).
    Ignored,
}

impl NavOutcome {
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Resources held while slide mode is on.
#[derive(Debug)]
struct ActiveSession {
    overflow: OverflowGuard,
    wheel: ListenerRegistration,
    keys: ListenerRegistration,
    wheel_lock: InputLock,
}

impl ActiveSession {
    fn release<H: ScrollHost + ?Sized>(self, host: &mut H) {
        self.wheel.release(host);
        self.keys.release(host);
        self.overflow.release(host);
    }
}

#[derive(Debug)]
enum Mode {
    Inactive,
    Active(ActiveSession),
}

/// Single-active-index controller over an ordered list of sections.
///
/// While enabled the navigator suppresses native scrolling on its scope,
/// listens for wheel and arrow-key input, and asks the host to bring the
/// current section into view whenever the index changes. Disabling (or
/// dropping) the navigator detaches the listeners and restores the overflow
/// value that was present when slide mode was entered.
#[derive(Debug)]
pub struct PresentationNavigator<H: ScrollHost> {
    host: H,
    sections: SectionList,
    scope: ScrollScope,
    index: usize,
    mode: Mode,
    wheel_cooldown: Duration,
}

impl<H: ScrollHost> PresentationNavigator<H> {
    /// Creates an inactive navigator at index 0.
    ///
    /// `container` selects the scroll scope; `None` controls the document
    /// scroll root.
    pub fn new(sections: SectionList, container: Option<ScrollScope>, host: H) -> Self {
        Self {
            host,
            sections,
            scope: container.unwrap_or(ScrollScope::Document),
            index: 0,
            mode: Mode::Inactive,
            wheel_cooldown: WHEEL_COOLDOWN,
        }
    }

    #[must_use]
    pub fn with_wheel_cooldown(mut self, cooldown: Duration) -> Self {
        self.wheel_cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        matches!(self.mode, Mode::Active(_))
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    #[must_use]
    pub fn scope(&self) -> &ScrollScope {
        &self.scope
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Expiry of the wheel cooldown, if slide mode is on and a step was taken.
    #[must_use]
    pub fn wheel_locked_until(&self) -> Option<Instant> {
        match &self.mode {
            Mode::Active(session) => session.wheel_lock.locked_until(),
            Mode::Inactive => None,
        }
    }

    /// Turns slide mode on or off. Redundant calls do nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    pub fn next(&mut self) -> NavOutcome {
        self.step(Direction::Forward)
    }

    pub fn prev(&mut self) -> NavOutcome {
        self.step(Direction::Backward)
    }

    /// Replaces the section list, clamping the index into the new bounds.
    pub fn set_sections(&mut self, sections: SectionList) {
        let changed = sections.key() != self.sections.key();
        self.sections = sections;

        let clamped = self.index.min(self.sections.last_index());
        if clamped != self.index {
            debug!(
                from = self.index,
                to = clamped,
                total = self.sections.len(),
                "Section list shrank, clamping index"
            );
            self.index = clamped;
        }

        if changed {
            self.sync_scroll();
        }
    }

    /// Delivers a host input event to the navigator's listeners.
    ///
    /// Only events for which a listener is attached are acted upon; while
    /// inactive every event is ignored and left untouched.
    pub fn dispatch(&mut self, event: &mut InputEvent, now: Instant) -> NavOutcome {
        let Mode::Active(session) = &mut self.mode else {
            return NavOutcome::Ignored;
        };

        match event.kind() {
            InputKind::Wheel { delta_y } => {
                event.prevent_default();
                if !session.wheel_lock.try_acquire(now) {
                    debug!(delta_y, "Wheel event discarded during cooldown");
                    return NavOutcome::Debounced;
                }
                if delta_y > 0.0 {
                    self.next()
                } else if delta_y < 0.0 {
                    self.prev()
                } else {
                    NavOutcome::Ignored
                }
            }
            InputKind::KeyDown(Key::ArrowDown) => self.next(),
            InputKind::KeyDown(Key::ArrowUp) => self.prev(),
            InputKind::KeyDown(_) => NavOutcome::Ignored,
        }
    }

    /// Releases everything slide mode acquired. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.deactivate();
    }

    fn activate(&mut self) {
        if self.enabled() {
            return;
        }

        let overflow = OverflowGuard::acquire(&mut self.host, self.scope.clone(), Overflow::Hidden);
        let wheel_target = match &self.scope {
            ScrollScope::Document => ListenerTarget::Window,
            container @ ScrollScope::Container(_) => ListenerTarget::Scope(container.clone()),
        };
        let wheel = ListenerRegistration::attach(&mut self.host, wheel_target, ListenerKind::Wheel);
        let keys =
            ListenerRegistration::attach(&mut self.host, ListenerTarget::Window, ListenerKind::KeyDown);

        self.mode = Mode::Active(ActiveSession {
            overflow,
            wheel,
            keys,
            wheel_lock: InputLock::new(self.wheel_cooldown),
        });
        info!(
            scope = %self.scope,
            index = self.index,
            total = self.sections.len(),
            "Presentation mode enabled"
        );

        self.sync_scroll();
    }

    fn deactivate(&mut self) {
        if let Mode::Active(session) = mem::replace(&mut self.mode, Mode::Inactive) {
            session.release(&mut self.host);
            info!(scope = %self.scope, index = self.index, "Presentation mode disabled");
        }
    }

    fn step(&mut self, direction: Direction) -> NavOutcome {
        let from = self.index;
        let to = match direction {
            Direction::Forward if from < self.sections.last_index() => from + 1,
            Direction::Backward if from > 0 => from - 1,
            _ => return NavOutcome::AtBoundary,
        };

        self.index = to;
        debug!(from, to, ?direction, "Slide changed");
        self.sync_scroll();
        NavOutcome::Moved { from, to }
    }

    fn sync_scroll(&mut self) {
        if !self.enabled() {
            return;
        }
        let Some(id) = self.sections.get(self.index) else {
            return;
        };
        if !self.host.scroll_into_view(id, ScrollIntoView::SMOOTH_START) {
            debug!(section = %id, "Section not rendered, skipping scroll");
        }
    }
}

impl<H: ScrollHost> Drop for PresentationNavigator<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
