//! Time-boxed input lock.

use std::time::{Duration, Instant};

/// Suppresses repeated triggers until a cooldown elapses.
///
/// The lock holds an expiry instant instead of a flag cleared by a timer, so
/// callers drive it with whatever clock they have (the frame loop's
/// `Instant::now()`, or a synthetic instant in tests).
#[derive(Debug, Clone)]
pub struct InputLock {
    cooldown: Duration,
    locked_until: Option<Instant>,
}

impl InputLock {
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            locked_until: None,
        }
    }

    #[must_use]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    #[must_use]
    pub fn locked_until(&self) -> Option<Instant> {
        self.locked_until
    }

    /// Takes the lock if it is free at `now`. Returns `false` while cooling down.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if self.is_locked(now) {
            return false;
        }
        self.locked_until = Some(now.checked_add(self.cooldown).unwrap_or(now));
        true
    }
}
