//! Presentation-mode navigation for Kickoff.
//!
//! [`PresentationNavigator`] turns an ordered list of section ids into a
//! single-active-index slide model. It talks to the view that shows the
//! sections only through the [`ScrollHost`] trait, so the same state machine
//! drives the terminal deck and the test doubles.
//!
//! ```text
//!            set_enabled(true)
//!   Inactive ------------------> Active { overflow guard, listeners, wheel lock }
//!            <------------------
//!            set_enabled(false) / drop
//! ```

mod host;
mod lock;
mod navigator;

pub use host::{ListenerRegistration, OverflowGuard, ScrollHost};
pub use lock::InputLock;
pub use navigator::{NavOutcome, PresentationNavigator, WHEEL_COOLDOWN};
