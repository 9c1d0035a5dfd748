//! Scroll state for the deck pane.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_out_cubic};

/// An in-flight smooth scroll between two line offsets.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: u32,
    to: u32,
    timer: EffectTimer,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: u32, to: u32, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.to
    }

    /// Offset to display at the current point of the animation.
    #[must_use]
    pub fn offset(&self) -> u32 {
        let t = f64::from(ease_out_cubic(self.timer.progress()));
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * t).round() as u32
    }
}
