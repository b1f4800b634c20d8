// SPDX-License-Identifier: MPL-2.0
//! Temporary "Copied!" confirmation on the copy button.

use std::time::{Duration, Instant};

/// How long the confirmation label stays up after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    shown_at: Option<Instant>,
}

impl CopyFeedback {
    /// Starts (or restarts) the confirmation window.
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Whether the confirmation label should be displayed at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_FEEDBACK_DURATION)
    }

    /// Reverts the label once the window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.shown_at = None;
        }
    }

    /// Whether a timer still needs to run.
    pub fn is_pending(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn reset(&mut self) {
        self.shown_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        let feedback = CopyFeedback::default();
        assert!(!feedback.is_active(Instant::now()));
        assert!(!feedback.is_pending());
    }

    #[test]
    fn reverts_after_fixed_delay() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.show(start);

        assert!(feedback.is_active(start + Duration::from_millis(1999)));
        feedback.tick(start + Duration::from_millis(1999));
        assert!(feedback.is_pending());

        feedback.tick(start + COPY_FEEDBACK_DURATION);
        assert!(!feedback.is_active(start + COPY_FEEDBACK_DURATION));
        assert!(!feedback.is_pending());
    }

    #[test]
    fn second_copy_restarts_window() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.show(start);
        feedback.show(start + Duration::from_millis(1500));

        assert!(feedback.is_active(start + Duration::from_millis(3000)));
        assert!(!feedback.is_active(start + Duration::from_millis(3500)));
    }
}
