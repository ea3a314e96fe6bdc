use std::collections::HashSet;

use crate::wheel_config::Slice;

/// Per-viewer bookkeeping for one sitting with a wheel. Lives from widget
/// mount to unmount (or an explicit restart) and is never persisted or
/// written back into the configuration document.
#[derive(Debug, Clone, Default)]
pub struct SpinSession {
    shown_ids: HashSet<String>,
    initial_ids: HashSet<String>,
    initial_eligible: usize,
    primed: bool,
    cumulative_rotation: f64,
}

impl SpinSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes the session denominator. Called once, when the first spin of
    /// the session begins; later edits to the slice list do not move it.
    pub fn prime(&mut self, slices: &[Slice]) {
        if self.primed {
            return;
        }
        self.initial_ids = slices.iter().map(|s| s.id.clone()).collect();
        self.initial_eligible = slices.len();
        self.primed = true;
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn mark_shown(&mut self, id: &str) {
        self.shown_ids.insert(id.to_string());
    }

    pub fn shown_ids(&self) -> &HashSet<String> {
        &self.shown_ids
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown_ids.contains(id)
    }

    pub fn is_eligible(&self, slice: &Slice, allow_repeats: bool) -> bool {
        allow_repeats || !self.is_shown(&slice.id)
    }

    /// How many of the slices present at session start have not been shown
    /// yet. Counted against the frozen id snapshot, so slices added or
    /// removed mid-session do not skew the "N remaining" display.
    pub fn remaining_count(&self) -> usize {
        let shown_of_initial = self
            .shown_ids
            .iter()
            .filter(|id| self.initial_ids.contains(*id))
            .count();
        self.initial_eligible.saturating_sub(shown_of_initial)
    }

    pub fn initial_eligible(&self) -> usize {
        self.initial_eligible
    }

    pub fn cumulative_rotation(&self) -> f64 {
        self.cumulative_rotation
    }

    /// Commits the rotation a finished spin ended on. Rotation only ever
    /// moves forward within a session.
    pub fn advance_rotation(&mut self, target: f64) {
        if target > self.cumulative_rotation {
            self.cumulative_rotation = target;
        }
    }

    /// Wipes the session and re-freezes the denominator from the current
    /// slice list. Calling this twice in a row is the same as calling it
    /// once.
    pub fn restart(&mut self, slices: &[Slice]) {
        self.shown_ids.clear();
        self.initial_ids = slices.iter().map(|s| s.id.clone()).collect();
        self.initial_eligible = slices.len();
        self.primed = true;
        self.cumulative_rotation = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_config::default_settings;

    #[test]
    fn test_prime_freezes_denominator() {
        let settings = default_settings(None);
        let mut session = SpinSession::new();
        session.prime(&settings.slices);
        assert_eq!(session.remaining_count(), 6);
        assert_eq!(session.initial_eligible(), 6);

        // A second prime is a no-op even if the list shrank.
        session.prime(&settings.slices[..2].to_vec());
        assert_eq!(session.initial_eligible(), 6);
    }

    #[test]
    fn test_mark_shown_and_eligibility() {
        let settings = default_settings(None);
        let mut session = SpinSession::new();
        session.prime(&settings.slices);

        let first = &settings.slices[0];
        assert!(session.is_eligible(first, false));
        session.mark_shown(&first.id);
        assert!(!session.is_eligible(first, false));
        assert!(session.is_eligible(first, true));
        assert_eq!(session.remaining_count(), 5);

        // Marking the same slice twice does not double-count.
        session.mark_shown(&first.id);
        assert_eq!(session.remaining_count(), 5);
    }

    #[test]
    fn test_remaining_ignores_slices_added_after_priming() {
        let mut settings = default_settings(None);
        let mut session = SpinSession::new();
        session.prime(&settings.slices);

        let mut added = settings.slices[0].clone();
        added.id = "added".into();
        settings.slices.push(added);
        session.mark_shown("added");
        assert_eq!(session.remaining_count(), 6);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let settings = default_settings(None);
        let mut session = SpinSession::new();
        session.prime(&settings.slices);
        session.mark_shown(&settings.slices[0].id);
        session.advance_rotation(2880.0);

        session.restart(&settings.slices);
        let once = session.clone();
        session.restart(&settings.slices);

        assert_eq!(session.remaining_count(), once.remaining_count());
        assert_eq!(session.initial_eligible(), once.initial_eligible());
        assert!(session.shown_ids().is_empty());
        assert_eq!(session.cumulative_rotation(), 0.0);
    }

    #[test]
    fn test_rotation_never_moves_backward() {
        let mut session = SpinSession::new();
        session.advance_rotation(2520.0);
        session.advance_rotation(1000.0);
        assert_eq!(session.cumulative_rotation(), 2520.0);
        session.advance_rotation(5000.0);
        assert_eq!(session.cumulative_rotation(), 5000.0);
    }
}
