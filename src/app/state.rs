//! Gesture session state.
//!
//! [`GestureSession`] is the only mutable state of the gesture machine: the
//! enabled gate, the current [`GestureState`] and the timer id allocator. The
//! pending timer id inside `Pressing` is the sole marker of a press in
//! progress, so at most one timer can be live at a time.

use super::actions::Action;
use super::modes::{GestureState, TimerId};
use std::time::Duration;

/// Per-card gesture state.
#[derive(Debug, Clone)]
pub struct GestureSession {
    enabled: bool,
    state: GestureState,
    next_timer: u64,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureSession {
    /// Creates an enabled, idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: true,
            state: GestureState::Idle,
            next_timer: 1,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// The armed timer, if a press is in progress.
    #[must_use]
    pub const fn pending_timer(&self) -> Option<TimerId> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pressing { timer } => Some(timer),
        }
    }

    /// Returns the session to idle.
    ///
    /// Cancels the pending timer if there is one and always restores the
    /// overlay to hidden and the dialog to non-modal, whichever path asked
    /// for the reset.
    pub fn reset(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(3);

        if let GestureState::Pressing { timer } = self.state {
            tracing::debug!(%timer, "cancelling pending hold timer");
            actions.push(Action::CancelTimer { id: timer });
        }
        self.state = GestureState::Idle;

        actions.push(Action::SetDialogModal(false));
        actions.push(Action::SetOverlayVisible(false));
        actions
    }

    /// Arms a fresh hold timer and enters `Pressing`.
    ///
    /// Callers reset first; arming over a pending timer would leak it.
    pub fn arm(&mut self, delay: Duration) -> Action {
        debug_assert!(self.pending_timer().is_none(), "arming over a pending timer");

        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.state = GestureState::Pressing { timer: id };
        Action::ArmTimer { id, delay }
    }

    /// Consumes the pending timer if `id` is it.
    ///
    /// Returns `false` for stale or unknown ids, which must not dispatch.
    pub fn take_elapsed(&mut self, id: TimerId) -> bool {
        if self.pending_timer() == Some(id) {
            self.state = GestureState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_from_idle_only_restores_visuals() {
        let mut session = GestureSession::new();
        assert_eq!(
            session.reset(),
            vec![Action::SetDialogModal(false), Action::SetOverlayVisible(false)]
        );
    }

    #[test]
    fn reset_cancels_the_pending_timer() {
        let mut session = GestureSession::new();
        let Action::ArmTimer { id, .. } = session.arm(Duration::from_millis(300)) else {
            panic!("expected an arm action");
        };

        let actions = session.reset();
        assert_eq!(actions[0], Action::CancelTimer { id });
        assert_eq!(session.state(), GestureState::Idle);
    }

    #[test]
    fn timer_ids_are_never_reused() {
        let mut session = GestureSession::new();
        let first = session.arm(Duration::ZERO);
        session.reset();
        let second = session.arm(Duration::ZERO);
        assert_ne!(first, second);
    }

    #[test]
    fn only_the_pending_timer_elapses() {
        let mut session = GestureSession::new();
        session.arm(Duration::ZERO);
        let stale = session.pending_timer().unwrap();
        session.reset();
        session.arm(Duration::ZERO);
        let live = session.pending_timer().unwrap();

        assert!(!session.take_elapsed(stale));
        assert!(session.take_elapsed(live));
        assert!(!session.take_elapsed(live));
    }
}
