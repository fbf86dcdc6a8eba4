//! Gesture state types.
//!
//! The gesture machine has two resting states. A press that survives the hold
//! duration fires its dispatch on the way back to [`GestureState::Idle`], so
//! "fired" is a transition rather than a state the card can be observed in.
//!
//! ```text
//!            press inside bounds
//!   Idle ───────────────────────▶ Pressing { timer }
//!    ▲                               │
//!    │   release / click / reset     │
//!    ├───────────────────────────────┤
//!    │                               │ timer elapsed
//!    └──────────── dispatch ◀────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one armed long-press timer.
///
/// Ids are allocated by the gesture session and never reused, so a host that
/// delivers an elapse for an id that is no longer pending can be recognized
/// and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Current position of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No press in progress.
    #[default]
    Idle,

    /// A press landed inside the card and its hold timer is armed.
    Pressing {
        /// The single pending timer.
        timer: TimerId,
    },
}
