//! Event handling and gesture transitions.
//!
//! [`handle_event`] is the gesture state machine. It consumes discrete input
//! messages, mutates the [`GestureSession`] and returns the side effects to
//! run. It performs no I/O and reads no clock: timing comes back in as
//! [`Event::TimerElapsed`].
//!
//! # Transitions
//!
//! - **`PressDown`**: reset, then arm a hold timer if gestures are enabled,
//!   the input is a primary press and it landed inside the card bounds
//! - **`Release`**: reset unless gestures are disabled. Releasing before the
//!   timer elapses is what makes a tap
//! - **`Click`**: reset unconditionally
//! - **`TimerElapsed`**: if the id is the pending timer, dispatch the hold
//!   action and return to idle
//! - **`StateUpdated`**: re-enable gestures, or disable and reset while the
//!   host shows a more-info dialog
//!
//! # Example
//!
//! ```rust
//! use long_press::app::{handle_event, Action, Event, GestureSession, PressInput};
//! use long_press::{CardConfig, Point, Rect};
//!
//! let config: CardConfig = serde_json::from_str(r#"{"child": {"type": "icon"}}"#)?;
//! let mut session = GestureSession::new();
//! let press = Event::PressDown {
//!     input: PressInput::Mouse { button: 0, position: Point::new(5.0, 5.0) },
//!     bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
//! };
//! let actions = handle_event(&mut session, &config, &press);
//! assert!(matches!(actions.last(), Some(Action::ArmTimer { .. })));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::actions::Action;
use super::dispatch::dispatch;
use super::modes::TimerId;
use super::state::GestureSession;
use crate::domain::{CardConfig, Point, Rect};
use std::time::Duration;

/// How long a press must be held before it counts as a long press.
pub const HOLD_DURATION: Duration = Duration::from_millis(300);

/// Primary mouse button as reported by `MouseEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

/// The input half of a press, unified over mouse and touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressInput {
    /// A mouse button went down at `position`.
    Mouse { button: i16, position: Point },

    /// A touch started. `first` is the first active touch point, if any.
    Touch { first: Option<Point> },
}

impl PressInput {
    /// Touches always qualify; mice only with the primary button.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        match self {
            Self::Mouse { button, .. } => *button == PRIMARY_BUTTON,
            Self::Touch { .. } => true,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Mouse { position, .. } => Some(*position),
            Self::Touch { first } => *first,
        }
    }

    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self, Self::Touch { .. })
    }
}

/// Discrete inputs to the gesture machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse-down or touch-start anywhere in the document.
    PressDown {
        input: PressInput,
        /// The card's bounding rectangle at press time.
        bounds: Rect,
    },

    /// Mouse-up or touch-end anywhere in the document.
    Release { touch: bool },

    /// A click anywhere in the document.
    Click,

    /// A previously armed timer ran out.
    TimerElapsed(TimerId),

    /// The host assigned new live state.
    StateUpdated {
        /// Whether a more-info dialog is open for any entity.
        more_info_open: bool,
    },
}

/// Processes an event, mutates the session and returns actions to execute.
///
/// The returned actions must be executed in order. A reset always precedes a
/// new arm, so the host never sees two live timers from one session.
pub fn handle_event(session: &mut GestureSession, config: &CardConfig, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PressDown { input, bounds } => press_down(session, input, bounds),
        Event::Release { touch } => {
            if !session.is_enabled() {
                tracing::debug!(touch = touch, "release ignored, gestures disabled");
                return vec![];
            }
            session.reset()
        }
        Event::Click => session.reset(),
        Event::TimerElapsed(id) => {
            if session.take_elapsed(*id) {
                tracing::debug!(timer = %id, "hold duration reached");
                dispatch(config)
            } else {
                tracing::debug!(timer = %id, "ignoring stale timer");
                vec![]
            }
        }
        Event::StateUpdated { more_info_open } => {
            session.set_enabled(!more_info_open);
            if *more_info_open {
                tracing::debug!("more-info dialog open, gestures disabled");
                session.reset()
            } else {
                vec![]
            }
        }
    }
}

fn press_down(session: &mut GestureSession, input: &PressInput, bounds: &Rect) -> Vec<Action> {
    let mut actions = session.reset();

    if !session.is_enabled() {
        tracing::debug!("press ignored, gestures disabled");
        return actions;
    }

    if !input.is_primary() {
        tracing::debug!(input = ?input, "press ignored, not a primary button");
        return actions;
    }

    let Some(position) = input.position().filter(|p| bounds.contains(*p)) else {
        tracing::debug!(input = ?input, bounds = ?bounds, "press outside card bounds");
        return actions;
    };

    tracing::debug!(x = position.x, y = position.y, touch = input.is_touch(), "press started");
    actions.push(session.arm(HOLD_DURATION));
    actions
}
