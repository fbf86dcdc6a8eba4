//! Gesture layer: the long-press state machine and its action model.
//!
//! This layer sits between the card runtime and the domain types. It is pure:
//! events in, actions out.
//!
//! ```text
//! Document input → Event → handle_event → session transition → Actions → Card runtime
//!                    ↑                                                      │
//!                    └──────────────── TimerElapsed ────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and host notifications
//! - [`dispatch`]: Effects of a completed long press
//! - [`handler`]: Event processing and transitions
//! - [`modes`]: Gesture states and timer ids
//! - [`state`]: The mutable gesture session

pub mod actions;
pub mod dispatch;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, EventInit, HostEvent};
pub use dispatch::dispatch;
pub use handler::{handle_event, Event, PressInput, HOLD_DURATION, PRIMARY_BUTTON};
pub use modes::{GestureState, TimerId};
pub use state::GestureSession;
