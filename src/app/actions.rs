//! Actions representing side effects to be executed by the card runtime.
//!
//! The gesture handler never touches the host directly. It returns a
//! `Vec<Action>` per event and the card executes them in order against the
//! injected host, overlay and dialog.
//!
//! # Example
//!
//! ```rust
//! use long_press::app::{Action, HostEvent};
//!
//! let actions = vec![
//!     Action::Navigate { path: "/lovelace/0".into() },
//!     Action::FireEvent(HostEvent::LocationChanged),
//! ];
//! assert_eq!(actions[1].to_string(), "fire location-changed");
//! ```

use crate::app::modes::TimerId;
use crate::domain::ServiceCall;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Propagation flags of a notification dispatched to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
    pub composed: bool,
}

/// Notifications the card emits towards the host.
///
/// Both notifications bubble, cross shadow boundaries and cannot be cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostEvent {
    /// The browsing location was pushed; the host should re-route.
    #[serde(rename = "location-changed")]
    LocationChanged,

    /// The host should open its more-info dialog for `entity_id`.
    #[serde(rename = "hass-more-info")]
    MoreInfo {
        #[serde(rename = "entityId")]
        entity_id: Option<String>,
    },
}

impl HostEvent {
    const INIT: EventInit = EventInit {
        bubbles: true,
        cancelable: false,
        composed: true,
    };

    /// Event type name as the host listens for it.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LocationChanged => "location-changed",
            Self::MoreInfo { .. } => "hass-more-info",
        }
    }

    #[must_use]
    pub const fn init(&self) -> EventInit {
        Self::INIT
    }

    /// Event detail payload, `None` for notifications without one.
    #[must_use]
    pub fn detail(&self) -> Option<Value> {
        match self {
            Self::LocationChanged => None,
            Self::MoreInfo { entity_id } => Some(serde_json::json!({ "entityId": entity_id })),
        }
    }
}

/// Commands produced by the gesture handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Schedule a single-shot timer that reports back as `TimerElapsed(id)`.
    ArmTimer { id: TimerId, delay: Duration },

    /// Cancel a pending timer. After this the host must not deliver it.
    CancelTimer { id: TimerId },

    /// Show or hide the in-flight overlay cover.
    SetOverlayVisible(bool),

    /// Set or clear the `modal` flag of the host's more-info dialog.
    SetDialogModal(bool),

    /// Push a new browsing location without reloading.
    Navigate { path: String },

    /// Dispatch a notification from the card element.
    FireEvent(HostEvent),

    /// Invoke a host service, fire-and-forget.
    CallService(ServiceCall),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArmTimer { id, delay } => write!(f, "arm {id} ({}ms)", delay.as_millis()),
            Self::CancelTimer { id } => write!(f, "cancel {id}"),
            Self::SetOverlayVisible(visible) => write!(f, "overlay visible={visible}"),
            Self::SetDialogModal(modal) => write!(f, "dialog modal={modal}"),
            Self::Navigate { path } => write!(f, "navigate {path}"),
            Self::FireEvent(event) => write!(f, "fire {}", event.name()),
            Self::CallService(call) => write!(f, "call {}.{}", call.domain, call.service),
        }
    }
}
