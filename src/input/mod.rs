//! Document-level input listener.
//!
//! The card listens on the whole document rather than on its own element so
//! that a down/up pair is always seen together and clicks elsewhere still
//! reset a pending press. Five event types are subscribed for the card's
//! entire lifetime; the listener never detaches.
//!
//! Mouse and touch variants collapse into one call each, parameterized by
//! whether the event was a touch:
//!
//! | Document event | Listener call                |
//! |----------------|------------------------------|
//! | `mousedown`    | `Press(Mouse { button, .. })`|
//! | `touchstart`   | `Press(Touch { first })`     |
//! | `mouseup`      | `Release { touch: false }`   |
//! | `touchend`     | `Release { touch: true }`    |
//! | `click`        | `Click`                      |

use crate::app::PressInput;
use crate::domain::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document event types the card subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventType {
    MouseDown,
    TouchStart,
    MouseUp,
    TouchEnd,
    Click,
}

impl DomEventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::MouseUp => "mouseup",
            Self::TouchEnd => "touchend",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for DomEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every document listener registered at card initialization.
pub const SUBSCRIPTIONS: [DomEventType; 5] = [
    DomEventType::MouseDown,
    DomEventType::TouchStart,
    DomEventType::MouseUp,
    DomEventType::TouchEnd,
    DomEventType::Click,
];

/// One active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    #[serde(rename = "clientX")]
    pub client_x: f64,
    #[serde(rename = "clientY")]
    pub client_y: f64,
}

impl From<TouchPoint> for Point {
    fn from(touch: TouchPoint) -> Self {
        Self::new(touch.client_x, touch.client_y)
    }
}

/// A document event as delivered to the card's listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DomEvent {
    MouseDown {
        #[serde(default)]
        button: i16,
        #[serde(rename = "clientX")]
        client_x: f64,
        #[serde(rename = "clientY")]
        client_y: f64,
    },
    TouchStart {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    MouseUp {
        #[serde(default)]
        button: i16,
    },
    TouchEnd,
    Click,
}

/// The unified handler a document event is routed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListenerCall {
    Press(PressInput),
    Release { touch: bool },
    Click,
}

impl DomEvent {
    #[must_use]
    pub const fn event_type(&self) -> DomEventType {
        match self {
            Self::MouseDown { .. } => DomEventType::MouseDown,
            Self::TouchStart { .. } => DomEventType::TouchStart,
            Self::MouseUp { .. } => DomEventType::MouseUp,
            Self::TouchEnd => DomEventType::TouchEnd,
            Self::Click => DomEventType::Click,
        }
    }

    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self, Self::TouchStart { .. } | Self::TouchEnd)
    }

    /// Routes the event to its listener call.
    ///
    /// Touch coordinates come from the first active touch point; mouse
    /// coordinates come from the event itself.
    #[must_use]
    pub fn listener_call(&self) -> ListenerCall {
        match self {
            Self::MouseDown {
                button,
                client_x,
                client_y,
            } => ListenerCall::Press(PressInput::Mouse {
                button: *button,
                position: Point::new(*client_x, *client_y),
            }),
            Self::TouchStart { touches } => ListenerCall::Press(PressInput::Touch {
                first: touches.first().copied().map(Point::from),
            }),
            Self::MouseUp { .. } | Self::TouchEnd => ListenerCall::Release {
                touch: self.is_touch(),
            },
            Self::Click => ListenerCall::Click,
        }
    }
}
