//! Long-press: a dashboard card wrapper that tells a long press from a tap.
//!
//! The card renders one child element and listens to pointer and touch input
//! on the whole document. A primary press held inside the card for 300ms
//! triggers exactly one configured action:
//!
//! - navigate to `navigation_path`
//! - call `service` with `service_data`
//! - otherwise open the more-info dialog for `entity` (or `child.entity`)
//!
//! A release, a click anywhere, or an open more-info dialog cancels the press.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs: scenario simulator)            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Card component (card/)                             │  ← Owns child, overlay, session
//! │  - Executes actions against Host / MoreInfoDialog   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gesture layer │   │ Input (input/)│   │ Elements      │
//! │ (app/)        │   │ - 5 document  │   │ (elements/)   │
//! │ - transitions │   │   listeners   │   │ - registry    │
//! │ - dispatch    │   │ - touch/mouse │   │ - built-ins   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and render tree (ui/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/): virtual-time host              │
//! │  Observability (observability/): span export        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Gesture state machine with event/action model
//! - [`card`]: The card component and its host-facing traits
//! - [`domain`]: Configuration, geometry, live state, errors
//! - [`elements`]: Wrapped child elements and their registry
//! - [`input`]: Document listener events
//! - [`ui`]: Render tree and overlay cover
//! - [`runtime`]: Deterministic virtual-time host and scenarios
//! - [`observability`]: Tracing setup and span export
//!
//! # Example
//!
//! ```rust
//! use long_press::runtime::Simulation;
//! use long_press::input::DomEvent;
//! use long_press::{CardConfig, Rect};
//! use std::time::Duration;
//!
//! let config = CardConfig::from_json_str(r#"{
//!     "child": {"type": "state-label", "entity": "light.kitchen"},
//!     "service": "light.turn_on",
//!     "service_data": {"entity_id": "light.kitchen"}
//! }"#)?;
//! let mut sim = Simulation::new(config, Rect::new(0.0, 0.0, 100.0, 40.0), true)?;
//!
//! sim.document_event(&DomEvent::MouseDown { button: 0, client_x: 10.0, client_y: 10.0 });
//! sim.advance_by(Duration::from_millis(300));
//! assert!(sim.card().overlay().is_visible());
//! # Ok::<(), long_press::LongPressError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod card;
pub mod domain;
pub mod elements;
pub mod input;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, Event, GestureSession, GestureState, HostEvent, TimerId};
pub use card::{Host, LongPressCard, MoreInfoDialog};
pub use domain::{
    CardConfig, ChildConfig, EntityState, HassState, HoldAction, LongPressError, Point, Rect,
    Result, ServiceCall,
};
pub use elements::{Element, ElementRegistry};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Runtime settings supplied by the embedding host as a string map.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use long_press::Settings;
///
/// let mut map = BTreeMap::new();
/// map.insert("trace_level".to_string(), "debug".to_string());
///
/// let settings = Settings::from_map(&map);
/// assert_eq!(settings.trace_level.as_deref(), Some("debug"));
/// assert!(settings.trace_file.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Tracing filter directive, e.g. `info` or `long_press=debug`.
    pub trace_level: Option<String>,

    /// File to export spans to. Span export is off when unset.
    pub trace_file: Option<PathBuf>,
}

impl Settings {
    /// Parses settings from a host configuration map. Unknown keys and empty
    /// values are ignored.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };

        Self {
            trace_level: non_empty("trace_level"),
            trace_file: non_empty("trace_file").map(PathBuf::from),
        }
    }
}

/// Builds a card with the built-in element registry.
///
/// # Errors
///
/// Propagates child construction failures (unknown element, rejected child
/// configuration).
pub fn initialize<H: Host>(
    config: CardConfig,
    host: H,
    dialog: Option<Box<dyn MoreInfoDialog>>,
) -> Result<LongPressCard<H>> {
    tracing::debug!(child_type = %config.child.kind, "initializing long-press card");
    LongPressCard::new(config, &ElementRegistry::default(), host, dialog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_ignore_blank_values() {
        let map: BTreeMap<String, String> = [
            ("trace_level".to_string(), "  ".to_string()),
            ("trace_file".to_string(), "/tmp/long-press.json".to_string()),
            ("unrelated".to_string(), "x".to_string()),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_map(&map);
        assert_eq!(settings.trace_level, None);
        assert_eq!(settings.trace_file, Some(PathBuf::from("/tmp/long-press.json")));
    }
}
