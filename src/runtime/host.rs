//! Virtual-time host.
//!
//! [`SimulatedHost`] implements [`Host`] on a single-threaded virtual clock.
//! Timers live in an ordered queue and only run when the driver advances time,
//! which makes gesture timing fully deterministic. Every host-visible effect is
//! appended to a shared log, stamped with the virtual time it happened at.

use crate::app::{EventInit, HostEvent, TimerId};
use crate::card::{Host, MoreInfoDialog};
use crate::domain::{Rect, ServiceCall};
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// A host-visible side effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    TimerSet { id: TimerId, delay_ms: u64 },
    TimerCleared { id: TimerId },
    TimerFired { id: TimerId },
    PushState { path: String },
    Event {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<Value>,
        bubbles: bool,
        cancelable: bool,
        composed: bool,
    },
    ServiceCall(ServiceCall),
    DialogModal { modal: bool },
}

/// An effect and the virtual time it occurred at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectRecord {
    pub at_ms: u64,
    #[serde(flatten)]
    pub effect: Effect,
}

/// State shared between the host, the dialog and the driver.
#[derive(Debug, Default)]
pub(crate) struct Shared {
    pub now: Duration,
    pub effects: Vec<EffectRecord>,
    pub modal: bool,
}

impl Shared {
    pub fn record(&mut self, effect: Effect) {
        let at_ms = super::millis(self.now);
        self.effects.push(EffectRecord { at_ms, effect });
    }
}

/// A [`Host`] running on virtual time.
#[derive(Debug)]
pub struct SimulatedHost {
    shared: Rc<RefCell<Shared>>,
    bounds: Rect,
    timers: BTreeMap<TimerId, Duration>,
    history: Vec<String>,
}

impl SimulatedHost {
    pub(crate) fn new(shared: Rc<RefCell<Shared>>, bounds: Rect) -> Self {
        Self {
            shared,
            bounds,
            timers: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Moves the card on screen.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Number of timers armed and not yet fired or cleared.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Locations pushed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Removes and returns the earliest timer due at or before `until`.
    ///
    /// Ties are broken by arming order.
    pub(crate) fn pop_due(&mut self, until: Duration) -> Option<(Duration, TimerId)> {
        let (id, due) = self
            .timers
            .iter()
            .filter(|(_, due)| **due <= until)
            .min_by_key(|(id, due)| (**due, **id))
            .map(|(id, due)| (*id, *due))?;
        self.timers.remove(&id);
        Some((due, id))
    }
}

impl Host for SimulatedHost {
    fn set_timeout(&mut self, id: TimerId, delay: Duration) {
        let mut shared = self.shared.borrow_mut();
        self.timers.insert(id, shared.now + delay);
        shared.record(Effect::TimerSet {
            id,
            delay_ms: super::millis(delay),
        });
    }

    fn clear_timeout(&mut self, id: TimerId) {
        if self.timers.remove(&id).is_some() {
            self.shared.borrow_mut().record(Effect::TimerCleared { id });
        }
    }

    fn bounding_rect(&self) -> Rect {
        self.bounds
    }

    fn push_state(&mut self, path: &str) {
        self.history.push(path.to_string());
        self.shared.borrow_mut().record(Effect::PushState {
            path: path.to_string(),
        });
    }

    fn dispatch_event(&mut self, event: &HostEvent) {
        let EventInit {
            bubbles,
            cancelable,
            composed,
        } = event.init();
        self.shared.borrow_mut().record(Effect::Event {
            name: event.name().to_string(),
            detail: event.detail(),
            bubbles,
            cancelable,
            composed,
        });
    }

    fn call_service(&mut self, call: &ServiceCall) {
        self.shared
            .borrow_mut()
            .record(Effect::ServiceCall(call.clone()));
    }
}

/// The page's more-info dialog, recording modal changes.
#[derive(Debug)]
pub struct SimulatedDialog {
    shared: Rc<RefCell<Shared>>,
}

impl SimulatedDialog {
    pub(crate) fn new(shared: Rc<RefCell<Shared>>) -> Self {
        Self { shared }
    }
}

impl MoreInfoDialog for SimulatedDialog {
    fn set_modal(&mut self, modal: bool) {
        let mut shared = self.shared.borrow_mut();
        if shared.modal != modal {
            shared.modal = modal;
            shared.record(Effect::DialogModal { modal });
        }
    }
}
