//! Deterministic single-threaded runtime for driving a card.
//!
//! [`Simulation`] wires a [`LongPressCard`] to a [`SimulatedHost`] and a
//! [`SimulatedDialog`] sharing one virtual clock. Time only moves when the
//! driver advances it; due timers fire in order on the way.
//!
//! # Example
//!
//! ```rust
//! use long_press::runtime::Simulation;
//! use long_press::input::DomEvent;
//! use long_press::{CardConfig, Rect};
//! use std::time::Duration;
//!
//! let config = CardConfig::from_json_str(
//!     r#"{"child": {"type": "icon", "icon": "mdi:home"}, "navigation_path": "/lovelace/0"}"#,
//! )?;
//! let mut sim = Simulation::new(config, Rect::new(0.0, 0.0, 100.0, 100.0), true)?;
//!
//! sim.document_event(&DomEvent::MouseDown { button: 0, client_x: 50.0, client_y: 50.0 });
//! sim.advance_by(Duration::from_millis(300));
//! assert_eq!(sim.card().host().history(), ["/lovelace/0"]);
//! # Ok::<(), long_press::LongPressError>(())
//! ```

pub mod host;
pub mod scenario;

pub use host::{Effect, EffectRecord, SimulatedDialog, SimulatedHost};
pub use scenario::{Scenario, Step};

use crate::card::LongPressCard;
use crate::domain::{CardConfig, HassState, Rect, Result};
use crate::elements::ElementRegistry;
use crate::input::DomEvent;
use host::Shared;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// A card running on virtual time.
#[derive(Debug)]
pub struct Simulation {
    card: LongPressCard<SimulatedHost>,
    shared: Rc<RefCell<Shared>>,
}

impl Simulation {
    /// Builds a card with the default element registry.
    ///
    /// `with_dialog` controls whether the page has a more-info dialog to
    /// attach to.
    ///
    /// # Errors
    ///
    /// Propagates child construction failures.
    pub fn new(config: CardConfig, bounds: Rect, with_dialog: bool) -> Result<Self> {
        Self::with_registry(config, &ElementRegistry::default(), bounds, with_dialog)
    }

    /// Builds a card with a caller-supplied element registry.
    ///
    /// # Errors
    ///
    /// Propagates child construction failures.
    pub fn with_registry(
        config: CardConfig,
        registry: &ElementRegistry,
        bounds: Rect,
        with_dialog: bool,
    ) -> Result<Self> {
        let shared = Rc::new(RefCell::new(Shared::default()));
        let host = SimulatedHost::new(Rc::clone(&shared), bounds);
        let dialog: Option<Box<dyn crate::card::MoreInfoDialog>> = if with_dialog {
            Some(Box::new(SimulatedDialog::new(Rc::clone(&shared))))
        } else {
            None
        };

        let card = LongPressCard::new(config, registry, host, dialog)?;
        Ok(Self { card, shared })
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.shared.borrow().now
    }

    /// Advances the clock to `target`, firing every timer due on the way.
    ///
    /// Moving backwards is a no-op.
    pub fn advance_to(&mut self, target: Duration) {
        while let Some((due, id)) = self.card.host_mut().pop_due(target) {
            {
                let mut shared = self.shared.borrow_mut();
                shared.now = shared.now.max(due);
                shared.record(Effect::TimerFired { id });
            }
            self.card.on_timer(id);
        }

        let mut shared = self.shared.borrow_mut();
        shared.now = shared.now.max(target);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        let target = self.now() + delta;
        self.advance_to(target);
    }

    /// Delivers a document event at the current time.
    pub fn document_event(&mut self, event: &DomEvent) {
        tracing::debug!(event_type = %event.event_type(), now_ms = millis(self.now()), "document event");
        self.card.on_document_event(event);
    }

    /// Assigns live state at the current time.
    pub fn set_hass(&mut self, hass: HassState) {
        self.card.set_hass(hass);
    }

    /// Runs scenario steps in order, advancing the clock to each step first.
    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for step in steps {
            self.advance_to(Duration::from_millis(step.at_ms));
            match (&step.event, &step.hass) {
                (Some(event), None) => self.document_event(event),
                (None, Some(hass)) => self.set_hass(hass.clone()),
                _ => {
                    return Err(crate::LongPressError::Scenario(format!(
                        "step at {}ms must have exactly one of `event` or `hass`",
                        step.at_ms
                    )))
                }
            }
        }
        Ok(())
    }

    /// All effects recorded so far.
    #[must_use]
    pub fn effects(&self) -> Vec<EffectRecord> {
        self.shared.borrow().effects.clone()
    }

    /// Drains the effect log.
    pub fn take_effects(&mut self) -> Vec<EffectRecord> {
        std::mem::take(&mut self.shared.borrow_mut().effects)
    }

    /// Current `modal` flag of the simulated dialog.
    #[must_use]
    pub fn dialog_modal(&self) -> bool {
        self.shared.borrow().modal
    }

    #[must_use]
    pub const fn card(&self) -> &LongPressCard<SimulatedHost> {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut LongPressCard<SimulatedHost> {
        &mut self.card
    }
}
