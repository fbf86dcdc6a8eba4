//! The long-press card component.
//!
//! [`LongPressCard`] glues the layers together. It owns the configuration, the
//! gesture session, the child element and the overlay, and it executes the
//! gesture handler's actions against two injected collaborators:
//!
//! - a [`Host`]: timers, layout, navigation, notifications and service calls
//! - an optional [`MoreInfoDialog`] handle: the page's single more-info dialog
//!
//! # Lifecycle
//!
//! 1. **Construct** with a config, an element registry, the host and the
//!    dialog handle. The child is created and configured here; a failing child
//!    fails construction.
//! 2. **Subscribe** the five [`SUBSCRIPTIONS`] on the document and route each
//!    to [`LongPressCard::on_document_event`].
//! 3. **Update** with [`LongPressCard::set_hass`] on every state change.
//! 4. **Deliver timers** with [`LongPressCard::on_timer`] when a timer armed
//!    through [`Host::set_timeout`] runs out.

use crate::app::{handle_event, Action, Event, GestureSession, HostEvent, TimerId};
use crate::domain::{CardConfig, HassState, Rect, Result, ServiceCall};
use crate::elements::{Element, ElementRegistry};
use crate::input::{DomEvent, DomEventType, ListenerCall, SUBSCRIPTIONS};
use crate::ui::{self, Overlay, RenderNode};
use std::time::Duration;

/// Element name the card is registered under.
pub const CARD_TAG: &str = "long-press";

/// Facilities the dashboard host provides to the card.
pub trait Host {
    /// Schedules a single-shot timer; the host reports it back through
    /// [`LongPressCard::on_timer`] with the same id.
    fn set_timeout(&mut self, id: TimerId, delay: Duration);

    /// Cancels a timer. A cleared timer must never be reported.
    fn clear_timeout(&mut self, id: TimerId);

    /// The card's current on-screen bounding rectangle.
    fn bounding_rect(&self) -> Rect;

    /// Pushes a history entry without reloading the page.
    fn push_state(&mut self, path: &str);

    /// Dispatches a notification from the card element.
    fn dispatch_event(&mut self, event: &HostEvent);

    /// Invokes a host service, fire-and-forget.
    fn call_service(&mut self, call: &ServiceCall);
}

/// Handle to the host's more-info dialog.
pub trait MoreInfoDialog {
    fn set_modal(&mut self, modal: bool);
}

/// A card that turns long presses on its child into host actions.
pub struct LongPressCard<H: Host> {
    config: CardConfig,
    session: GestureSession,
    child: Box<dyn Element>,
    overlay: Overlay,
    host: H,
    dialog: Option<Box<dyn MoreInfoDialog>>,
    hass: Option<HassState>,
}

impl<H: Host> std::fmt::Debug for LongPressCard<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LongPressCard")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("child", &self.child)
            .field("overlay", &self.overlay)
            .field("has_dialog", &self.dialog.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: Host> LongPressCard<H> {
    /// Builds the card and its child element.
    ///
    /// # Errors
    ///
    /// Propagates child construction failures from the registry: an unknown
    /// element tag or a child configuration the element rejects.
    pub fn new(
        config: CardConfig,
        registry: &ElementRegistry,
        host: H,
        dialog: Option<Box<dyn MoreInfoDialog>>,
    ) -> Result<Self> {
        let _span = tracing::debug_span!("card_new", child_type = %config.child.kind).entered();
        let child = registry.create(&config.child)?;

        Ok(Self {
            config,
            session: GestureSession::new(),
            child,
            overlay: Overlay::default(),
            host,
            dialog,
            hass: None,
        })
    }

    /// Document events the card must be subscribed to.
    #[must_use]
    pub const fn subscriptions() -> &'static [DomEventType] {
        &SUBSCRIPTIONS
    }

    /// Assigns new live state, forwards it to the child and gates gestures.
    pub fn set_hass(&mut self, hass: HassState) {
        self.child.set_hass(&hass);
        let more_info_open = hass.more_info_open();
        self.hass = Some(hass);
        self.handle(&Event::StateUpdated { more_info_open });
    }

    /// Entry point for all five document listeners.
    pub fn on_document_event(&mut self, event: &DomEvent) {
        let event = match event.listener_call() {
            ListenerCall::Press(input) => Event::PressDown {
                input,
                bounds: self.host.bounding_rect(),
            },
            ListenerCall::Release { touch } => Event::Release { touch },
            ListenerCall::Click => Event::Click,
        };
        self.handle(&event);
    }

    /// Reports that the timer `id` ran out.
    pub fn on_timer(&mut self, id: TimerId) {
        self.handle(&Event::TimerElapsed(id));
    }

    /// Describes the card: the child and the overlay, both covering the card.
    #[must_use]
    pub fn render(&self) -> RenderNode {
        ui::render_card(self.child.as_ref(), &self.overlay)
    }

    fn handle(&mut self, event: &Event) {
        let actions = handle_event(&mut self.session, &self.config, event);
        for action in actions {
            self.execute(action);
        }
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(action = %action, "executing action");

        match action {
            Action::ArmTimer { id, delay } => self.host.set_timeout(id, delay),
            Action::CancelTimer { id } => self.host.clear_timeout(id),
            Action::SetOverlayVisible(visible) => self.overlay.set_visible(visible),
            Action::SetDialogModal(modal) => match self.dialog.as_mut() {
                Some(dialog) => dialog.set_modal(modal),
                None => tracing::debug!(modal = modal, "no more-info dialog attached"),
            },
            Action::Navigate { path } => self.host.push_state(&path),
            Action::FireEvent(event) => self.host.dispatch_event(&event),
            Action::CallService(call) => self.host.call_service(&call),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CardConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &GestureSession {
        &self.session
    }

    #[must_use]
    pub fn child(&self) -> &dyn Element {
        self.child.as_ref()
    }

    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// The last live state assigned by the host.
    #[must_use]
    pub const fn hass(&self) -> Option<&HassState> {
        self.hass.as_ref()
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
