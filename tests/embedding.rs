//! Embedding the card in a host other than the simulator.

use long_press::app::HOLD_DURATION;
use long_press::input::{DomEvent, DomEventType};
use long_press::{CardConfig, Host, HostEvent, LongPressCard, Rect, ServiceCall, TimerId};
use std::time::Duration;

#[derive(Debug, Default)]
struct RecordingHost {
    armed: Vec<(TimerId, Duration)>,
    cleared: Vec<TimerId>,
    pushed: Vec<String>,
    events: Vec<String>,
    calls: Vec<ServiceCall>,
}

impl Host for RecordingHost {
    fn set_timeout(&mut self, id: TimerId, delay: Duration) {
        self.armed.push((id, delay));
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.cleared.push(id);
    }

    fn bounding_rect(&self) -> Rect {
        Rect::new(10.0, 10.0, 110.0, 60.0)
    }

    fn push_state(&mut self, path: &str) {
        self.pushed.push(path.to_string());
    }

    fn dispatch_event(&mut self, event: &HostEvent) {
        self.events.push(event.name().to_string());
    }

    fn call_service(&mut self, call: &ServiceCall) {
        self.calls.push(call.clone());
    }
}

fn navigate_card() -> LongPressCard<RecordingHost> {
    let config = CardConfig::from_toml_str(
        r#"
navigation_path = "/lovelace/kitchen"

[child]
type = "state-badge"
entity = "sensor.kitchen"
"#,
    )
    .unwrap();
    long_press::initialize(config, RecordingHost::default(), None).unwrap()
}

fn press() -> DomEvent {
    DomEvent::MouseDown {
        button: 0,
        client_x: 20.0,
        client_y: 20.0,
    }
}

#[test]
fn card_subscribes_to_all_document_events() {
    assert_eq!(
        LongPressCard::<RecordingHost>::subscriptions(),
        [
            DomEventType::MouseDown,
            DomEventType::TouchStart,
            DomEventType::MouseUp,
            DomEventType::TouchEnd,
            DomEventType::Click,
        ]
    );
}

#[test]
fn initialized_card_arms_and_dispatches_through_host() {
    let mut card = navigate_card();
    assert_eq!(card.child().tag(), "hui-state-badge-element");

    card.on_document_event(&press());
    let (id, delay) = card.host().armed[0];
    assert_eq!(delay, HOLD_DURATION);

    card.on_timer(id);
    assert_eq!(card.host().pushed, ["/lovelace/kitchen"]);
    assert_eq!(card.host().events, ["location-changed"]);
    assert!(card.host().calls.is_empty());
}

#[test]
fn timer_cancelled_by_release_is_ignored_if_delivered_late() {
    let mut card = navigate_card();

    card.on_document_event(&press());
    let (first, _) = card.host().armed[0];
    card.on_document_event(&DomEvent::TouchEnd);
    assert_eq!(card.host().cleared, [first]);

    card.on_document_event(&press());
    let (second, _) = card.host().armed[1];
    assert_ne!(first, second);

    card.on_timer(first);
    assert!(card.host().pushed.is_empty());

    card.on_timer(second);
    card.on_timer(second);
    assert_eq!(card.host().pushed.len(), 1);
}
