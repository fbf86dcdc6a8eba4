//! Hold action dispatch.
//!
//! Turns the configured [`HoldAction`] into the ordered side effects a
//! completed long press performs. Exactly one branch runs per gesture.

use super::actions::{Action, HostEvent};
use crate::domain::{CardConfig, HoldAction};

/// Builds the effects of a completed long press for `config`.
///
/// - navigate: push the path, then announce `location-changed`
/// - service: call the service, then show the overlay until the next reset
/// - more-info: announce `hass-more-info`, then make the dialog modal
#[must_use]
pub fn dispatch(config: &CardConfig) -> Vec<Action> {
    let action = config.hold_action();
    tracing::debug!(action = ?action, "dispatching hold action");

    match action {
        HoldAction::Navigate { path } => vec![
            Action::Navigate { path },
            Action::FireEvent(HostEvent::LocationChanged),
        ],
        HoldAction::CallService(call) => vec![
            Action::CallService(call),
            Action::SetOverlayVisible(true),
        ],
        HoldAction::MoreInfo { entity_id } => vec![
            Action::FireEvent(HostEvent::MoreInfo { entity_id }),
            Action::SetDialogModal(true),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChildConfig, ServiceCall};
    use serde_json::json;

    fn config() -> CardConfig {
        CardConfig {
            child: ChildConfig {
                kind: "state-label".into(),
                entity: Some("sensor.child".into()),
                ..ChildConfig::default()
            },
            ..CardConfig::default()
        }
    }

    #[test]
    fn navigation_never_calls_a_service() {
        let actions = dispatch(&CardConfig {
            navigation_path: Some("/lovelace/0".into()),
            ..config()
        });
        assert_eq!(
            actions,
            vec![
                Action::Navigate {
                    path: "/lovelace/0".into()
                },
                Action::FireEvent(HostEvent::LocationChanged),
            ]
        );
    }

    #[test]
    fn service_call_shows_overlay() {
        let actions = dispatch(&CardConfig {
            service: Some("light.turn_on".into()),
            service_data: Some(json!({"entity_id": "light.kitchen"})),
            ..config()
        });
        assert_eq!(
            actions,
            vec![
                Action::CallService(ServiceCall {
                    domain: "light".into(),
                    service: "turn_on".into(),
                    service_data: Some(json!({"entity_id": "light.kitchen"})),
                }),
                Action::SetOverlayVisible(true),
            ]
        );
    }

    #[test]
    fn fallback_opens_modal_more_info() {
        let actions = dispatch(&CardConfig {
            entity: Some("sensor.temp".into()),
            ..config()
        });
        assert_eq!(
            actions,
            vec![
                Action::FireEvent(HostEvent::MoreInfo {
                    entity_id: Some("sensor.temp".into())
                }),
                Action::SetDialogModal(true),
            ]
        );
    }
}
