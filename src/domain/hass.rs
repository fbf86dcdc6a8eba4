//! Live application state supplied by the dashboard host.
//!
//! The card never owns or mutates this object. It reads one derived condition
//! (an open more-info dialog) and forwards the whole state to its child.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// State of a single entity as the host reports it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityState {
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// Returns a string attribute, if present.
    #[must_use]
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// Snapshot of the host's live application state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HassState {
    /// Entity whose more-info dialog is currently open, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info_entity_id: Option<String>,

    /// Entity states keyed by entity id.
    #[serde(default)]
    pub states: HashMap<String, EntityState>,
}

impl HassState {
    /// Returns `true` while the host shows a more-info dialog for any entity.
    #[must_use]
    pub fn more_info_open(&self) -> bool {
        self.more_info_entity_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    #[must_use]
    pub fn entity(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_info_open_reads_camel_case_field() {
        let hass: HassState =
            serde_json::from_str(r#"{"moreInfoEntityId": "light.kitchen"}"#).unwrap();
        assert!(hass.more_info_open());
    }

    #[test]
    fn empty_more_info_id_counts_as_closed() {
        let hass = HassState {
            more_info_entity_id: Some(String::new()),
            ..HassState::default()
        };
        assert!(!hass.more_info_open());
        assert!(!HassState::default().more_info_open());
    }

    #[test]
    fn entity_attributes_are_readable() {
        let hass: HassState = serde_json::from_str(
            r#"{"states": {"sensor.temp": {"state": "21.5", "attributes": {"unit_of_measurement": "°C"}}}}"#,
        )
        .unwrap();
        let temp = hass.entity("sensor.temp").unwrap();
        assert_eq!(temp.state, "21.5");
        assert_eq!(temp.attribute_str("unit_of_measurement"), Some("°C"));
    }
}
