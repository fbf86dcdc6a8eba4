//! Simulator scenario files.
//!
//! A scenario bundles a card config, the card's on-screen bounds, optional
//! runtime settings and a list of timed steps. Files ending in `.toml` are
//! parsed as TOML, anything else as JSON.
//!
//! ```toml
//! end_ms = 1000
//!
//! [settings]
//! trace_level = "debug"
//!
//! [card]
//! service = "light.turn_on"
//! service_data = { entity_id = "light.kitchen" }
//! child = { type = "state-label", entity = "light.kitchen" }
//!
//! [[steps]]
//! at_ms = 0
//! event = { type = "mousedown", button = 0, clientX = 40, clientY = 40 }
//! ```

use crate::domain::{CardConfig, HassState, Rect, Result};
use crate::input::DomEvent;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

fn default_bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

const fn default_dialog() -> bool {
    true
}

/// One timed input. Exactly one of `event` and `hass` must be set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(default)]
    pub event: Option<DomEvent>,
    #[serde(default)]
    pub hass: Option<HassState>,
}

/// A complete simulator run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub card: CardConfig,
    #[serde(default = "default_bounds")]
    pub bounds: Rect,
    /// Whether the page has a more-info dialog.
    #[serde(default = "default_dialog")]
    pub dialog: bool,
    /// Runtime settings, same keys as [`crate::Settings::from_map`].
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Time to run to after the last step.
    #[serde(default)]
    pub end_ms: Option<u64>,
}

impl Scenario {
    /// Loads a scenario, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns I/O errors and JSON/TOML parse errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        tracing::debug!(path = %path.display(), is_toml = is_toml, "loading scenario");
        if is_toml {
            Ok(toml::from_str(&text)?)
        } else {
            Ok(serde_json::from_str(&text)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn toml_scenario_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[card]
navigation_path = "/lovelace/1"
child = {{ type = "icon", icon = "mdi:home" }}

[[steps]]
at_ms = 0
event = {{ type = "touchstart", touches = [{{ clientX = 5, clientY = 5 }}] }}

[[steps]]
at_ms = 100
event = {{ type = "touchend" }}
"#
        )
        .unwrap();

        let scenario = Scenario::from_path(file.path()).unwrap();
        assert_eq!(scenario.bounds, default_bounds());
        assert!(scenario.dialog);
        assert_eq!(scenario.steps.len(), 2);
        assert_eq!(scenario.steps[1].event, Some(DomEvent::TouchEnd));
    }

    #[test]
    fn json_scenario_with_hass_step() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
  "card": {{"child": {{"type": "state-label", "entity": "sensor.temp"}}}},
  "bounds": {{"left": 10, "top": 10, "right": 60, "bottom": 40}},
  "steps": [{{"at_ms": 5, "hass": {{"moreInfoEntityId": "sensor.temp"}}}}]
}}"#
        )
        .unwrap();

        let scenario = Scenario::from_path(file.path()).unwrap();
        assert_eq!(scenario.bounds, Rect::new(10.0, 10.0, 60.0, 40.0));
        assert!(scenario.steps[0].hass.as_ref().unwrap().more_info_open());
    }
}
