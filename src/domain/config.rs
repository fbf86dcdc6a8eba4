//! Card configuration records.
//!
//! The host hands the card a declarative configuration object once. It is
//! deserialized with `serde` from JSON or TOML and treated as immutable for
//! the lifetime of the card.
//!
//! # Example
//!
//! ```json
//! {
//!   "child": { "type": "state-label", "entity": "sensor.temp" },
//!   "service": "light.turn_on",
//!   "service_data": { "entity_id": "light.kitchen" }
//! }
//! ```

use crate::domain::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Prefix marking a child type as a custom element used verbatim.
pub const CUSTOM_PREFIX: &str = "custom:";

/// Configuration of the wrapped child element.
///
/// Only `type` and `entity` are interpreted by the card. Every other field is
/// kept in `extra` and passed to the child untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildConfig {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChildConfig {
    /// Resolves the concrete element tag for this child.
    ///
    /// `custom:my-element` resolves to `my-element`; any other type `t`
    /// resolves to the built-in `hui-t-element`.
    ///
    /// ```
    /// use long_press::ChildConfig;
    ///
    /// let custom = ChildConfig { kind: "custom:button-card".into(), ..Default::default() };
    /// assert_eq!(custom.element_tag(), "button-card");
    ///
    /// let builtin = ChildConfig { kind: "state-label".into(), ..Default::default() };
    /// assert_eq!(builtin.element_tag(), "hui-state-label-element");
    /// ```
    #[must_use]
    pub fn element_tag(&self) -> String {
        self.kind.strip_prefix(CUSTOM_PREFIX).map_or_else(
            || format!("hui-{}-element", self.kind),
            ToString::to_string,
        )
    }

    /// Returns a string field from the element-specific part of the config.
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Top-level card configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardConfig {
    /// The wrapped visual element.
    pub child: ChildConfig,

    /// Location to navigate to on long press.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_path: Option<String>,

    /// Service to call on long press, in `domain.service` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Payload passed through verbatim with the service call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_data: Option<Value>,

    /// Entity for the more-info dialog; overrides `child.entity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

/// A namespaced remote action with its opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_data: Option<Value>,
}

impl ServiceCall {
    /// Splits `domain.service` into its first two `.`-separated segments.
    ///
    /// Anything after a second `.` is dropped, so `script.morning.run` calls
    /// `script.morning`. A string without a separator yields an empty service
    /// name. The host's service call is expected to reject it; nothing is
    /// validated here.
    #[must_use]
    pub fn parse(service: &str, service_data: Option<Value>) -> Self {
        let mut parts = service.splitn(3, '.');
        let domain = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_else(|| {
            tracing::warn!(service = %service, "service has no domain separator");
            ""
        });
        if parts.next().is_some() {
            tracing::warn!(service = %service, "ignoring segments after the service name");
        }

        Self {
            domain: domain.to_string(),
            service: name.to_string(),
            service_data,
        }
    }
}

/// The single effect a completed long press performs.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldAction {
    /// Push a new location and announce it.
    Navigate { path: String },
    /// Invoke a host service.
    CallService(ServiceCall),
    /// Open the more-info dialog.
    MoreInfo { entity_id: Option<String> },
}

/// Treats `None` and `Some("")` alike.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl CardConfig {
    /// Parses a card configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LongPressError::Json`](crate::LongPressError::Json) if the
    /// text is not a valid card configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a card configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`LongPressError::Toml`](crate::LongPressError::Toml) if the
    /// text is not a valid card configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Entity shown by the more-info dialog: `entity`, else `child.entity`.
    #[must_use]
    pub fn resolved_entity(&self) -> Option<&str> {
        present(self.entity.as_ref()).or_else(|| present(self.child.entity.as_ref()))
    }

    /// Picks the long-press effect in priority order.
    ///
    /// `navigation_path` wins over `service`; with neither set the card falls
    /// back to the more-info dialog.
    #[must_use]
    pub fn hold_action(&self) -> HoldAction {
        if let Some(path) = present(self.navigation_path.as_ref()) {
            return HoldAction::Navigate {
                path: path.to_string(),
            };
        }

        if let Some(service) = present(self.service.as_ref()) {
            return HoldAction::CallService(ServiceCall::parse(
                service,
                self.service_data.clone(),
            ));
        }

        HoldAction::MoreInfo {
            entity_id: self.resolved_entity().map(ToString::to_string),
        }
    }
}
