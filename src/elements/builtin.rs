//! Built-in child elements.
//!
//! A small picture-elements family: three entity-bound elements that render
//! from live state, and two static ones that render straight from config.

use super::{Element, ElementRegistry};
use crate::domain::{ChildConfig, EntityState, HassState, LongPressError, Result};
use crate::ui::RenderNode;

/// Registers every built-in element under its `hui-*-element` tag.
pub fn register_all(registry: &mut ElementRegistry) {
    registry.register("hui-state-label-element", || {
        Box::new(StateElement::new(StateKind::Label))
    });
    registry.register("hui-state-badge-element", || {
        Box::new(StateElement::new(StateKind::Badge))
    });
    registry.register("hui-state-icon-element", || {
        Box::new(StateElement::new(StateKind::Icon))
    });
    registry.register("hui-icon-element", || Box::new(IconElement::default()));
    registry.register("hui-image-element", || Box::new(ImageElement::default()));
}

fn required<'a>(config: &'a ChildConfig, tag: &str, field: &str) -> Result<&'a str> {
    let value = match field {
        "entity" => config.entity.as_deref(),
        _ => config.extra_str(field),
    };
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| LongPressError::Config(format!("{tag} requires `{field}`")))
}

/// Default icon for an entity's domain.
fn domain_icon(entity_id: &str) -> &'static str {
    match entity_id.split_once('.').map(|(domain, _)| domain) {
        Some("light") => "mdi:lightbulb",
        Some("switch") => "mdi:flash",
        Some("sensor") => "mdi:eye",
        Some("binary_sensor") => "mdi:radiobox-blank",
        Some("climate") => "mdi:thermostat",
        _ => "mdi:bookmark",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateKind {
    Label,
    Badge,
    Icon,
}

/// An element showing one entity's live state.
#[derive(Debug)]
struct StateElement {
    kind: StateKind,
    entity: String,
    prefix: String,
    suffix: String,
    current: Option<EntityState>,
}

impl StateElement {
    const fn new(kind: StateKind) -> Self {
        Self {
            kind,
            entity: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            current: None,
        }
    }

    fn state_text(&self) -> String {
        let Some(state) = &self.current else {
            return "-".to_string();
        };
        match state.attribute_str("unit_of_measurement") {
            Some(unit) => format!("{} {unit}", state.state),
            None => state.state.clone(),
        }
    }
}

impl Element for StateElement {
    fn tag(&self) -> &str {
        match self.kind {
            StateKind::Label => "hui-state-label-element",
            StateKind::Badge => "hui-state-badge-element",
            StateKind::Icon => "hui-state-icon-element",
        }
    }

    fn set_config(&mut self, config: &ChildConfig) -> Result<()> {
        self.entity = required(config, self.tag(), "entity")?.to_string();
        self.prefix = config.extra_str("prefix").unwrap_or_default().to_string();
        self.suffix = config.extra_str("suffix").unwrap_or_default().to_string();
        Ok(())
    }

    fn set_hass(&mut self, hass: &HassState) {
        self.current = hass.entity(&self.entity).cloned();
    }

    fn render(&self) -> RenderNode {
        match self.kind {
            StateKind::Label => RenderNode::new("div")
                .attr("title", &self.entity)
                .text(format!("{}{}{}", self.prefix, self.state_text(), self.suffix)),
            StateKind::Badge => RenderNode::new("ha-state-label-badge")
                .attr("entity", &self.entity)
                .text(self.state_text()),
            StateKind::Icon => {
                let icon = self
                    .current
                    .as_ref()
                    .and_then(|s| s.attribute_str("icon"))
                    .unwrap_or_else(|| domain_icon(&self.entity));
                let node = RenderNode::new("state-badge")
                    .attr("entity", &self.entity)
                    .attr("icon", icon);
                match &self.current {
                    Some(state) => node.attr("state", &state.state),
                    None => node,
                }
            }
        }
    }
}

/// A static icon.
#[derive(Debug, Default)]
struct IconElement {
    icon: String,
    title: Option<String>,
}

impl Element for IconElement {
    fn tag(&self) -> &str {
        "hui-icon-element"
    }

    fn set_config(&mut self, config: &ChildConfig) -> Result<()> {
        self.icon = required(config, self.tag(), "icon")?.to_string();
        self.title = config.extra_str("title").map(ToString::to_string);
        Ok(())
    }

    fn set_hass(&mut self, _hass: &HassState) {}

    fn render(&self) -> RenderNode {
        let node = RenderNode::new("ha-icon").attr("icon", &self.icon);
        match &self.title {
            Some(title) => node.attr("title", title),
            None => node,
        }
    }
}

/// A static image.
#[derive(Debug, Default)]
struct ImageElement {
    image: String,
}

impl Element for ImageElement {
    fn tag(&self) -> &str {
        "hui-image-element"
    }

    fn set_config(&mut self, config: &ChildConfig) -> Result<()> {
        self.image = required(config, self.tag(), "image")?.to_string();
        Ok(())
    }

    fn set_hass(&mut self, _hass: &HassState) {}

    fn render(&self) -> RenderNode {
        RenderNode::new("img").attr("src", &self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(config: serde_json::Value) -> Result<Box<dyn Element>> {
        let child: ChildConfig = serde_json::from_value(config).unwrap();
        ElementRegistry::default().create(&child)
    }

    fn hass_with(entity: &str, state: serde_json::Value) -> HassState {
        serde_json::from_value(json!({ "states": { entity: state } })).unwrap()
    }

    #[test]
    fn state_label_renders_live_state_with_unit() {
        let mut label = create(json!({
            "type": "state-label",
            "entity": "sensor.temp",
            "prefix": "Temp: "
        }))
        .unwrap();
        assert_eq!(label.render().text.as_deref(), Some("Temp: -"));

        label.set_hass(&hass_with(
            "sensor.temp",
            json!({"state": "21.5", "attributes": {"unit_of_measurement": "°C"}}),
        ));
        assert_eq!(label.render().text.as_deref(), Some("Temp: 21.5 °C"));
    }

    #[test]
    fn state_elements_require_an_entity() {
        let err = create(json!({"type": "state-badge"})).unwrap_err();
        assert!(matches!(err, LongPressError::Config(msg) if msg.contains("entity")));
    }

    #[test]
    fn state_icon_prefers_entity_icon_attribute() {
        let mut icon = create(json!({"type": "state-icon", "entity": "light.hall"})).unwrap();
        icon.set_hass(&hass_with("light.hall", json!({"state": "on"})));
        assert_eq!(
            icon.render().attributes.get("icon").map(String::as_str),
            Some("mdi:lightbulb")
        );

        icon.set_hass(&hass_with(
            "light.hall",
            json!({"state": "on", "attributes": {"icon": "mdi:ceiling-light"}}),
        ));
        let node = icon.render();
        assert_eq!(node.attributes["icon"], "mdi:ceiling-light");
        assert_eq!(node.attributes["state"], "on");
    }

    #[test]
    fn icon_and_image_render_from_config() {
        let icon = create(json!({"type": "icon", "icon": "mdi:home", "title": "Home"})).unwrap();
        assert_eq!(icon.render().to_string(), r#"<ha-icon icon="mdi:home" title="Home"></ha-icon>"#);

        let image = create(json!({"type": "image", "image": "/local/floor.png"})).unwrap();
        assert_eq!(image.render().attributes["src"], "/local/floor.png");

        assert!(create(json!({"type": "image"})).is_err());
    }
}
