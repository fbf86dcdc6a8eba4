//! Wrapped child elements.
//!
//! The card wraps exactly one child, created once from `child.type`. Instead
//! of creating elements by tag name at runtime, an [`ElementRegistry`] maps a
//! resolved tag to a constructor producing a boxed [`Element`].
//!
//! Tag resolution (see [`ChildConfig::element_tag`]):
//!
//! - `custom:button-card` → `button-card` (must be registered by the host)
//! - `state-label` → `hui-state-label-element` (built in)
//!
//! # Example
//!
//! ```rust
//! use long_press::elements::ElementRegistry;
//! use long_press::ChildConfig;
//!
//! let registry = ElementRegistry::default();
//! let config = ChildConfig { kind: "icon".into(), ..Default::default() };
//! // the built-in icon element needs an `icon` field
//! assert!(registry.create(&config).is_err());
//! ```

pub mod builtin;

use crate::domain::{ChildConfig, HassState, LongPressError, Result};
use crate::ui::RenderNode;
use std::collections::HashMap;
use std::fmt;

/// Capability every wrapped child provides.
pub trait Element: fmt::Debug {
    /// Resolved tag name of this element.
    fn tag(&self) -> &str;

    /// Applies the child configuration. Called once, right after construction.
    ///
    /// # Errors
    ///
    /// Returns [`LongPressError::Config`] when required fields are missing.
    fn set_config(&mut self, config: &ChildConfig) -> Result<()>;

    /// Receives the host's live state on every update.
    fn set_hass(&mut self, hass: &HassState);

    /// Describes the element for the host to draw.
    fn render(&self) -> RenderNode;
}

type Constructor = Box<dyn Fn() -> Box<dyn Element>>;

/// Maps resolved tag names to element constructors.
pub struct ElementRegistry {
    constructors: HashMap<String, Constructor>,
}

impl Default for ElementRegistry {
    /// A registry preloaded with the built-in elements.
    fn default() -> Self {
        let mut registry = Self::empty();
        builtin::register_all(&mut registry);
        registry
    }
}

impl fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&String> = self.constructors.keys().collect();
        tags.sort();
        f.debug_struct("ElementRegistry").field("tags", &tags).finish()
    }
}

impl ElementRegistry {
    /// A registry with no elements at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers (or replaces) the constructor for `tag`.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Element> + 'static,
    {
        let tag = tag.into();
        tracing::debug!(tag = %tag, "registering element");
        self.constructors.insert(tag, Box::new(constructor));
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Constructs and configures the child described by `config`.
    ///
    /// # Errors
    ///
    /// - [`LongPressError::UnknownElement`] if the resolved tag is not registered
    /// - whatever the element's own `set_config` returns
    pub fn create(&self, config: &ChildConfig) -> Result<Box<dyn Element>> {
        let tag = config.element_tag();
        let constructor = self
            .constructors
            .get(&tag)
            .ok_or_else(|| LongPressError::UnknownElement(tag.clone()))?;

        let mut element = constructor();
        element.set_config(config)?;
        tracing::debug!(tag = %tag, "child element created");
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Stub {
        configured: bool,
    }

    impl Element for Stub {
        fn tag(&self) -> &str {
            "stub-card"
        }

        fn set_config(&mut self, _config: &ChildConfig) -> Result<()> {
            self.configured = true;
            Ok(())
        }

        fn set_hass(&mut self, _hass: &HassState) {}

        fn render(&self) -> RenderNode {
            RenderNode::new(self.tag()).text(if self.configured { "ok" } else { "raw" })
        }
    }

    fn child(kind: &str) -> ChildConfig {
        ChildConfig {
            kind: kind.into(),
            ..ChildConfig::default()
        }
    }

    #[test]
    fn custom_types_resolve_to_registered_tags() {
        let mut registry = ElementRegistry::empty();
        registry.register("stub-card", || Box::new(Stub::default()));

        let element = registry.create(&child("custom:stub-card")).unwrap();
        assert_eq!(element.tag(), "stub-card");
        assert_eq!(element.render().text.as_deref(), Some("ok"));
    }

    #[test]
    fn unregistered_tag_is_an_error() {
        let registry = ElementRegistry::empty();
        let err = registry.create(&child("custom:missing-card")).unwrap_err();
        assert!(matches!(err, LongPressError::UnknownElement(tag) if tag == "missing-card"));
    }

    #[test]
    fn default_registry_has_builtins() {
        let registry = ElementRegistry::default();
        for tag in [
            "hui-state-label-element",
            "hui-state-badge-element",
            "hui-state-icon-element",
            "hui-icon-element",
            "hui-image-element",
        ] {
            assert!(registry.contains(tag), "{tag} missing");
        }
    }
}
