//! A minimal render tree.
//!
//! The card does not draw anything itself; it describes its two children as
//! [`RenderNode`]s and the host turns them into real elements. `Display`
//! prints the tree as markup, which is what the simulator outputs.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One element in the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RenderNode {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets a style property, replacing an earlier value for the same name.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.style.push((property, value)),
        }
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Looks up a style property.
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes the inline style as a CSS declaration list.
    #[must_use]
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{value}\"")?;
        }
        if !self.style.is_empty() {
            write!(f, " style=\"{}\"", self.style_string())?;
        }
        f.write_str(">")?;
        if let Some(text) = &self.text {
            f.write_str(text)?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_replaces_existing_property() {
        let node = RenderNode::new("div")
            .style("visibility", "hidden")
            .style("top", "0")
            .style("visibility", "visible");
        assert_eq!(node.style_string(), "visibility: visible; top: 0;");
    }

    #[test]
    fn displays_as_markup() {
        let node = RenderNode::new("long-press")
            .child(RenderNode::new("span").attr("title", "t").text("21.5"))
            .child(RenderNode::new("div").style("top", "0"));
        assert_eq!(
            node.to_string(),
            r#"<long-press><span title="t">21.5</span><div style="top: 0;"></div></long-press>"#
        );
    }
}
