//! The transparent overlay cover.
//!
//! A full-size, absolutely positioned layer stacked above the child. It is
//! hidden by default, shown while a service call started by a long press is in
//! flight, and hidden again on every reset.

use super::node::RenderNode;

/// Overlay cover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            tracing::debug!(visible = visible, "overlay visibility changed");
        }
        self.visible = visible;
    }

    #[must_use]
    pub fn render(&self) -> RenderNode {
        super::fill(RenderNode::new("div")).style(
            "visibility",
            if self.visible { "visible" } else { "hidden" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_default() {
        let overlay = Overlay::default();
        assert!(!overlay.is_visible());
        assert_eq!(
            overlay.render().style_string(),
            "position: absolute; top: 0; left: 0; width: 100%; height: 100%; visibility: hidden;"
        );
    }

    #[test]
    fn visibility_tracks_state() {
        let mut overlay = Overlay::default();
        overlay.set_visible(true);
        assert_eq!(overlay.render().style_value("visibility"), Some("visible"));
        overlay.set_visible(false);
        assert_eq!(overlay.render().style_value("visibility"), Some("hidden"));
    }
}
