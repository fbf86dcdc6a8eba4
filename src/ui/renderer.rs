//! Card layout.
//!
//! The card renders exactly two children stacked in the same box: the wrapped
//! element first, the overlay cover on top.

use super::node::RenderNode;
use super::overlay::Overlay;
use crate::card::CARD_TAG;
use crate::elements::Element;

/// Builds the card's render tree.
#[must_use]
pub fn render_card(child: &dyn Element, overlay: &Overlay) -> RenderNode {
    RenderNode::new(CARD_TAG)
        .style("position", "relative")
        .style("display", "block")
        .child(super::fill(child.render()))
        .child(overlay.render())
}
