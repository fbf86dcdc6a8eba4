//! Render description of the card.
//!
//! # Modules
//!
//! - [`node`]: The render tree type
//! - [`overlay`]: The transparent in-flight overlay cover
//! - [`renderer`]: Card layout (child plus overlay)

pub mod node;
pub mod overlay;
pub mod renderer;

pub use node::RenderNode;
pub use overlay::Overlay;
pub use renderer::render_card;

/// Positions `node` to cover its parent's box exactly.
pub(crate) fn fill(node: RenderNode) -> RenderNode {
    node.style("position", "absolute")
        .style("top", "0")
        .style("left", "0")
        .style("width", "100%")
        .style("height", "100%")
}
