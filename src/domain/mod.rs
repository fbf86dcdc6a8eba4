//! Domain layer for the long-press card.
//!
//! Plain data types shared by every other layer, independent of any host
//! runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`config`]: Card and child configuration, hold action selection
//! - [`geometry`]: Points and bounding rectangles for hit testing
//! - [`hass`]: Live application state supplied by the host

pub mod config;
pub mod error;
pub mod geometry;
pub mod hass;

pub use config::{CardConfig, ChildConfig, HoldAction, ServiceCall};
pub use error::{LongPressError, Result};
pub use geometry::{Point, Rect};
pub use hass::{EntityState, HassState};
