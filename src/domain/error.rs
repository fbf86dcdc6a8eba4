//! Error types for the long-press card.
//!
//! The gesture layer itself never fails; errors only surface while building the
//! card (configuration, child construction) and while loading simulator input.
//! All variants are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for long-press card operations.
///
/// # Examples
///
/// ```
/// use long_press::LongPressError;
///
/// fn validate() -> Result<(), LongPressError> {
///     Err(LongPressError::Config("child.type is empty".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum LongPressError {
    /// Card or child configuration is invalid.
    ///
    /// Raised by child elements that require fields the config does not carry
    /// (for example a state label without an `entity`).
    #[error("Configuration error: {0}")]
    Config(String),

    /// No element constructor is registered for the resolved tag name.
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Simulator scenario is malformed.
    #[error("Scenario error: {0}")]
    Scenario(String),
}

/// A specialized `Result` type for long-press card operations.
pub type Result<T> = std::result::Result<T, LongPressError>;
