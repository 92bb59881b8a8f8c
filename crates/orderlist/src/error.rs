//! Error types for the order-list controller.
//!
//! The controller's gesture entry points never fail: a lookup miss or a
//! disabled state turns the gesture into a no-op. Errors only surface from
//! the configuration layer.

/// Result type alias for order-list operations.
pub type Result<T> = std::result::Result<T, OrderListError>;

/// Errors that can occur while configuring an order list.
#[derive(Debug, thiserror::Error)]
pub enum OrderListError {
    /// A filter match mode name was not recognized.
    #[error("Unknown filter match mode '{0}'")]
    UnknownMatchMode(String),

    /// A locale tag could not be parsed.
    #[error("Invalid locale '{0}'")]
    InvalidLocale(String),

    /// A configuration value is out of range or malformed.
    #[error("Invalid value for option '{option}': {message}")]
    InvalidOption { option: String, message: String },

    /// TOML configuration could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl OrderListError {
    /// Create an invalid option error.
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
