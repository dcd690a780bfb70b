//! Error types for route validation.

use std::convert::Infallible;

use thiserror::Error;

/// Route validation errors.
///
/// Each variant names the field whose rule was violated and carries the
/// rejected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Name is empty after trimming.
    #[error("invalid route name: {0:?}")]
    InvalidName(String),

    /// URI pattern is empty after trimming.
    #[error("invalid route uri pattern: {0:?}")]
    InvalidUriPattern(String),

    /// Method is not one of `get`, `post`, `put`, `delete`, `any`.
    #[error("invalid route method: {0:?}")]
    InvalidMethod(String),

    /// Controller is empty.
    #[error("invalid route controller: {0:?}")]
    InvalidController(String),

    /// Action is empty.
    #[error("invalid route action: {0:?}")]
    InvalidAction(String),
}

impl RouteError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "name",
            Self::InvalidUriPattern(_) => "uri_pattern",
            Self::InvalidMethod(_) => "method",
            Self::InvalidController(_) => "controller",
            Self::InvalidAction(_) => "action",
        }
    }

    /// Returns the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidName(v)
            | Self::InvalidUriPattern(v)
            | Self::InvalidMethod(v)
            | Self::InvalidController(v)
            | Self::InvalidAction(v) => v.as_str(),
        }
    }
}

// Lets APIs taking `impl TryInto<Method>` accept a `Method` directly.
impl From<Infallible> for RouteError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_value() {
        let err = RouteError::InvalidMethod("patch".to_string());
        assert_eq!(err.to_string(), "invalid route method: \"patch\"");
    }

    #[test]
    fn test_field_and_value() {
        let err = RouteError::InvalidController(String::new());
        assert_eq!(err.field(), "controller");
        assert_eq!(err.value(), "");
    }
}
