//! Error types for the BaseLinker connector client.
//!
//! # Design
//! Only failures of the exchange itself are errors. A reply whose `status`
//! is `"ERROR"` decoded fine, so it comes back as an ordinary `Reply` and the
//! caller inspects it.

use thiserror::Error;

/// Errors returned by the dispatcher, transports, and facades.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client cannot be built: missing or empty token, bad config value.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote method name was empty.
    #[error("remote method name must not be empty")]
    InvalidMethod,

    /// A facade received an optional parameter its method does not accept.
    #[error("{method} does not accept parameter `{name}`")]
    UnexpectedParameter { method: &'static str, name: String },

    /// A parameter value could not be serialized to JSON.
    #[error("parameter encoding failed: {0}")]
    Encode(String),

    /// The HTTP exchange failed: connection, DNS, TLS, timeout, body read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The reply body was not UTF-8 or not a JSON object.
    #[error("reply decoding failed: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_parameter_names_method_and_key() {
        let err = ApiError::UnexpectedParameter {
            method: "getOrders",
            name: "colour".to_string(),
        };
        assert_eq!(err.to_string(), "getOrders does not accept parameter `colour`");
    }

    #[test]
    fn transport_error_carries_cause() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
