//! Error types for catalog API calls.

use thiserror::Error;

/// Result type alias for catalog API operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures a catalog API call can produce.
///
/// A zero-hit search is not an error; it is a normal outcome carried in
/// the response body. These variants cover only transport and decoding.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Request rejected, timed out, or answered with a non-success
    /// status.
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("parse error: {message}")]
    Parse {
        /// Description of the malformed payload.
        message: String,
    },
}

impl ClientError {
    /// Shorthand for a [`ClientError::Network`] with the given message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Shorthand for a [`ClientError::Parse`] with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClientError::network("connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ClientError::parse("expected array");
        assert_eq!(err.to_string(), "parse error: expected array");
    }
}
