//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// 401 response; the stored token has been evicted
    #[error("Authentication required")]
    Unauthorized,

    /// Non-2xx response carrying the server-supplied message when present
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Generic message for a failed status with no server-supplied message
    pub(crate) fn status_message(status: u16) -> String {
        format!("Request failed with status {status}")
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_server_message() {
        let err = ClientError::RequestFailed {
            status: 400,
            message: "Illegal transition".into(),
        };
        assert_eq!(err.to_string(), "Illegal transition");
    }

    #[test]
    fn generic_message_carries_status_code() {
        assert_eq!(ClientError::status_message(502), "Request failed with status 502");
    }
}
