//! Failure taxonomy for calls against the portal API.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the HTTP core and every endpoint service.
///
/// Classification happens once, at the response boundary; callers only ever
/// see one of these variants and decide how to surface it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received at all (server down, connection refused).
    #[error("could not reach the server")]
    Network,
    /// The server rejected the credential (HTTP 401).
    #[error("authentication required")]
    Unauthenticated,
    /// The server understood the credential but denied access (HTTP 403).
    #[error("permission denied")]
    Forbidden,
    /// Any other non-success status, propagated for page-level display.
    #[error("server error: status {0}")]
    Server(u16),
    /// The response body could not be decoded into the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an HTTP status code; `None` means success.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthenticated),
            403 => Some(Self::Forbidden),
            other => Some(Self::Server(other)),
        }
    }
}
