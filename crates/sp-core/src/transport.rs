//! Transport failure taxonomy and session classification
//!
//! Every failure shape the transport layer can produce is one of
//! these variants, and classification over them is total: it decides
//! only whether the failure invalidates the session. The effects
//! that follow (clearing the store, redirecting, notifying) belong
//! to the application layer's dispatcher, which keeps every call
//! site's reaction a single match over two outcomes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Server answered with a non-success HTTP status.
    #[error("server rejected the request with status {code}")]
    Status { code: u16, detail: Option<String> },

    /// The request never reached the server.
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// The server answered, but the body was not what the contract
    /// promises (including non-numeric sensor readings).
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// How a transport failure bears on the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The session is no longer valid. Always fatal to the current
    /// view: clear the session and redirect to login.
    Unauthorized,

    /// Operation-local. Report via a non-blocking notification and
    /// leave all state untouched.
    Other,
}

impl TransportError {
    /// Total classification: an HTTP 401 means the session is no
    /// longer valid; every other failure is operation-local.
    pub fn auth_outcome(&self) -> AuthOutcome {
        match self {
            Self::Status { code: 401, .. } => AuthOutcome::Unauthorized,
            _ => AuthOutcome::Other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.auth_outcome() == AuthOutcome::Unauthorized
    }

    /// Message for the dismissible user notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { .. } => "Something went wrong!".to_string(),
            Self::Network(_) | Self::Timeout => {
                "Network error! Please check your connection".to_string()
            }
            Self::Malformed(_) => "An Unexpected Error occurred".to_string(),
        }
    }
}
