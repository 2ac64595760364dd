//! Session domain model
//!
//! The session is the precondition for viewing protected content:
//! an opaque bearer token plus the profile of the user it was issued
//! to. Both live in one value so they are installed and removed
//! together; a state with one present and the other absent is not
//! representable.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod gate;
pub use gate::GateState;

/// Opaque bearer token issued by the token endpoint.
///
/// The core never inspects the token; it only carries it to the
/// transport layer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the raw token out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    pub username: String,
    pub device_id: String,
}

/// The authenticated user's token and profile.
///
/// Lifetime: from a successful login until explicit logout or an
/// unauthorized classification. Persisted across restarts by the
/// session store adapter, scoped to one client profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: AuthToken,
    pub profile: UserProfile,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: AuthToken, profile: UserProfile) -> Self {
        Self {
            token,
            profile,
            issued_at: Utc::now(),
        }
    }
}
