use serde::{Deserialize, Serialize};

use super::Session;

/// Protected-route gate state machine.
///
/// Design principle: this is a pure type with only state definitions
/// and resolution logic. Reading the store, rendering, and issuing
/// the redirect are handled by the application layer (sp-app).
///
/// State transitions, re-entered fresh on every protected navigation:
/// ```text
/// Checking
///  ├── session present ─► Authenticated   (protected content renders)
///  └── session absent  ─► Unauthenticated (redirect to login, subtree never mounts)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// Store read not yet resolved; render a neutral placeholder,
    /// never protected content and never a premature redirect.
    Checking,

    /// A session is present; protected content may render.
    Authenticated,

    /// No session; the protected subtree must not mount.
    Unauthenticated,
}

impl GateState {
    /// Resolves one route-entry evaluation from the store's answer.
    pub fn resolve(session: Option<&Session>) -> Self {
        match session {
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }

    /// Check if the evaluation has reached a terminal state.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Checking)
    }

    /// True only when the protected subtree may mount.
    pub fn allows_protected_content(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
