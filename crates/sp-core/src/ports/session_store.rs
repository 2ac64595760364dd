use async_trait::async_trait;

use crate::session::Session;

/// Storage boundary for the persisted session.
///
/// Single source of truth for "is a user logged in". All writers
/// funnel through `set`/`clear`, so no partial session state is ever
/// observable. The trait is infallible by contract: adapters absorb
/// storage faults and surface them as an absent session, which keeps
/// the session gate free of fallible dependencies.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Current session, without side effects.
    async fn get(&self) -> Option<Session>;

    /// Atomically replaces token and profile together.
    async fn set(&self, session: Session);

    /// Removes token and profile together. Clearing an absent
    /// session is a no-op, never an error.
    async fn clear(&self);
}
