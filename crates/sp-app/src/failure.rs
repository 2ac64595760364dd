//! Centralized reaction to transport failures
//!
//! Classification is pure (`TransportError::auth_outcome`); this
//! dispatcher owns the effects that follow, so the plant-list path
//! and every per-plant path apply the same decision table instead of
//! ad hoc per-call-site conditionals.

use std::sync::Arc;

use tracing::warn;

use sp_core::ports::{NavigatorPort, NotifierPort, SessionStorePort};
use sp_core::transport::{AuthOutcome, TransportError};

pub struct FailureDispatcher {
    session_store: Arc<dyn SessionStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
    login_path: String,
}

impl FailureDispatcher {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session_store,
            navigator,
            notifier,
            login_path: login_path.into(),
        }
    }

    /// Applies the reaction for `error` and reports which branch ran.
    ///
    /// `Unauthorized` clears the session and redirects to the login
    /// boundary, silently. `Other` raises a dismissible notification
    /// and leaves every piece of state untouched.
    pub async fn dispatch(&self, error: &TransportError) -> AuthOutcome {
        let outcome = error.auth_outcome();
        match outcome {
            AuthOutcome::Unauthorized => {
                warn!(%error, "session rejected by server, clearing and redirecting");
                self.session_store.clear().await;
                self.navigator.navigate_to(&self.login_path).await;
            }
            AuthOutcome::Other => {
                warn!(%error, "transport failure reported to user");
                self.notifier.notify_error(&error.user_message()).await;
            }
        }
        outcome
    }
}
