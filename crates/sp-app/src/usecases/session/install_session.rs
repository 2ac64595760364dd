use std::sync::Arc;

use tracing::info;

use sp_core::ports::SessionStorePort;
use sp_core::session::Session;

/// Stores the session produced by the login exchange.
///
/// The exchange itself (form, token endpoint) lives outside this
/// core; this use case is only the write through the storage
/// boundary, after which the gate observes the user as logged in.
pub struct InstallSession {
    session_store: Arc<dyn SessionStorePort>,
}

impl InstallSession {
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    #[tracing::instrument(
        name = "usecase.install_session.execute",
        skip(self, session),
        fields(username = %session.profile.username)
    )]
    pub async fn execute(&self, session: Session) {
        self.session_store.set(session).await;
        info!("session installed");
    }
}
