use std::sync::Arc;

use tracing::info;

use sp_core::ports::{NavigatorPort, SessionStorePort};

use crate::usecases::dashboard::DashboardCoordinator;

/// Tears down the authenticated state.
///
/// Discards the current dashboard render generation first, so
/// per-plant fetches still in flight settle against abandoned state
/// and mutate nothing, then clears the persisted session and
/// navigates to the login boundary.
pub struct Logout {
    session_store: Arc<dyn SessionStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    dashboard: Arc<DashboardCoordinator>,
    login_path: String,
}

impl Logout {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        dashboard: Arc<DashboardCoordinator>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session_store,
            navigator,
            dashboard,
            login_path: login_path.into(),
        }
    }

    #[tracing::instrument(name = "usecase.logout.execute", skip(self))]
    pub async fn execute(&self) {
        self.dashboard.invalidate().await;
        self.session_store.clear().await;
        self.navigator.navigate_to(&self.login_path).await;
        info!("logged out");
    }
}
