//! Protected-route session gate
//!
//! Decides, on each protected-route entry, whether protected content
//! may render. The gate performs no network calls; its only
//! dependency is the session store, which is infallible by contract.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use sp_core::ports::{NavigatorPort, SessionStorePort};
use sp_core::session::GateState;

pub struct SessionGate {
    session_store: Arc<dyn SessionStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    login_path: String,
    state: watch::Sender<GateState>,
}

impl SessionGate {
    pub fn new(
        session_store: Arc<dyn SessionStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session_store,
            navigator,
            login_path: login_path.into(),
            state: watch::Sender::new(GateState::Checking),
        }
    }

    /// Observable gate state. Starts at `Checking`, and every
    /// `evaluate` call passes through `Checking` again before
    /// resolving, so subscribers can render a neutral placeholder
    /// while the store read is in flight.
    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Evaluates the gate for one protected-route entry.
    ///
    /// Resolves to `Authenticated` when the store holds a session,
    /// otherwise to `Unauthenticated` with exactly one redirect to
    /// the login boundary. Protected content may only mount on
    /// `Authenticated`.
    #[tracing::instrument(name = "usecase.session_gate.evaluate", skip(self))]
    pub async fn evaluate(&self) -> GateState {
        self.state.send_replace(GateState::Checking);

        let session = self.session_store.get().await;
        let resolved = GateState::resolve(session.as_ref());
        self.state.send_replace(resolved);

        if resolved == GateState::Unauthenticated {
            debug!("no session, redirecting to login");
            self.navigator.navigate_to(&self.login_path).await;
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use tokio::sync::oneshot;

    use sp_core::session::{AuthToken, Session, UserProfile};

    mock! {
        pub Store {}

        #[async_trait]
        impl SessionStorePort for Store {
            async fn get(&self) -> Option<Session>;
            async fn set(&self, session: Session);
            async fn clear(&self);
        }
    }

    mock! {
        pub Navigator {}

        #[async_trait]
        impl NavigatorPort for Navigator {
            async fn navigate_to(&self, path: &str);
        }
    }

    /// Store whose reads resolve only when their scripted oneshot
    /// sender fires, so a test can hold `evaluate` open mid-read.
    #[derive(Default)]
    struct ScriptedStore {
        reads: tokio::sync::Mutex<std::collections::VecDeque<oneshot::Receiver<Option<Session>>>>,
    }

    #[async_trait]
    impl SessionStorePort for ScriptedStore {
        async fn get(&self) -> Option<Session> {
            let rx = self
                .reads
                .lock()
                .await
                .pop_front()
                .expect("store read not scripted");
            rx.await.expect("store script dropped")
        }

        async fn set(&self, _session: Session) {}

        async fn clear(&self) {}
    }

    fn session() -> Session {
        Session::new(
            AuthToken::new("tok"),
            UserProfile {
                id: "u-1".into(),
                display_name: "Alice".into(),
                username: "alice_s".into(),
                device_id: "dev-1".into(),
            },
        )
    }

    #[tokio::test]
    async fn present_session_authenticates_without_redirect() {
        let mut store = MockStore::new();
        store.expect_get().times(1).return_const(Some(session()));

        let mut navigator = MockNavigator::new();
        navigator.expect_navigate_to().times(0);

        let gate = SessionGate::new(Arc::new(store), Arc::new(navigator), "/login");
        assert_eq!(gate.evaluate().await, GateState::Authenticated);
        assert_eq!(*gate.subscribe().borrow(), GateState::Authenticated);
    }

    #[tokio::test]
    async fn absent_session_redirects_exactly_once() {
        let mut store = MockStore::new();
        store.expect_get().times(1).return_const(None);

        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate_to()
            .withf(|path| path == "/login")
            .times(1)
            .return_const(());

        let gate = SessionGate::new(Arc::new(store), Arc::new(navigator), "/login");
        assert_eq!(gate.evaluate().await, GateState::Unauthenticated);
    }

    #[tokio::test]
    async fn subscribers_start_on_checking() {
        let store = MockStore::new();
        let navigator = MockNavigator::new();
        let gate = SessionGate::new(Arc::new(store), Arc::new(navigator), "/login");
        assert_eq!(*gate.subscribe().borrow(), GateState::Checking);
    }

    #[tokio::test]
    async fn subscribers_observe_checking_while_the_store_read_is_in_flight() {
        let store = Arc::new(ScriptedStore::default());
        let (first, rx) = oneshot::channel();
        first.send(Some(session())).unwrap();
        store.reads.lock().await.push_back(rx);
        let (second, rx) = oneshot::channel();
        store.reads.lock().await.push_back(rx);

        let mut navigator = MockNavigator::new();
        navigator.expect_navigate_to().times(0);
        let gate = Arc::new(SessionGate::new(store, Arc::new(navigator), "/login"));

        let mut states = gate.subscribe();
        assert_eq!(gate.evaluate().await, GateState::Authenticated);
        states.borrow_and_update();

        // Re-entry drops back to Checking while the second store read
        // is held open, and only then resolves.
        let reentry = tokio::spawn({
            let gate = Arc::clone(&gate);
            async move { gate.evaluate().await }
        });
        states.changed().await.unwrap();
        assert_eq!(*states.borrow_and_update(), GateState::Checking);

        second.send(Some(session())).unwrap();
        states.changed().await.unwrap();
        assert_eq!(*states.borrow_and_update(), GateState::Authenticated);
        assert_eq!(reentry.await.unwrap(), GateState::Authenticated);
    }

    #[tokio::test]
    async fn each_evaluation_is_entered_fresh() {
        let mut store = MockStore::new();
        let mut sessions = vec![None, Some(session())].into_iter();
        store
            .expect_get()
            .times(2)
            .returning(move || sessions.next().unwrap());

        let mut navigator = MockNavigator::new();
        navigator.expect_navigate_to().times(1).return_const(());

        let gate = SessionGate::new(Arc::new(store), Arc::new(navigator), "/login");
        assert_eq!(gate.evaluate().await, GateState::Unauthenticated);
        // Login happened in between; re-entry must re-query the store.
        assert_eq!(gate.evaluate().await, GateState::Authenticated);
    }
}
