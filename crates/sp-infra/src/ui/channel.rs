//! Channel bridges to the presentation layer
//!
//! Navigation and notification are effects the core fires and
//! forgets; these adapters queue them on mpsc channels for the
//! out-of-scope UI to drain (router pushes, toast rendering). A gone
//! receiver only means the UI shut down first, so sends are allowed
//! to fail quietly.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use sp_core::ports::{NavigatorPort, NotifierPort};

pub struct ChannelNavigator {
    tx: mpsc::Sender<String>,
}

impl ChannelNavigator {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NavigatorPort for ChannelNavigator {
    async fn navigate_to(&self, path: &str) {
        if self.tx.send(path.to_string()).await.is_err() {
            debug!(path, "navigation dropped, ui receiver gone");
        }
    }
}

pub struct ChannelNotifier {
    tx: mpsc::Sender<String>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotifierPort for ChannelNotifier {
    async fn notify_error(&self, message: &str) {
        if self.tx.send(message.to_string()).await.is_err() {
            debug!("notification dropped, ui receiver gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn navigation_reaches_the_receiver_in_order() {
        let (navigator, mut rx) = ChannelNavigator::new(8);
        navigator.navigate_to("/login").await;
        navigator.navigate_to("/app/home").await;
        assert_eq!(rx.recv().await.as_deref(), Some("/login"));
        assert_eq!(rx.recv().await.as_deref(), Some("/app/home"));
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_panic_the_sender() {
        let (notifier, rx) = ChannelNotifier::new(1);
        drop(rx);
        notifier.notify_error("Something went wrong!").await;
    }
}
