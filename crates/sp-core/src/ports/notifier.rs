use async_trait::async_trait;

/// User-visible, non-blocking error reporting (toast-style).
///
/// Used for operation-local failures only; the view stays interactive
/// and partially populated while the notification is shown.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn notify_error(&self, message: &str);
}
