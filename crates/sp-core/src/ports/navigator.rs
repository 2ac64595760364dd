use async_trait::async_trait;

/// Navigation capability consumed by the core.
///
/// Effect-only: the core never observes a result, and the routing
/// table behind the paths belongs to the presentation layer.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn navigate_to(&self, path: &str);
}
