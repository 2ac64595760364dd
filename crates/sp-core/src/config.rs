//! Client configuration domain model

use serde::{Deserialize, Serialize};

/// Client configuration consumed by the application layer and the
/// transport adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub routes: RouteConfig,
}

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the plant API is reached under.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Paths handed to the navigator port. The routing table itself is
/// owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Login boundary unauthorized and unauthenticated flows redirect to.
    pub login_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://dev.sprout-ly.com/api".to_string(),
                timeout_secs: 5,
            },
            routes: RouteConfig {
                login_path: "/login".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = AppConfig::default();
        let raw = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn default_timeout_matches_transport_contract() {
        assert_eq!(AppConfig::default().api.timeout_secs, 5);
    }
}
