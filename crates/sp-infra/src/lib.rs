//! Infrastructure adapters for Sproutly
//!
//! Concrete implementations of the sp-core ports: file-backed session
//! persistence, the HTTP plant API client, and channel bridges to the
//! presentation layer.

pub mod api;
pub mod config;
pub mod session;
pub mod ui;

pub use api::HttpPlantApi;
pub use config::FileConfigRepository;
pub use session::FileSessionStore;
pub use ui::{ChannelNavigator, ChannelNotifier};
