//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the
//! infrastructure implementations, keeping the coordination core
//! independent of storage, HTTP, and routing concerns.

mod navigator;
mod notifier;
mod plant_api;
mod session_store;

pub use navigator::NavigatorPort;
pub use notifier::NotifierPort;
pub use plant_api::PlantApiPort;
pub use session_store::SessionStorePort;
