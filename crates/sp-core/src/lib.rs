//! # sp-core
//!
//! Core domain models and business logic for Sproutly.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod barrier;
pub mod config;
pub mod plant;
pub mod ports;
pub mod session;
pub mod transport;

// Re-export commonly used types at the crate root
pub use barrier::FetchBarrier;
pub use config::AppConfig;
pub use plant::{classify_moisture, Condition, MoistureReading, PlantRecord, PlantSummary};
pub use session::{AuthToken, GateState, Session, UserProfile};
pub use transport::{AuthOutcome, TransportError};
