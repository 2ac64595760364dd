//! Sproutly application orchestration layer
//!
//! Use cases that coordinate the session store, the plant API, and
//! the presentation-layer ports: the protected-route gate, the
//! dashboard loader, and the shared transport-failure dispatcher.

pub mod failure;
pub mod usecases;

pub use failure::FailureDispatcher;
pub use usecases::dashboard::DashboardCoordinator;
pub use usecases::session::{InstallSession, Logout, SessionGate};
