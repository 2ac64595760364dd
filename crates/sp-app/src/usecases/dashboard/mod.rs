mod coordinator;
mod generation;

pub use coordinator::DashboardCoordinator;
