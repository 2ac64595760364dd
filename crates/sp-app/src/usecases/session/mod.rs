mod gate;
mod install_session;
mod logout;

pub use gate::SessionGate;
pub use install_session::InstallSession;
pub use logout::Logout;
