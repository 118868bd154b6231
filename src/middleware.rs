pub mod capability;
pub mod session;
