pub mod alerts;
pub mod analytics;
pub mod inventory;
pub mod orders;
pub mod session;
pub mod settings;
pub mod stores;
