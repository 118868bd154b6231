pub mod alert_service;
pub mod analytics_service;
pub mod filter;
pub mod inventory_service;
pub mod navigation;
pub mod order_service;
pub mod session_service;
pub mod settings_service;
pub mod status;
pub mod store_service;
