pub mod memory;
pub mod seed;

pub mod inventory_repo;
pub use inventory_repo::{InMemoryInventoryRepository, InventoryRepository};
pub mod order_repo;
pub use order_repo::{InMemoryOrderRepository, OrderRepository};
pub mod store_repo;
pub use store_repo::{InMemoryStoreRepository, StoreRepository};
pub mod alert_repo;
pub use alert_repo::{AlertRepository, InMemoryAlertRepository};
pub mod settings_repo;
pub use settings_repo::{InMemorySettingsRepository, SettingsRepository};
pub mod analytics_repo;
pub use analytics_repo::{AnalyticsRepository, StaticAnalyticsRepository};
