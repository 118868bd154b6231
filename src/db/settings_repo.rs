// src/db/settings_repo.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{common::error::AppError, models::settings::Settings};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Settings, AppError>;

    async fn save(&self, settings: Settings) -> Result<Settings, AppError>;
}

#[derive(Default)]
pub struct InMemorySettingsRepository {
    settings: RwLock<Settings>,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get(&self) -> Result<Settings, AppError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: Settings) -> Result<Settings, AppError> {
        *self.settings.write().await = settings.clone();
        Ok(settings)
    }
}
