// src/services/settings_service.rs

use std::sync::Arc;

use crate::{common::error::AppError, db::SettingsRepository, models::settings::Settings};

#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> Result<Settings, AppError> {
        self.repo.get().await
    }

    pub async fn update(&self, settings: Settings) -> Result<Settings, AppError> {
        let saved = self.repo.save(settings).await?;
        tracing::info!("⚙️ Configurações salvas (tema {:?})", saved.theme);
        Ok(saved)
    }
}
