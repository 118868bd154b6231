// src/services/alert_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::AlertRepository,
    models::alerts::{Alert, AlertPriority, AlertSummary},
    services::filter::{AlertFilter, RecordFilter},
};

#[derive(Clone)]
pub struct AlertService {
    repo: Arc<dyn AlertRepository>,
}

impl AlertService {
    pub fn new(repo: Arc<dyn AlertRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: &AlertFilter) -> Result<Vec<Alert>, AppError> {
        Ok(filter.apply(self.repo.list().await?))
    }

    pub async fn summary(&self) -> Result<AlertSummary, AppError> {
        let alerts = self.repo.list().await?;
        Ok(AlertSummary {
            unread: alerts.iter().filter(|a| !a.is_read).count(),
            high_priority: alerts.iter().filter(|a| a.priority == AlertPriority::High).count(),
            action_required: alerts.iter().filter(|a| a.action_required).count(),
        })
    }

    pub async fn mark_read(&self, id: &str) -> Result<Alert, AppError> {
        let alert = self
            .repo
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Alerta", id))?;
        tracing::info!("🔔 Alerta {} marcado como lido", alert.id);
        Ok(alert)
    }
}
