// src/db/alert_repo.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::memory::{MemoryTable, Record},
    models::alerts::Alert,
};

impl Record for Alert {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait]
pub trait AlertRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Alert>, AppError>;

    /// Marca como lido. `None` se o ID não existe.
    async fn mark_read(&self, id: &str) -> Result<Option<Alert>, AppError>;
}

pub struct InMemoryAlertRepository {
    table: MemoryTable<Alert>,
}

impl InMemoryAlertRepository {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { table: MemoryTable::new(alerts, 0) }
    }
}

#[async_trait]
impl AlertRepository for InMemoryAlertRepository {
    async fn list(&self) -> Result<Vec<Alert>, AppError> {
        Ok(self.table.all().await)
    }

    async fn mark_read(&self, id: &str) -> Result<Option<Alert>, AppError> {
        Ok(self.table.modify(id, |alert| alert.is_read = true).await)
    }
}
