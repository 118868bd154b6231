// src/services/store_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::StoreRepository,
    models::stores::{StoreData, StoreStatus, StoreSummary},
    services::filter::{RecordFilter, StoreFilter},
};

#[derive(Clone)]
pub struct StoreService {
    repo: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: &StoreFilter) -> Result<Vec<StoreData>, AppError> {
        Ok(filter.apply(self.repo.list().await?))
    }

    pub async fn get(&self, id: &str) -> Result<StoreData, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Loja", id))
    }

    // Soma os contadores próprios de cada loja (não olha pedidos nem estoque).
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        let stores = self.repo.list().await?;
        Ok(StoreSummary {
            total_revenue: stores.iter().map(|s| s.revenue).sum::<Decimal>(),
            active_stores: stores.iter().filter(|s| s.status == StoreStatus::Active).count(),
            total_orders: stores.iter().map(|s| u64::from(s.orders)).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{seed, InMemoryStoreRepository},
        models::stores::StoreType,
        services::filter::FilterChoice,
    };

    fn service() -> StoreService {
        StoreService::new(Arc::new(InMemoryStoreRepository::new(seed::stores())))
    }

    #[tokio::test]
    async fn summary_adds_store_counters() {
        let summary = service().summary().await.unwrap();
        assert_eq!(summary.total_revenue, Decimal::from(326_000));
        assert_eq!(summary.active_stores, 3);
        assert_eq!(summary.total_orders, 1_240);
    }

    #[tokio::test]
    async fn filter_by_type_and_status() {
        let filter = StoreFilter {
            store_type: FilterChoice::Only(StoreType::Vegetables),
            status: FilterChoice::Only(StoreStatus::Active),
            ..Default::default()
        };
        assert!(service().list(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_store_is_not_found() {
        assert!(matches!(service().get("ST999").await, Err(AppError::NotFound { .. })));
    }
}
