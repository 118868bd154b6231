// src/db/store_repo.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::memory::{MemoryTable, Record},
    models::stores::StoreData,
};

impl Record for StoreData {
    fn id(&self) -> &str {
        &self.id
    }
}

// Lojas são só leitura.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StoreData>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<StoreData>, AppError>;
}

pub struct InMemoryStoreRepository {
    table: MemoryTable<StoreData>,
}

impl InMemoryStoreRepository {
    pub fn new(stores: Vec<StoreData>) -> Self {
        Self { table: MemoryTable::new(stores, 0) }
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn list(&self) -> Result<Vec<StoreData>, AppError> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<StoreData>, AppError> {
        Ok(self.table.find(id).await)
    }
}
