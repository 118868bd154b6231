// src/db/inventory_repo.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::memory::{MemoryTable, Record},
    models::inventory::InventoryItem,
};

impl Record for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

// O acesso a dados do estoque. As telas dependem deste trait, não do Vec.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<InventoryItem>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<InventoryItem>, AppError>;

    /// Próximo ID sequencial ("6", "7", ...).
    async fn next_id(&self) -> Result<String, AppError>;

    /// Acrescenta no fim da lista.
    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, AppError>;

    /// Substituição completa pelo ID. `None` se o ID não existe.
    async fn replace(&self, item: InventoryItem) -> Result<Option<InventoryItem>, AppError>;

    async fn delete(&self, id: &str) -> Result<Option<InventoryItem>, AppError>;
}

pub struct InMemoryInventoryRepository {
    table: MemoryTable<InventoryItem>,
}

impl InMemoryInventoryRepository {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        // IDs numéricos: continua a partir do maior já usado
        let last = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { table: MemoryTable::new(items, last) }
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, AppError> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<InventoryItem>, AppError> {
        Ok(self.table.find(id).await)
    }

    async fn next_id(&self) -> Result<String, AppError> {
        Ok(self.table.next_sequence().to_string())
    }

    async fn insert(&self, item: InventoryItem) -> Result<InventoryItem, AppError> {
        self.table.push_back(item.clone()).await;
        Ok(item)
    }

    async fn replace(&self, item: InventoryItem) -> Result<Option<InventoryItem>, AppError> {
        Ok(self.table.replace(item).await)
    }

    async fn delete(&self, id: &str) -> Result<Option<InventoryItem>, AppError> {
        Ok(self.table.remove(id).await)
    }
}
