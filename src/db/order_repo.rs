// src/db/order_repo.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    db::memory::{MemoryTable, Record},
    models::orders::Order,
};

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Mais recentes primeiro.
    async fn list(&self) -> Result<Vec<Order>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError>;

    /// Próximo número de pedido ("ORD-005", ...).
    async fn next_id(&self) -> Result<String, AppError>;

    /// Pedido novo entra no topo da lista.
    async fn insert(&self, order: Order) -> Result<Order, AppError>;

    async fn replace(&self, order: Order) -> Result<Option<Order>, AppError>;

    async fn delete(&self, id: &str) -> Result<Option<Order>, AppError>;
}

pub struct InMemoryOrderRepository {
    table: MemoryTable<Order>,
}

const ORDER_PREFIX: &str = "ORD-";

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        let last = orders
            .iter()
            .filter_map(|order| order.id.strip_prefix(ORDER_PREFIX))
            .filter_map(|number| number.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { table: MemoryTable::new(orders, last) }
    }
}

pub fn format_order_id(sequence: u64) -> String {
    format!("{}{:03}", ORDER_PREFIX, sequence)
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError> {
        Ok(self.table.find(id).await)
    }

    async fn next_id(&self) -> Result<String, AppError> {
        Ok(format_order_id(self.table.next_sequence()))
    }

    async fn insert(&self, order: Order) -> Result<Order, AppError> {
        self.table.push_front(order.clone()).await;
        Ok(order)
    }

    async fn replace(&self, order: Order) -> Result<Option<Order>, AppError> {
        Ok(self.table.replace(order).await)
    }

    async fn delete(&self, id: &str) -> Result<Option<Order>, AppError> {
        Ok(self.table.remove(id).await)
    }
}
