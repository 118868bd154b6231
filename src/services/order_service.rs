// src/services/order_service.rs

use std::sync::Arc;

use anyhow::anyhow;
use rust_decimal::Decimal;

use crate::{
    common::{clock::Clock, error::AppError, validation::DraftForm},
    db::OrderRepository,
    models::orders::{Order, OrderDraft, OrderFormIntent, OrderStatus, OrderSummary},
    services::filter::{OrderFilter, RecordFilter},
};

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, AppError> {
        Ok(filter.apply(self.repo.list().await?))
    }

    // Cards do topo: sempre sobre todos os pedidos, nunca sobre o filtro.
    pub async fn summary(&self) -> Result<OrderSummary, AppError> {
        let orders = self.repo.list().await?;
        let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let total_revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .try_fold(Decimal::ZERO, |sum, o| sum.checked_add(o.total))
            .ok_or_else(|| anyhow!("receita total estourou o limite do Decimal"))?;

        Ok(OrderSummary {
            total_revenue,
            total_orders: orders.len(),
            completed: count(OrderStatus::Completed),
            pending: count(OrderStatus::Pending),
        })
    }

    pub async fn get(&self, id: &str) -> Result<Order, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pedido", id))
    }

    // --- CREATE ORDER ---
    // Os itens de linha só servem para calcular contagem e total; são descartados.
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, AppError> {
        draft.check().inspect_err(|e| tracing::warn!("Rascunho de pedido recusado: {}", e))?;

        let (item_count, total) = draft
            .totals()
            .ok_or_else(|| anyhow!("rascunho validado com total inválido"))?;
        let order = Order {
            id: self.repo.next_id().await?,
            customer_name: draft.customer_name.trim().to_string(),
            item_count,
            total,
            status: OrderStatus::Pending,
            date: self.clock.today(),
            payment_method: draft
                .payment_method
                .ok_or_else(|| anyhow!("rascunho validado sem forma de pagamento"))?,
        };
        let order = self.repo.insert(order).await?;

        tracing::info!("🛒 Pedido {} criado para '{}' (total {})", order.id, order.customer_name, order.total);
        Ok(order)
    }

    // --- UPDATE ORDER ---
    // O pedido não guarda itens: a edição reenvia a lista completa e o resumo
    // é recalculado. ID e data são mantidos.
    pub async fn update(&self, id: &str, draft: OrderDraft) -> Result<Order, AppError> {
        draft.check().inspect_err(|e| tracing::warn!("Edição do pedido {} recusada: {}", id, e))?;

        let existing = self.get(id).await?;
        let (item_count, total) = draft
            .totals()
            .ok_or_else(|| anyhow!("rascunho validado com total inválido"))?;
        let order = Order {
            customer_name: draft.customer_name.trim().to_string(),
            item_count,
            total,
            status: draft.status.unwrap_or(existing.status),
            payment_method: draft.payment_method.unwrap_or(existing.payment_method),
            ..existing
        };
        let order = self
            .repo
            .replace(order)
            .await?
            .ok_or_else(|| AppError::not_found("Pedido", id))?;

        tracing::info!("✏️ Pedido {} atualizado", order.id);
        Ok(order)
    }

    // --- DELETE ORDER ---
    pub async fn delete(&self, id: &str, confirmed: bool) -> Result<Order, AppError> {
        if !confirmed {
            return Err(AppError::DeletionNotConfirmed);
        }
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pedido", id))?;

        tracing::info!("🗑️ Pedido {} removido", removed.id);
        Ok(removed)
    }

    /// `?create=true` abre o formulário com uma linha vazia; `?edit=<id>`
    /// pré-preenche cliente e pagamento, mas sem itens (não são guardados).
    pub async fn form_intent(&self, create: bool, edit: Option<&str>) -> Result<OrderFormIntent, AppError> {
        if create {
            return Ok(OrderFormIntent {
                open: true,
                editing_id: None,
                draft: Some(OrderDraft::default()),
                line_items_available: true,
            });
        }

        let closed = OrderFormIntent {
            open: false,
            editing_id: None,
            draft: None,
            line_items_available: false,
        };
        let Some(id) = edit else {
            return Ok(closed);
        };

        Ok(match self.repo.find_by_id(id).await? {
            Some(order) => OrderFormIntent {
                open: true,
                editing_id: Some(order.id.clone()),
                draft: Some(OrderDraft {
                    customer_name: order.customer_name,
                    items: Vec::new(),
                    payment_method: Some(order.payment_method),
                    notes: String::new(),
                    status: Some(order.status),
                }),
                line_items_available: false,
            },
            None => closed,
        })
    }
}
