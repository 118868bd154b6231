// src/services/inventory_service.rs

use std::sync::Arc;

use anyhow::anyhow;
use chrono::NaiveDate;

use crate::{
    common::{clock::Clock, error::AppError, validation::DraftForm},
    db::InventoryRepository,
    models::inventory::{
        InventoryDraft, InventoryFacets, InventoryFormIntent, InventoryItem, InventoryItemView,
    },
    services::{
        filter::{InventoryFilter, RecordFilter},
        status::StatusRules,
    },
};

#[derive(Clone)]
pub struct InventoryService {
    repo: Arc<dyn InventoryRepository>,
    rules: StatusRules,
    clock: Arc<dyn Clock>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn InventoryRepository>, rules: StatusRules, clock: Arc<dyn Clock>) -> Self {
        Self { repo, rules, clock }
    }

    // O status é calculado aqui, na leitura, nunca guardado.
    fn to_view(&self, item: InventoryItem, today: NaiveDate) -> InventoryItemView {
        InventoryItemView {
            status: self.rules.derive_status(item.quantity, item.expiry_date, today),
            low_stock_warning: self.rules.low_stock_warning(item.quantity),
            expiry_highlighted: self.rules.is_expiring(item.expiry_date, today),
            id: item.id,
            name: item.name,
            category: item.category,
            quantity: item.quantity,
            unit: item.unit,
            price: item.price,
            expiry_date: item.expiry_date,
        }
    }

    async fn views(&self) -> Result<Vec<InventoryItemView>, AppError> {
        let today = self.clock.today();
        let items = self.repo.list().await?;
        Ok(items.into_iter().map(|item| self.to_view(item, today)).collect())
    }

    pub async fn list(&self, filter: &InventoryFilter) -> Result<Vec<InventoryItemView>, AppError> {
        Ok(filter.apply(self.views().await?))
    }

    /// Categorias e status presentes, na ordem em que aparecem.
    pub async fn facets(&self) -> Result<InventoryFacets, AppError> {
        let mut facets = InventoryFacets { categories: Vec::new(), statuses: Vec::new() };
        for view in self.views().await? {
            if !facets.categories.contains(&view.category) {
                facets.categories.push(view.category);
            }
            if !facets.statuses.contains(&view.status) {
                facets.statuses.push(view.status);
            }
        }
        Ok(facets)
    }

    pub async fn get(&self, id: &str) -> Result<InventoryItemView, AppError> {
        let item = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item", id))?;
        Ok(self.to_view(item, self.clock.today()))
    }

    // --- CREATE ITEM ---
    pub async fn create(&self, draft: InventoryDraft) -> Result<InventoryItemView, AppError> {
        draft.check().inspect_err(|e| tracing::warn!("Rascunho de item recusado: {}", e))?;

        let id = self.repo.next_id().await?;
        let item = draft
            .into_item(id)
            .ok_or_else(|| anyhow!("rascunho validado sem categoria/unidade"))?;
        let item = self.repo.insert(item).await?;

        tracing::info!("📦 Item '{}' criado (id {})", item.name, item.id);
        Ok(self.to_view(item, self.clock.today()))
    }

    // --- UPDATE ITEM (substituição completa) ---
    pub async fn update(&self, id: &str, draft: InventoryDraft) -> Result<InventoryItemView, AppError> {
        draft.check().inspect_err(|e| tracing::warn!("Edição do item {} recusada: {}", id, e))?;

        let item = draft
            .into_item(id.to_string())
            .ok_or_else(|| anyhow!("rascunho validado sem categoria/unidade"))?;
        let item = self
            .repo
            .replace(item)
            .await?
            .ok_or_else(|| AppError::not_found("Item", id))?;

        tracing::info!("✏️ Item {} atualizado", item.id);
        Ok(self.to_view(item, self.clock.today()))
    }

    // --- DELETE ITEM ---
    // Sem confirmação nada é removido.
    pub async fn delete(&self, id: &str, confirmed: bool) -> Result<InventoryItem, AppError> {
        if !confirmed {
            return Err(AppError::DeletionNotConfirmed);
        }
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item", id))?;

        tracing::info!("🗑️ Item {} removido", removed.id);
        Ok(removed)
    }

    /// `?add=true` abre o formulário vazio; `?edit=<id>` abre pré-preenchido.
    /// ID desconhecido deixa o formulário fechado.
    pub async fn form_intent(&self, add: bool, edit: Option<&str>) -> Result<InventoryFormIntent, AppError> {
        if add {
            return Ok(InventoryFormIntent {
                open: true,
                editing_id: None,
                draft: Some(InventoryDraft::default()),
            });
        }

        let closed = InventoryFormIntent { open: false, editing_id: None, draft: None };
        let Some(id) = edit else {
            return Ok(closed);
        };

        Ok(match self.repo.find_by_id(id).await? {
            Some(item) => InventoryFormIntent {
                open: true,
                editing_id: Some(item.id.clone()),
                draft: Some(InventoryDraft::from_item(&item)),
            },
            None => closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::clock::FixedClock,
        db::{seed, InMemoryInventoryRepository},
        models::inventory::{Category, InventoryStatus, Unit},
        services::filter::FilterChoice,
    };
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 19).unwrap()
    }

    fn service() -> InventoryService {
        InventoryService::new(
            Arc::new(InMemoryInventoryRepository::new(seed::inventory())),
            StatusRules::default(),
            Arc::new(FixedClock(today())),
        )
    }

    fn draft(quantity: i64, expiry_date: Option<NaiveDate>) -> InventoryDraft {
        InventoryDraft {
            name: "Green Tea".into(),
            category: Some(Category::Groceries),
            quantity,
            unit: Some(Unit::Pieces),
            price: Decimal::from(80),
            expiry_date,
        }
    }

    #[tokio::test]
    async fn created_items_get_derived_status() {
        let service = service();
        assert_eq!(service.create(draft(0, None)).await.unwrap().status, InventoryStatus::OutOfStock);
        assert_eq!(service.create(draft(10, None)).await.unwrap().status, InventoryStatus::LowStock);

        let soon = Some(today() + Duration::days(10));
        assert_eq!(service.create(draft(50, soon)).await.unwrap().status, InventoryStatus::ExpiringSoon);
    }

    #[tokio::test]
    async fn create_appends_with_next_sequential_id() {
        let service = service();
        let created = service.create(draft(20, None)).await.unwrap();
        assert_eq!(created.id, "6");

        let all = service.list(&InventoryFilter::default()).await.unwrap();
        assert_eq!(all.last().map(|v| v.id.as_str()), Some("6"));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let service = service();
        service.delete("5", true).await.unwrap();
        let created = service.create(draft(20, None)).await.unwrap();
        assert_eq!(created.id, "6");
    }

    #[tokio::test]
    async fn negative_quantity_never_reaches_the_list() {
        let service = service();
        let err = service.create(draft(-3, None)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
        assert_eq!(service.list(&InventoryFilter::default()).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn oversized_quantity_is_rejected_and_not_stored() {
        let service = service();
        let err = service.create(draft(5_000_000_000, None)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
        assert_eq!(service.list(&InventoryFilter::default()).await.unwrap().len(), 5);

        let err = service.update("1", draft(5_000_000_000, None)).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
        assert_eq!(service.get("1").await.unwrap().quantity, 50);
    }

    #[tokio::test]
    async fn update_replaces_only_the_target() {
        let service = service();
        let before = service.list(&InventoryFilter::default()).await.unwrap();

        let updated = service.update("2", draft(40, None)).await.unwrap();
        assert_eq!(updated.name, "Green Tea");
        assert_eq!(updated.status, InventoryStatus::InStock);

        let after = service.list(&InventoryFilter::default()).await.unwrap();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old.id, new.id);
            if old.id != "2" {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let err = service().update("99", draft(1, None)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn unconfirmed_delete_is_a_no_op() {
        let service = service();
        let err = service.delete("1", false).await.unwrap_err();
        assert!(matches!(err, AppError::DeletionNotConfirmed));
        assert!(service.get("1").await.is_ok());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_id() {
        let service = service();
        service.delete("3", true).await.unwrap();
        let ids: Vec<String> = service
            .list(&InventoryFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
    }

    #[tokio::test]
    async fn list_filters_by_derived_status() {
        let service = service();
        let filter = InventoryFilter {
            status: FilterChoice::Only(InventoryStatus::LowStock),
            ..Default::default()
        };
        let low = service.list(&filter).await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Wheat Flour");
        assert!(low[0].low_stock_warning);
    }

    #[tokio::test]
    async fn facets_follow_first_seen_order() {
        let facets = service().facets().await.unwrap();
        assert_eq!(
            facets.categories,
            vec![Category::Groceries, Category::Medicines, Category::Vegetables, Category::Stationery]
        );
        assert_eq!(facets.statuses[0], InventoryStatus::InStock);
        assert!(facets.statuses.contains(&InventoryStatus::LowStock));
    }

    #[tokio::test]
    async fn form_intent_prefills_edit_and_ignores_unknown_ids() {
        let service = service();

        let add = service.form_intent(true, Some("1")).await.unwrap();
        assert!(add.open);
        assert_eq!(add.editing_id, None);
        assert_eq!(add.draft, Some(InventoryDraft::default()));

        let edit = service.form_intent(false, Some("2")).await.unwrap();
        assert_eq!(edit.editing_id.as_deref(), Some("2"));
        assert_eq!(edit.draft.map(|d| d.quantity), Some(5));

        let unknown = service.form_intent(false, Some("404")).await.unwrap();
        assert!(!unknown.open);

        let none = service.form_intent(false, None).await.unwrap();
        assert!(!none.open);
    }
}
