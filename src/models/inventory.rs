// src/models/inventory.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::{validate_not_blank, validate_not_negative, DraftForm};

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Groceries,
    Medicines,
    Vegetables,
    Stationery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Tablets,
    Pieces,
    Liters,
}

// Status de exibição. Nunca é armazenado: sai de `services::status::derive_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InventoryStatus {
    InStock,    // Vira "in-stock"
    LowStock,   // Vira "low-stock"
    OutOfStock, // Vira "out-of-stock"
    ExpiringSoon,
}

// --- Registro armazenado ---
// Só as entradas da regra de status (quantidade e validade) ficam aqui.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Basmati Rice")]
    pub name: String,
    pub category: Category,
    #[schema(example = 50)]
    pub quantity: u32,
    pub unit: Unit,
    #[schema(value_type = f64, example = 120.0)]
    pub price: Decimal,
    pub expiry_date: Option<NaiveDate>, // Data simples (Dia/Mês/Ano)
}

// --- Linha da tabela de estoque ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemView {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub unit: Unit,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub expiry_date: Option<NaiveDate>,
    pub status: InventoryStatus,
    // Ícone de alerta da tabela (0 < quantidade <= limite)
    pub low_stock_warning: bool,
    // Validade dentro da janela: a data aparece destacada
    pub expiry_highlighted: bool,
}

// Opções dos menus de filtro, na ordem em que aparecem no array.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryFacets {
    pub categories: Vec<Category>,
    pub statuses: Vec<InventoryStatus>,
}

// Quantidade guardada é u32: fora de 0..=u32::MAX o formulário recusa.
fn validate_quantity(quantity: i64) -> Result<(), ValidationError> {
    let message = if quantity < 0 {
        "A quantidade não pode ser negativa."
    } else if u32::try_from(quantity).is_err() {
        "A quantidade excede o limite."
    } else {
        return Ok(());
    };
    let mut err = ValidationError::new("range");
    err.add_param("min".into(), &0);
    err.add_param("max".into(), &u32::MAX);
    err.message = Some(message.into());
    Err(err)
}

// ---
// Rascunho do formulário de item (criar ou editar)
// ---
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDraft {
    #[validate(custom(function = "validate_not_blank", message = "Informe o nome do item."))]
    #[serde(default)]
    pub name: String,

    #[validate(required(message = "Selecione uma categoria."))]
    pub category: Option<Category>,

    #[validate(custom(function = "validate_quantity"))]
    #[serde(default)]
    pub quantity: i64,

    #[validate(required(message = "Selecione uma unidade."))]
    pub unit: Option<Unit>,

    #[validate(custom(function = "validate_not_negative", message = "O preço não pode ser negativo."))]
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: Decimal,

    pub expiry_date: Option<NaiveDate>,
}

impl DraftForm for InventoryDraft {
    const FIELD_ORDER: &'static [&'static str] = &["name", "category", "quantity", "unit", "price"];
}

impl InventoryDraft {
    /// Pré-preenche o formulário de edição.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: Some(item.category),
            quantity: i64::from(item.quantity),
            unit: Some(item.unit),
            price: item.price,
            expiry_date: item.expiry_date,
        }
    }

    /// Converte um rascunho já validado (`check`) em registro.
    pub(crate) fn into_item(self, id: String) -> Option<InventoryItem> {
        Some(InventoryItem {
            id,
            name: self.name.trim().to_string(),
            category: self.category?,
            quantity: u32::try_from(self.quantity).ok()?,
            unit: self.unit?,
            price: self.price,
            expiry_date: self.expiry_date,
        })
    }
}

// Resposta do "?add=true" / "?edit=<id>" da tela de estoque.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFormIntent {
    pub open: bool,
    pub editing_id: Option<String>,
    pub draft: Option<InventoryDraft>,
}
