// src/models/stores.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    Grocery,
    Medical,
    Stationery,
    Vegetables,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Inactive,
    Maintenance,
}

// Os contadores (receita, pedidos, estoque, nota) são campos próprios da loja,
// não agregados dos pedidos/itens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    #[schema(example = "ST001")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub manager: String,
    #[serde(rename = "type")]
    pub store_type: StoreType,
    pub status: StoreStatus,
    #[schema(value_type = f64)]
    pub revenue: Decimal,
    pub orders: u32,
    pub inventory: u32,
    #[schema(example = 4.8)]
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    pub active_stores: usize,
    pub total_orders: u64,
}
