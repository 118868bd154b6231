// src/models/analytics.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Todos estes dados são fixos (mock). Nada é calculado a partir dos pedidos.

// 1. Tendência de vendas mensal
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlySales {
    pub month: String,
    #[schema(value_type = f64)]
    pub sales: Decimal,
    pub orders: u32,
}

// 2. Participação por categoria (em %)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryShare {
    pub name: String,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

// 3. Produtos de melhor desempenho
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopProduct {
    pub rank: usize,
    pub name: String,
    pub sales: u32,
    #[schema(value_type = f64)]
    pub revenue: Decimal,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

// Tela de Analytics completa
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub kpis: Vec<KpiCard>,
    pub sales_trend: Vec<MonthlySales>,
    pub category_distribution: Vec<CategoryShare>,
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

// Cards do dashboard; `route` é a tela aberta pelo clique.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub change_type: ChangeType,
    pub description: Option<String>,
    pub route: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    #[default]
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SalesPoint {
    pub name: String,
    #[schema(value_type = f64)]
    pub sales: Decimal,
    pub orders: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategorySales {
    pub name: String,
    pub value: u8,
    #[schema(value_type = f64)]
    pub sales: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Order,
    Inventory,
    Alert,
    Analytics,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityBadge {
    pub text: String,
    pub variant: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub time: String,
    pub badge: Option<ActivityBadge>,
    pub route: String,
}

impl ActivityType {
    pub fn route(self) -> &'static str {
        match self {
            ActivityType::Order => "/orders",
            ActivityType::Inventory => "/inventory",
            ActivityType::Alert => "/alerts",
            ActivityType::Analytics => "/analytics",
        }
    }
}

// Tela inicial: cards, gráfico do período, vendas por categoria e atividade.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub period: SalesPeriod,
    pub sales: Vec<SalesPoint>,
    pub category_sales: Vec<CategorySales>,
    pub recent_activity: Vec<ActivityItem>,
}

// Relatório em texto fixo para download.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Report {
    /// "Total Revenue" -> "total_revenue_report.txt"
    pub fn file_name(&self) -> String {
        let slug = self
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();
        format!("{}_report.txt", slug)
    }
}
