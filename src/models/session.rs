// src/models/session.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// O que uma sessão pode acessar. Cada grupo de rotas exige uma capacidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum Capability {
    #[serde(rename = "dashboard:view")]
    DashboardView,
    #[serde(rename = "inventory:read")]
    InventoryRead,
    #[serde(rename = "inventory:write")]
    InventoryWrite,
    #[serde(rename = "orders:read")]
    OrdersRead,
    #[serde(rename = "orders:write")]
    OrdersWrite,
    #[serde(rename = "analytics:view")]
    AnalyticsView,
    #[serde(rename = "alerts:read")]
    AlertsRead,
    #[serde(rename = "alerts:write")]
    AlertsWrite,
    #[serde(rename = "stores:read")]
    StoresRead,
    #[serde(rename = "settings:manage")]
    SettingsManage,
}

impl Capability {
    pub const ALL: [Capability; 10] = [
        Capability::DashboardView,
        Capability::InventoryRead,
        Capability::InventoryWrite,
        Capability::OrdersRead,
        Capability::OrdersWrite,
        Capability::AnalyticsView,
        Capability::AlertsRead,
        Capability::AlertsWrite,
        Capability::StoresRead,
        Capability::SettingsManage,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Capability::DashboardView => "dashboard:view",
            Capability::InventoryRead => "inventory:read",
            Capability::InventoryWrite => "inventory:write",
            Capability::OrdersRead => "orders:read",
            Capability::OrdersWrite => "orders:write",
            Capability::AnalyticsView => "analytics:view",
            Capability::AlertsRead => "alerts:read",
            Capability::AlertsWrite => "alerts:write",
            Capability::StoresRead => "stores:read",
            Capability::SettingsManage => "settings:manage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub display_name: String,
    pub capabilities: BTreeSet<Capability>,
    pub started_at: DateTime<Utc>,
    // Só visual: lembra se a barra lateral está recolhida
    pub sidebar_collapsed: bool,
}

impl Session {
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

// Nenhuma credencial é verificada: o login só abre a sessão.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub display_name: Option<String>,
    // Ausente = todas as capacidades
    pub capabilities: Option<Vec<Capability>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NavRoute {
    pub title: &'static str,
    pub url: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub routes: Vec<NavRoute>,
    pub sidebar_collapsed: bool,
}
