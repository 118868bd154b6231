// src/services/navigation.rs

use crate::models::session::{Capability, NavRoute, Navigation, Session};

// As sete telas da barra lateral e a capacidade que cada uma exige.
const ROUTES: [(&str, &str, Capability); 7] = [
    ("Dashboard", "/", Capability::DashboardView),
    ("Inventory", "/inventory", Capability::InventoryRead),
    ("Orders", "/orders", Capability::OrdersRead),
    ("Analytics", "/analytics", Capability::AnalyticsView),
    ("Alerts", "/alerts", Capability::AlertsRead),
    ("Stores", "/stores", Capability::StoresRead),
    ("Settings", "/settings", Capability::SettingsManage),
];

/// "/" só casa exatamente; as outras rotas casam por prefixo.
pub fn is_active(route: &str, current: &str) -> bool {
    if route == "/" {
        return current == "/";
    }
    current.starts_with(route)
}

pub fn navigation_for(session: &Session, current: &str) -> Navigation {
    let routes = ROUTES
        .iter()
        .filter(|(_, _, capability)| session.can(*capability))
        .map(|&(title, url, _)| NavRoute { title, url, active: is_active(url, current) })
        .collect();

    Navigation { routes, sidebar_collapsed: session.sidebar_collapsed }
}
