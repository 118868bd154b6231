// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Session ---
        handlers::session::login,
        handlers::session::logout,
        handlers::session::current,
        handlers::navigation::get_navigation,
        handlers::navigation::toggle_sidebar,

        // --- INVENTORY ---
        handlers::inventory::list_items,
        handlers::inventory::get_facets,
        handlers::inventory::get_item,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,
        handlers::inventory::get_form_intent,

        // --- ORDERS ---
        handlers::orders::list_orders,
        handlers::orders::get_summary,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
        handlers::orders::get_form_intent,

        // --- Stores ---
        handlers::stores::list_stores,
        handlers::stores::get_summary,
        handlers::stores::get_store,

        // --- Alerts ---
        handlers::alerts::list_alerts,
        handlers::alerts::get_summary,
        handlers::alerts::mark_read,

        // --- Dashboard / Analytics ---
        handlers::analytics::get_analytics,
        handlers::analytics::get_dashboard,
        handlers::analytics::download_report,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
    ),
    components(
        schemas(
            // --- Session ---
            models::session::Capability,
            models::session::Session,
            models::session::LoginPayload,
            models::session::LoginResponse,
            models::session::NavRoute,
            models::session::Navigation,

            // --- Inventory ---
            models::inventory::Category,
            models::inventory::Unit,
            models::inventory::InventoryStatus,
            models::inventory::InventoryItem,
            models::inventory::InventoryItemView,
            models::inventory::InventoryFacets,
            models::inventory::InventoryDraft,
            models::inventory::InventoryFormIntent,

            // --- Orders ---
            models::orders::OrderStatus,
            models::orders::PaymentMethod,
            models::orders::Order,
            models::orders::OrderSummary,
            models::orders::LineItemDraft,
            models::orders::OrderDraft,
            models::orders::OrderFormIntent,

            // --- Stores / Alerts ---
            models::stores::StoreType,
            models::stores::StoreStatus,
            models::stores::StoreData,
            models::stores::StoreSummary,
            models::alerts::AlertType,
            models::alerts::AlertPriority,
            models::alerts::Alert,
            models::alerts::AlertSummary,

            // --- DASHBOARD ---
            models::analytics::AnalyticsOverview,
            models::analytics::KpiCard,
            models::analytics::MonthlySales,
            models::analytics::CategoryShare,
            models::analytics::TopProduct,
            models::analytics::Trend,
            models::analytics::DashboardOverview,
            models::analytics::StatCard,
            models::analytics::ChangeType,
            models::analytics::SalesPeriod,
            models::analytics::SalesPoint,
            models::analytics::CategorySales,
            models::analytics::ActivityItem,
            models::analytics::ActivityType,
            models::analytics::ActivityBadge,

            // --- Settings ---
            models::settings::Theme,
            models::settings::NotificationPreferences,
            models::settings::Settings,
        )
    ),
    tags(
        (name = "Session", description = "Sessão, capacidades e barra lateral"),
        (name = "Inventory", description = "Estoque com status calculado"),
        (name = "Orders", description = "Pedidos e rascunhos de pedido"),
        (name = "Stores", description = "Rede de lojas"),
        (name = "Alerts", description = "Alertas de estoque e sistema"),
        (name = "Analytics", description = "Indicadores fixos"),
        (name = "Dashboard", description = "Tela inicial e relatórios"),
        (name = "Settings", description = "Tema e notificações")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_token",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
