// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::session::session_guard};

/// Monta o router completo. Tudo fora de `/api/health`, `/api/session/login`
/// e do documento OpenAPI passa pelo `session_guard`.
pub fn app(app_state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/", get(handlers::session::current))
        .route("/logout", post(handlers::session::logout));

    let navigation_routes = Router::new()
        .route("/", get(handlers::navigation::get_navigation))
        .route("/sidebar/toggle", post(handlers::navigation::toggle_sidebar));

    let inventory_routes = Router::new()
        .route(
            "/items",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        .route(
            "/items/{id}",
            get(handlers::inventory::get_item)
                .put(handlers::inventory::update_item)
                .delete(handlers::inventory::delete_item),
        )
        .route("/facets", get(handlers::inventory::get_facets))
        .route("/draft", get(handlers::inventory::get_form_intent));

    let order_routes = Router::new()
        .route(
            "/",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route("/summary", get(handlers::orders::get_summary))
        .route("/draft", get(handlers::orders::get_form_intent))
        .route(
            "/{id}",
            get(handlers::orders::get_order)
                .put(handlers::orders::update_order)
                .delete(handlers::orders::delete_order),
        );

    let store_routes = Router::new()
        .route("/", get(handlers::stores::list_stores))
        .route("/summary", get(handlers::stores::get_summary))
        .route("/{id}", get(handlers::stores::get_store));

    let alert_routes = Router::new()
        .route("/", get(handlers::alerts::list_alerts))
        .route("/summary", get(handlers::alerts::get_summary))
        .route("/{id}/read", post(handlers::alerts::mark_read));

    // Tudo aqui exige uma sessão aberta
    let protected = Router::new()
        .nest("/session", session_routes)
        .nest("/navigation", navigation_routes)
        .nest("/inventory", inventory_routes)
        .nest("/orders", order_routes)
        .nest("/stores", store_routes)
        .nest("/alerts", alert_routes)
        .route("/analytics", get(handlers::analytics::get_analytics))
        .route("/dashboard", get(handlers::analytics::get_dashboard))
        .route(
            "/reports/{title}/download",
            get(handlers::analytics::download_report),
        )
        .route(
            "/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            session_guard,
        ));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/session/login", post(handlers::session::login))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api", protected)
        .with_state(app_state)
}
