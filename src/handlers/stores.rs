// src/handlers/stores.rs

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::capability::{CapStoresRead, RequireCapability},
    models::stores::{StoreData, StoreSummary},
    services::filter::StoreFilter,
};

#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    params(StoreFilter),
    responses((status = 200, description = "Lojas filtradas", body = Vec<StoreData>)),
    security(("session_token" = []))
)]
pub async fn list_stores(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapStoresRead>,
    Query(filter): Query<StoreFilter>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.store_service.list(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/summary",
    tag = "Stores",
    responses((status = 200, description = "Somatórios da rede de lojas", body = StoreSummary)),
    security(("session_token" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapStoresRead>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.store_service.summary().await?))
}

#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    tag = "Stores",
    params(("id" = String, Path, description = "ID da loja (ST###)")),
    responses(
        (status = 200, description = "Loja", body = StoreData),
        (status = 404, description = "Loja não encontrada")
    ),
    security(("session_token" = []))
)]
pub async fn get_store(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapStoresRead>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.store_service.get(&id).await?))
}
