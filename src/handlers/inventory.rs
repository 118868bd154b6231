// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::ConfirmParams,
    middleware::capability::{CapInventoryRead, CapInventoryWrite, RequireCapability},
    models::inventory::{
        InventoryDraft, InventoryFacets, InventoryFormIntent, InventoryItem, InventoryItemView,
    },
    services::filter::InventoryFilter,
};

// `?add=true` ou `?edit=<id>` da tela de estoque
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct InventoryFormParams {
    pub add: bool,
    pub edit: Option<String>,
}

// ---
// Handler: list_items (busca + categoria + status, combinados com E)
// ---
#[utoipa::path(
    get,
    path = "/api/inventory/items",
    tag = "Inventory",
    params(InventoryFilter),
    responses(
        (status = 200, description = "Itens com status calculado", body = Vec<InventoryItemView>),
        (status = 403, description = "Sem a capacidade inventory:read")
    ),
    security(("session_token" = []))
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryRead>,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.inventory_service.list(&filter).await?;
    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/facets",
    tag = "Inventory",
    responses(
        (status = 200, description = "Categorias e status presentes no estoque", body = InventoryFacets)
    ),
    security(("session_token" = []))
)]
pub async fn get_facets(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryRead>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.inventory_service.facets().await?))
}

#[utoipa::path(
    get,
    path = "/api/inventory/items/{id}",
    tag = "Inventory",
    params(("id" = String, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item com status calculado", body = InventoryItemView),
        (status = 404, description = "Item não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn get_item(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryRead>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.inventory_service.get(&id).await?))
}

// ---
// Handler: create_item
// ---
#[utoipa::path(
    post,
    path = "/api/inventory/items",
    tag = "Inventory",
    request_body = InventoryDraft,
    responses(
        (status = 201, description = "Item criado no fim da lista", body = InventoryItemView),
        (status = 400, description = "Rascunho inválido; nada foi gravado")
    ),
    security(("session_token" = []))
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryWrite>,
    Json(draft): Json<InventoryDraft>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state.inventory_service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// ---
// Handler: update_item (substitui o item inteiro, mesmo ID)
// ---
#[utoipa::path(
    put,
    path = "/api/inventory/items/{id}",
    tag = "Inventory",
    params(("id" = String, Path, description = "ID do item")),
    request_body = InventoryDraft,
    responses(
        (status = 200, description = "Item substituído", body = InventoryItemView),
        (status = 400, description = "Rascunho inválido"),
        (status = 404, description = "Item não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryWrite>,
    Path(id): Path<String>,
    Json(draft): Json<InventoryDraft>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.inventory_service.update(&id, draft).await?))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/items/{id}",
    tag = "Inventory",
    params(("id" = String, Path, description = "ID do item"), ConfirmParams),
    responses(
        (status = 200, description = "Item removido", body = InventoryItem),
        (status = 404, description = "Item não encontrado"),
        (status = 409, description = "Exclusão não confirmada")
    ),
    security(("session_token" = []))
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryWrite>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    let removed = app_state.inventory_service.delete(&id, params.confirm).await?;
    Ok(Json(removed))
}

#[utoipa::path(
    get,
    path = "/api/inventory/draft",
    tag = "Inventory",
    params(InventoryFormParams),
    responses(
        (status = 200, description = "Estado inicial do formulário", body = InventoryFormIntent)
    ),
    security(("session_token" = []))
)]
pub async fn get_form_intent(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapInventoryRead>,
    Query(params): Query<InventoryFormParams>,
) -> Result<impl IntoResponse, AppError> {
    let intent = app_state
        .inventory_service
        .form_intent(params.add, params.edit.as_deref())
        .await?;
    Ok(Json(intent))
}
