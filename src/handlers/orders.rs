// src/handlers/orders.rs

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
    middleware::capability::{CapOrdersRead, CapOrdersWrite, RequireCapability},
    models::orders::{Order, OrderDraft, OrderFormIntent, OrderSummary},
    services::filter::OrderFilter,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct OrderFormParams {
    pub create: bool,
    pub edit: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(OrderFilter),
    responses(
        (status = 200, description = "Pedidos, mais recentes primeiro", body = Vec<Order>)
    ),
    security(("session_token" = []))
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersRead>,
    Query(filter): Query<OrderFilter>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.order_service.list(&filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/summary",
    tag = "Orders",
    responses(
        (status = 200, description = "Receita (só concluídos) e contagens", body = OrderSummary)
    ),
    security(("session_token" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersRead>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.order_service.summary().await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "ID do pedido (ORD-###)")),
    responses(
        (status = 200, description = "Pedido", body = Order),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersRead>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.order_service.get(&id).await?))
}

// ---
// Handler: create_order (entra no topo da lista como "pending")
// ---
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = OrderDraft,
    responses(
        (status = 201, description = "Pedido criado no topo da lista", body = Order),
        (status = 400, description = "Rascunho inválido; nada foi gravado")
    ),
    security(("session_token" = []))
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersWrite>,
    Json(draft): Json<OrderDraft>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state.order_service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "ID do pedido")),
    request_body = OrderDraft,
    responses(
        (status = 200, description = "Pedido reenviado e recalculado", body = Order),
        (status = 400, description = "Rascunho inválido"),
        (status = 404, description = "Pedido não encontrado")
    ),
    security(("session_token" = []))
)]
pub async fn update_order(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersWrite>,
    Path(id): Path<String>,
    Json(draft): Json<OrderDraft>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.order_service.update(&id, draft).await?))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = String, Path, description = "ID do pedido"), ConfirmParams),
    responses(
        (status = 200, description = "Pedido removido", body = Order),
        (status = 404, description = "Pedido não encontrado"),
        (status = 409, description = "Exclusão não confirmada")
    ),
    security(("session_token" = []))
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersWrite>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.order_service.delete(&id, params.confirm).await?))
}

#[utoipa::path(
    get,
    path = "/api/orders/draft",
    tag = "Orders",
    params(OrderFormParams),
    responses(
        (status = 200, description = "Estado inicial do formulário", body = OrderFormIntent)
    ),
    security(("session_token" = []))
)]
pub async fn get_form_intent(
    State(app_state): State<AppState>,
    _guard: RequireCapability<CapOrdersRead>,
    Query(params): Query<OrderFormParams>,
) -> Result<impl IntoResponse, AppError> {
    let intent = app_state
        .order_service
        .form_intent(params.create, params.edit.as_deref())
        .await?;
    Ok(Json(intent))
}
