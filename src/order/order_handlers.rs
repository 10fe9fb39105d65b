use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::order_models::Document;
use crate::{dto::MessageResponse, error::Result, extract::AppJson, state::AppState};

pub const ORDER_UPDATED: &str = "Pedido actualizado exitosamente";

/// List every stored order
#[utoipa::path(
    get,
    path = "/pedidos",
    responses(
        (status = 200, description = "All orders, each with its `_id`", body = [Object]),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse)
    ),
    tag = "pedidos"
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders))
}

/// Store a new order exactly as submitted
#[utoipa::path(
    post,
    path = "/nuevopedido",
    request_body = Object,
    responses(
        (status = 201, description = "Order stored", body = crate::order::order_dto::InsertOneResult),
        (status = 400, description = "Malformed body or NUL character in a string", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse)
    ),
    tag = "pedidos"
)]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Document>,
) -> Result<impl IntoResponse> {
    let result = state.order_service.create_order(payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Overwrite the given fields of an order
#[utoipa::path(
    put,
    path = "/pedidos/{id}",
    params(
        ("id" = String, Path, description = "Order id")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "Malformed body or NUL character in a string", body = crate::dto::ErrorResponse),
        (status = 404, description = "Order not found", body = crate::dto::ErrorResponse),
        (status = 500, description = "Malformed id or store failure", body = crate::dto::ErrorResponse)
    ),
    tag = "pedidos"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    AppJson(payload): AppJson<Document>,
) -> Result<Json<MessageResponse>> {
    state.order_service.update_order(&order_id, payload).await?;
    Ok(Json(MessageResponse::new(ORDER_UPDATED)))
}
