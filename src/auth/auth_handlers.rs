use axum::{extract::State, Json};

use super::auth_dto::LoginRequest;
use crate::{dto::MessageResponse, error::Result, extract::AppJson, state::AppState};

pub const LOGIN_OK: &str = "Login exitoso";

/// Check a username/password pair against the users collection
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = MessageResponse),
        (status = 400, description = "Malformed body", body = crate::dto::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Server failure", body = crate::dto::ServerErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(MessageResponse::new(LOGIN_OK)))
}
