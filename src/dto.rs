use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Shared response bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every order-route failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a login failure caused by the server rather than the credentials.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerErrorResponse {
    pub message: String,
    pub error: String,
}
