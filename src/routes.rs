use crate::{
    auth::{self, LoginRequest},
    dto::{ErrorResponse, MessageResponse, ServerErrorResponse},
    order::{self, InsertOneResult},
    state::AppState,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const LIVENESS_MESSAGE: &str = "Servidor de pedidos funcionando";

#[derive(OpenApi)]
#[openapi(
    paths(
        order::order_handlers::list_orders,
        order::order_handlers::create_order,
        order::order_handlers::update_order,
        auth::auth_handlers::login,
    ),
    components(
        schemas(
            LoginRequest,
            InsertOneResult,
            MessageResponse,
            ErrorResponse,
            ServerErrorResponse,
        )
    ),
    tags(
        (name = "pedidos", description = "Order endpoints"),
        (name = "auth", description = "Credential check")
    )
)]
struct ApiDoc;

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(liveness))
        .route("/pedidos", get(order::list_orders))
        .route("/nuevopedido", post(order::create_order))
        .route("/pedidos/:id", put(order::update_order))
        .route("/login", post(auth::login))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
