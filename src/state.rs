use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::order::{OrderService, PgOrderRepository};
use crate::user::PgUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub order_service: OrderService,
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(order_service: OrderService, auth_service: AuthService) -> Self {
        Self {
            order_service,
            auth_service,
        }
    }

    /// Wires the Postgres-backed repositories around one shared pool.
    pub fn from_pool(db: DbPool) -> Self {
        let order_repository = Arc::new(PgOrderRepository::new(db.clone()));
        let user_repository = Arc::new(PgUserRepository::new(db));

        Self::new(
            OrderService::new(order_repository),
            AuthService::new(user_repository),
        )
    }
}
