//! In-memory repositories used by the router tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    auth::AuthService,
    error::StoreError,
    order::{
        order_models::{Order, UpdateResult},
        Document, OrderRepository, OrderService,
    },
    routes::create_router,
    state::AppState,
    user::{User, UserRepository},
};

pub fn app(orders: Arc<dyn OrderRepository>, users: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(
        OrderService::new(orders),
        AuthService::new(users),
    ))
}

#[derive(Default)]
pub struct MemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderRepository {
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn insert_one(&self, fields: Document) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.orders.write().await.push(Order { id, fields });
        Ok(id)
    }

    async fn update_one(&self, id: Uuid, fields: Document) -> Result<UpdateResult, StoreError> {
        let mut orders = self.orders.write().await;
        let Some(order) = orders.iter_mut().find(|order| order.id == id) else {
            return Ok(UpdateResult { matched_count: 0 });
        };

        order.fields.extend(fields);
        Ok(UpdateResult { matched_count: 1 })
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Vec<User>,
}

impl MemoryUserRepository {
    pub fn with_user(username: &str, password: &str) -> Self {
        Self {
            users: vec![User {
                username: username.to_string(),
                password_hash: bcrypt::hash(password, 4).unwrap(),
            }],
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingRepository;

#[async_trait]
impl OrderRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert_one(&self, _fields: Document) -> Result<Uuid, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update_one(&self, _id: Uuid, _fields: Document) -> Result<UpdateResult, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
