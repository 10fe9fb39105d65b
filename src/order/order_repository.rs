use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use super::order_models::{Document, Order, UpdateResult};
use crate::{db::DbPool, error::StoreError};

/// Persistence operations on the orders collection.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Every stored order, in insertion order.
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Stores `fields` as a new document and returns its assigned id.
    async fn insert_one(&self, fields: Document) -> Result<Uuid, StoreError>;

    /// Overwrites the top-level keys present in `fields`, leaving the rest untouched.
    async fn update_one(&self, id: Uuid, fields: Document) -> Result<UpdateResult, StoreError>;
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    data: Json<Document>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            id: row.id,
            fields: row.data.0,
        }
    }
}

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: DbPool,
}

impl PgOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query_as::<_, OrderRow>("SELECT id, data FROM pedidos ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn insert_one(&self, fields: Document) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO pedidos (id, data) VALUES ($1, $2)")
            .bind(id)
            .bind(Json(fields))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn update_one(&self, id: Uuid, fields: Document) -> Result<UpdateResult, StoreError> {
        // jsonb `||` replaces matching top-level keys and keeps the others
        let result = sqlx::query("UPDATE pedidos SET data = data || $2 WHERE id = $1")
            .bind(id)
            .bind(Json(fields))
            .execute(&self.pool)
            .await?;

        Ok(UpdateResult {
            matched_count: result.rows_affected(),
        })
    }
}
