use std::sync::Arc;

use super::{
    order_dto::InsertOneResult,
    order_models::{contains_nul, parse_order_id, without_id, Document, Order},
    order_repository::OrderRepository,
};
use crate::error::{AppError, Result};

pub const FETCH_ERROR: &str = "Error fetching data";
pub const INSERT_ERROR: &str = "Error al insertar nuevo pedido";
pub const UPDATE_ERROR: &str = "Error al actualizar el pedido";
pub const ORDER_NOT_FOUND: &str = "Pedido no encontrado";
pub const UNSUPPORTED_CHARACTER: &str = "El pedido contiene caracteres no admitidos (\\u0000)";

/// Service layer for order documents.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_orders(&self) -> Result<Vec<Document>> {
        let orders = self
            .repo
            .find_all()
            .await
            .map_err(AppError::store(FETCH_ERROR))?;

        Ok(orders.into_iter().map(Order::into_document).collect())
    }

    pub async fn create_order(&self, order: Document) -> Result<InsertOneResult> {
        let order = without_id(order);
        if contains_nul(&order) {
            return Err(AppError::BadRequest(UNSUPPORTED_CHARACTER));
        }

        let id = self
            .repo
            .insert_one(order)
            .await
            .map_err(AppError::store(INSERT_ERROR))?;

        tracing::debug!(order_id = %id, "Order created");
        Ok(InsertOneResult::new(id))
    }

    /// Merges `fields` into the order named by `raw_id`.
    ///
    /// A malformed id is reported like any other update failure.
    pub async fn update_order(&self, raw_id: &str, fields: Document) -> Result<()> {
        let id = parse_order_id(raw_id).map_err(AppError::store(UPDATE_ERROR))?;
        let fields = without_id(fields);
        if contains_nul(&fields) {
            return Err(AppError::BadRequest(UNSUPPORTED_CHARACTER));
        }

        let result = self
            .repo
            .update_one(id, fields)
            .await
            .map_err(AppError::store(UPDATE_ERROR))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(ORDER_NOT_FOUND));
        }

        tracing::debug!(order_id = %id, "Order updated");
        Ok(())
    }
}
