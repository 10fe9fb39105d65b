pub mod order_dto;
pub mod order_handlers;
pub mod order_models;
pub mod order_repository;
pub mod order_service;

pub use order_dto::InsertOneResult;
pub use order_handlers::{create_order, list_orders, update_order};
pub use order_models::Document;
pub use order_repository::{OrderRepository, PgOrderRepository};
pub use order_service::OrderService;
