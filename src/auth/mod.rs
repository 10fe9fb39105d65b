pub mod auth_dto;
pub mod auth_handlers;
pub mod auth_service;
pub mod password;

pub use auth_dto::LoginRequest;
pub use auth_handlers::login;
pub use auth_service::AuthService;
