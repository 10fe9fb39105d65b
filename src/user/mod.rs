pub mod user_models;
pub mod user_repository;

pub use user_models::User;
pub use user_repository::{PgUserRepository, UserRepository};
