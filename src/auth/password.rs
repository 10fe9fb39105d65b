use std::sync::OnceLock;

use crate::error::{AppError, Result};

pub const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

/// Checks `password` against a bcrypt hash. CPU-bound; call it off the async runtime.
///
/// An unparseable hash counts as a credential failure, not a server error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash).map_err(|_| AppError::Unauthorized(INVALID_CREDENTIALS))
}

pub(super) static UNKNOWN_USER_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Runs a full bcrypt comparison for a username with no stored hash, then fails.
///
/// Keeps "no such user" as slow as "wrong password".
pub fn verify_unknown_user(password: &str) -> Result<bool> {
    let hash = UNKNOWN_USER_HASH
        .get_or_init(|| bcrypt::hash("unknown-user", bcrypt::DEFAULT_COST).ok());

    if let Some(hash) = hash {
        let _ = bcrypt::verify(password, hash);
    }
    Ok(false)
}
