use serde::Deserialize;

/// Stored credential record. Documents may carry other fields; only these two are read.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(rename = "Usuario")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password_hash: String,
}
