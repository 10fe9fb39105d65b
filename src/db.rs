use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the `pedidos` and `usuarios` collections when they don't exist yet.
/// Each row is an opaque JSONB document keyed by a UUID.
pub async fn ensure_collections(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS pedidos (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            data JSONB NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS usuarios (
            id UUID PRIMARY KEY,
            data JSONB NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS usuarios_usuario_idx ON usuarios ((data->>'Usuario'))")
        .execute(pool)
        .await?;

    Ok(())
}

/// Pool for the database-backed tests, which run with `cargo test -- --ignored`.
#[cfg(test)]
pub async fn test_pool() -> DbPool {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_pool(&database_url, 2).await.unwrap();
    // concurrent tests may race on CREATE TABLE; the retry sees the finished tables
    if ensure_collections(&pool).await.is_err() {
        ensure_collections(&pool).await.unwrap();
    }
    pool
}
