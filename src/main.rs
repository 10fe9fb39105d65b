mod auth;
mod config;
mod db;
mod dto;
mod error;
mod extract;
mod order;
mod routes;
mod state;
#[cfg(test)]
mod testing;
mod user;

use anyhow::Context;
use config::Config;
use db::{create_pool, ensure_collections};
use routes::create_router;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,order_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // The listener is only bound once the store is reachable
    tracing::info!("Connecting to database...");
    let db = create_pool(&config.database_url, config.max_connections)
        .await
        .context("Error connecting to the database")?;
    ensure_collections(&db)
        .await
        .context("Error preparing the pedidos/usuarios collections")?;
    tracing::info!("Connected to database");

    let app = create_router(AppState::from_pool(db));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Error binding {}", addr))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
