mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;
mod state;
mod store;
mod validation;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;
    let pool = db::init_pool(&config).await?;
    let state = state::AppState::from_pool(pool);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "motorpool listening");
    axum::serve(listener, app).await?;
    Ok(())
}
