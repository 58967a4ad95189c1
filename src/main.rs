use relief::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let app = router::routes().with_state(AppState { db });

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
