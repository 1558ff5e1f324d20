use movie_catalog_api::api::AppState;
use movie_catalog_api::app;
use movie_catalog_api::config::AppConfig;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Movie Catalog API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Create application state with an empty catalog
    let state = AppState::new();

    // Build router with modular routes
    let app = app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET    /health                      - Health check");
    info!("   POST   /movies                      - Add a movie");
    info!("   GET    /movies/{{id}}                 - Get a movie");
    info!("   PATCH  /movies/{{id}}                 - Update a movie");
    info!("   DELETE /movies/{{id}}                 - Remove a movie");
    info!("   POST   /movies/{{id}}/rating          - Rate a movie");
    info!("   GET    /movies/{{id}}/rating          - Average rating");
    info!("   GET    /top-rated                   - Movies by average rating");
    info!("   GET    /movies/genre/{{genre}}        - Movies by genre");
    info!("   GET    /movies/director/{{director}}  - Movies by director");
    info!("   GET    /search/{{keyword}}            - Search titles");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
