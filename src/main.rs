mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG from it reaches the subscriber.
    let dotenv = config::dotenv_problem(dotenvy::dotenv());
    tracing_subscriber::fmt::init();
    if let Some(e) = dotenv {
        tracing::warn!(error = %e, "ignoring unreadable .env");
    }

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    match &config.api_upstream {
        Some(upstream) => tracing::info!(%upstream, "forwarding /api/v1"),
        None => tracing::warn!("API_UPSTREAM not set; catalog and login requests will fail"),
    }

    let state = state::AppState::new(&config);
    let app = routes::app(state).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
