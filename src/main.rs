use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theplayerindex_nba_api::{app, AppState, BallDontLieClient, Config};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    let config = Config::from_env().expect("Invalid configuration");

    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()
        .expect("Failed to build HTTP client");

    let upstream = BallDontLieClient::new(http, &config.upstream_base_url, config.api_key.clone());
    if !upstream.has_api_key() {
        tracing::warn!(
            "BALLDONTLIE_API_KEY is not set. Data endpoints will fail until it is configured."
        );
    }

    let state = AppState {
        upstream,
        default_season: config.default_season.clone(),
    };

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!(
        "theplayerindex-nba-api listening on {} (upstream {}, timeout {:?})",
        addr,
        config.upstream_base_url,
        config.upstream_timeout
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server.");

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
