use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::TripPlannerConfig;
use crate::dispatcher::Dispatcher;
use crate::pages::SessionStore;
use crate::{api, llm, pages};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<TripPlannerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(dispatcher: Dispatcher, config: TripPlannerConfig) -> Self {
        let sessions = SessionStore::new(
            config.planner.max_sessions,
            config.planner.multi_country_cap,
        );
        Self {
            dispatcher,
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

/// The full application router with its middleware stack
pub fn app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds.into());
    let body_limit = state.config.server.body_limit_kb as usize * 1024;
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(pages::router())
        .nest("/api", api::router())
        .route("/health", get(health))
        .layer(TimeoutLayer::new(timeout))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: TripPlannerConfig) -> Result<()> {
    let client = llm::client_from_config(&config).context("Failed to create model client")?;
    info!(
        "Using {} model '{}'",
        client.provider(),
        config.model.model
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.server.host))?;
    let tls_paths = config
        .server
        .tls_cert_path
        .clone()
        .zip(config.server.tls_key_path.clone());

    let app = app(AppState::new(Dispatcher::new(client), config));

    if let Some((cert, key)) = tls_paths {
        #[cfg(feature = "tls")]
        {
            let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert, &key)
                .await
                .with_context(|| format!("Failed to load TLS certificate {}", cert.display()))?;
            info!("Web server running at https://{addr}");
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await
                .context("Web server failed")?;
            return Ok(());
        }
        #[cfg(not(feature = "tls"))]
        tracing::warn!(
            "TLS paths {} and {} are configured but the tls feature is disabled; serving plain HTTP",
            cert.display(),
            key.display()
        );
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Web server running at http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
