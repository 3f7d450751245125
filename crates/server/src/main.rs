use std::{net::SocketAddr, sync::Arc, time::Instant};

use anyhow::Context;
use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::error::{ApiError, ErrorCode};
use tracing::{info, warn};
use url::Url;

mod assets;
mod config;
mod proxy;

use config::{load_settings, Environment, Settings};

/// Request log lines longer than this are clipped with an ellipsis.
const MAX_LOG_LINE_CHARS: usize = 80;

#[derive(Clone)]
struct AppState {
    settings: Arc<Settings>,
    dev_base: Arc<Url>,
    http: reqwest::Client,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    if settings.environment == Environment::Production && !settings.static_dir.exists() {
        warn!(
            static_dir = %settings.static_dir.display(),
            "static directory missing; run sitegen before serving"
        );
    }
    let dev_base = Url::parse(&settings.dev_server_url).with_context(|| {
        format!(
            "invalid dev server url '{url}'",
            url = settings.dev_server_url
        )
    })?;

    let addr: SocketAddr = settings.bind_addr.parse().with_context(|| {
        format!("invalid bind address '{addr}'", addr = settings.bind_addr)
    })?;
    let state = AppState {
        settings: Arc::new(settings),
        dev_base: Arc::new(dev_base),
        http: reqwest::Client::new(),
    };
    let app = build_router(state.clone());

    info!(%addr, environment = ?state.settings.environment, "serving portfolio assets");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(serve_request)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Catch-all: production serves the static tree (with the SPA fallback);
/// development forwards to the front-end dev server.
async fn serve_request(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    match state.settings.environment {
        Environment::Development => {
            proxy::forward(&state.http, &state.dev_base, method, &uri).await
        }
        Environment::Production => {
            if method != Method::GET && method != Method::HEAD {
                return (
                    StatusCode::METHOD_NOT_ALLOWED,
                    Json(ApiError::new(
                        ErrorCode::Validation,
                        "static assets are read-only",
                    )),
                )
                    .into_response();
            }
            assets::serve(&state.settings.static_dir, uri.path()).await
        }
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let line = format!(
        "{method} {path} {status} in {elapsed}ms",
        status = response.status().as_u16(),
        elapsed = start.elapsed().as_millis()
    );
    info!("{}", clip_log_line(line));
    response
}

fn clip_log_line(line: String) -> String {
    if line.chars().count() <= MAX_LOG_LINE_CHARS {
        return line;
    }
    let mut clipped: String = line.chars().take(MAX_LOG_LINE_CHARS - 1).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
