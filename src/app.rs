/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (HTTP/CORS/Security headers、API key は v1 routes 側)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::{AppEnv, Config};
use crate::middleware;
use crate::state::AppState;

/// `RUST_LOG` wins when set. Otherwise development also shows this crate's
/// debug events (e.g. which key fingerprint a request carried).
fn init_tracing(app_env: AppEnv) {
    let default_directives = if app_env.is_production() {
        "info,tower_http=info"
    } else {
        "info,api_key_auth=debug,tower_http=debug"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Route panics through tracing so they land in the same sink as request logs.
///
/// In development the process aborts: a panicking handler otherwise only kills
/// its own task and the server keeps answering, which hides the bug. In
/// production the default hook runs and the server stays up.
fn init_panic_hook(app_env: AppEnv) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");
        match app_env {
            AppEnv::Development => process::abort(),
            AppEnv::Production => default_hook(info),
        }
    }))
}

pub async fn run() -> Result<()> {
    // config errors surface through anyhow on stderr, before tracing exists
    let config = Config::from_env()?;
    init_tracing(config.app_env);
    init_panic_hook(config.app_env);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new();
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes())
        .with_state(state);

    // 外側ほど先に実行される: http → security headers → cors → routes
    let router = middleware::cors::apply(router, config);
    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router, config)
}
