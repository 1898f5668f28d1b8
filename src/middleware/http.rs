//! HTTP-level middleware (cross-cutting concerns).
//!
//! Transport/infrastructure concerns that apply to every route, regardless of
//! API version or auth requirements.
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limit and global timeout, both taken from `Config`

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::header::HeaderName;
use axum::response::IntoResponse;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply HTTP-level middleware to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // Timeout surfaces as a service error; turn it back into a response.
        .layer(HandleErrorLayer::new(handle_error))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(config.http_body_limit_bytes))
        .layer(TimeoutLayer::new(config.http_timeout))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

async fn handle_error(err: BoxError) -> axum::response::Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout.into_response()
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        AppError::Internal.into_response()
    }
}
