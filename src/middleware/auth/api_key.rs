//! `Authorization: ApiKey <key>` 抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 形式チェックだけを行う（key の照合はしない）
//! - 失敗時は AppError (401) を返し、handler には到達させない

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::api_key;
use crate::state::AppState;

/// API key を要求するルートに middleware を適用する。
///
/// `route_layer` なので、マッチしないパスは 401 ではなく 404 のまま。
///
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match api_key::get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            // header の中身はログに出さない
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(key_fingerprint = %ctx.fingerprint, "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
