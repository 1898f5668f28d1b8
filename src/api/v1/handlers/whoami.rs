/*
 * Responsibility
 * - GET /api/v1/whoami
 * - middleware が抽出した API key を fingerprint で返す (key そのものは返さない)
 */
use axum::Json;

use crate::api::v1::{dto::whoami::WhoamiResponse, extractors::ApiKeyCtxExtractor};
use crate::services::auth::api_key::API_KEY_SCHEME;

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        scheme: API_KEY_SCHEME,
        key_fingerprint: ctx.fingerprint,
    })
}
