use serde::Serialize;

/// Response body for `GET /api/v1/whoami`.
/// The raw key is never part of it.
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub scheme: &'static str,
    pub key_fingerprint: String,
}
