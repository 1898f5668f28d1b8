/*
 * Responsibility
 * - Handler から見える「API key 付きリクエスト」のコンテキスト型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - Header の形式チェックは services::auth::api_key の責務
 * - key の照合（store 検索）はこのサービスの範囲外
 */
use std::fmt;

use crate::services::auth::api_key;

/// Context attached to a request that carried `Authorization: ApiKey <key>`.
///
/// - `key` is the raw credential, as sent by the client
/// - `fingerprint` is safe to log or return (see `api_key::fingerprint`)
#[derive(Clone)]
pub struct ApiKeyCtx {
    // 照合用 (store 連携時に handler/service が読む)。現状の handler は fingerprint のみ使う
    #[allow(dead_code)]
    pub key: String,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: String) -> Self {
        let fingerprint = api_key::fingerprint(&key);
        Self { key, fingerprint }
    }
}

impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the raw key
        f.debug_struct("ApiKeyCtx")
            .field("key", &"<redacted>")
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}
