/*!
 * API key credential extraction
 *
 * Responsibility:
 * - `Authorization: ApiKey <key>` から key を取り出す（形式チェックのみ）
 * - key が有効かどうか（store との照合）はここの責務ではない
 *
 * Public API:
 * - get_api_key / fingerprint
 * - ApiKeyError, API_KEY_SCHEME
 */

mod core;
mod types;

pub use self::core::{fingerprint, get_api_key};
pub use types::{API_KEY_SCHEME, ApiKeyError};
