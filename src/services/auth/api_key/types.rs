/*
 * Responsibility
 * - `Authorization: ApiKey <key>` の抽出で使う型と定数
 * - 抽出ロジックは core 側、ここは「契約」だけを置く
 */
use thiserror::Error;

/// Scheme word expected as the first token of the `Authorization` value.
/// Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Why a key could not be taken from the request headers.
///
/// Both kinds are terminal for the request. Mapping them to an HTTP
/// status is the caller's job (see `AppError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// `Authorization` is absent, or its first value is empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// `Authorization` is present but is not `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedHeader,
}
