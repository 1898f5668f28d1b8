//! API key extraction - core logic.
//!
//! Pure functions over `HeaderMap`. Nothing here logs, touches state, or knows
//! about axum extractors; the auth middleware calls `get_api_key` and decides
//! what a failure means for the response.

use axum::http::{HeaderMap, header};
use base64::Engine as _;
use sha2::{Digest, Sha256};

use super::types::{API_KEY_SCHEME, ApiKeyError};

/// Extract the API key from `Authorization: ApiKey <key>`.
///
/// - Only the first `Authorization` value is consulted.
/// - Tokens are separated by any run of whitespace.
/// - Tokens after the key are ignored.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeader)?;

    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    // `HeaderValue::to_str` only accepts visible ASCII; keys may be any UTF-8.
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    let mut tokens = value.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_owned()),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}

/// base64url(SHA-256(key)), no padding.
///
/// Used wherever a key has to be referred to (logs, responses) without
/// echoing the secret itself.
pub fn fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn valid_api_key() {
        let headers = headers_with("ApiKey abc123");
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn no_authorization_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn empty_authorization_header() {
        let headers = headers_with("");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn malformed_missing_api_key_scheme() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn malformed_scheme_without_key() {
        let headers = headers_with("ApiKey");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn malformed_no_space_after_scheme() {
        let headers = headers_with("ApiKeyabc123");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let headers = headers_with("ApiKey abc123 extra");
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));

        let headers = headers_with("ApiKey abc123 more than one trailing token");
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn repeated_whitespace_between_tokens() {
        let headers = headers_with("ApiKey   abc123");
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));

        let headers = headers_with("ApiKey\tabc123");
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn scheme_is_case_sensitive() {
        let headers = headers_with("apikey abc123");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));

        let headers = headers_with("APIKEY abc123");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn whitespace_only_value_is_malformed() {
        let headers = headers_with("   ");
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn utf8_key_is_returned_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes("ApiKey clé".as_bytes()).unwrap(),
        );
        assert_eq!(get_api_key(&headers), Ok("clé".to_string()));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes("ApiKey ключ extra".as_bytes()).unwrap(),
        );
        assert_eq!(get_api_key(&headers), Ok("ключ".to_string()));
    }

    #[test]
    fn invalid_utf8_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xfa\xfb").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("ApiKey abc123"),
        );
        assert_eq!(get_api_key(&headers), Ok("abc123".to_string()));
    }

    #[test]
    fn only_first_value_is_consulted() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first".to_string()));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static(""));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("Bearer x"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn repeated_calls_give_the_same_result() {
        for value in ["ApiKey abc123", "", "Bearer abc123", "ApiKey"] {
            let headers = headers_with(value);
            assert_eq!(get_api_key(&headers), get_api_key(&headers));
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiKeyError::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }

    #[test]
    fn fingerprint_is_stable_and_hides_the_key() {
        let a = fingerprint("abc123");
        assert_eq!(a, fingerprint("abc123"));
        assert_ne!(a, fingerprint("abc124"));
        // 32 byte digest -> 43 base64url chars without padding
        assert_eq!(a.len(), 43);
        assert!(!a.contains("abc123"));
        assert!(!a.contains('='));
    }
}
