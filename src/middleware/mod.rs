/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - 各 module が `apply(router, ...)` を持つ
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
