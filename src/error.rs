/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError を 401 に統一的に変換
 * - middleware 層のエラー (timeout など) も同じ JSON 形式で返す
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::api_key::{API_KEY_SCHEME, ApiKeyError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Unauthorized { code: &'static str, message: String },
    #[error("request timeout")]
    Timeout,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn unauthorized(code: &'static str) -> Self {
        Self::Unauthorized {
            code,
            message: "unauthorized".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized { code, message } => (StatusCode::UNAUTHORIZED, code, message),
            AppError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "request timeout".into(),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        let mut res = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            // RFC 9110: a 401 must name the scheme the client should use
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        res
    }
}

impl From<ApiKeyError> for AppError {
    fn from(e: ApiKeyError) -> Self {
        let code = match e {
            ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
            ApiKeyError::MalformedHeader => "MALFORMED_AUTH_HEADER",
        };
        Self::Unauthorized {
            code,
            message: e.to_string(),
        }
    }
}
