//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `ClockError`は`status_code()`と`external_message()`を提供し、
//! HTTPレスポンスへの変換は`api::error::AppError`が担う。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("{0}")]
    Validation(String),
}

/// Timeclock error type
#[derive(Debug, Error)]
pub enum ClockError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Wrong HTTP method for the route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request rejected before reaching the handler (query string, body size, etc.)
    #[error("{message}")]
    Rejected {
        /// Status chosen by the extractor
        status: StatusCode,
        /// Description of the rejection
        message: String,
    },

    /// Key-value store failure (read, write, or enumeration)
    #[error("Store error: {0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClockError {
    /// 入力検証エラーを生成
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Common(CommonError::Validation(message.into()))
    }

    /// Returns true when the error was caused by the client.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Returns the message placed in the `error` field of the response body.
    ///
    /// Validation messages are passed through verbatim since they describe
    /// the client's own input. Server-side failures use a fixed message and
    /// carry the diagnostic in `details` instead.
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(msg)) => msg.clone(),
            Self::Common(CommonError::Serialization(_)) => "Invalid JSON body".to_string(),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Common(CommonError::Config(_)) | Self::Store(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Common(CommonError::Serialization(_)) => StatusCode::BAD_REQUEST,
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Rejected { status, .. } => *status,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ClockError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ClockError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Store(format!("Migration failed: {}", err))
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Timeclock)
pub type ClockResult<T> = Result<T, ClockError>;
