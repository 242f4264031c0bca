//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::rejection::{BytesRejection, QueryRejection},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use crate::common::error::{ClockError, CommonError};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ClockError);

impl From<ClockError> for AppError {
    fn from(err: ClockError) -> Self {
        AppError(err)
    }
}

impl From<CommonError> for AppError {
    fn from(err: CommonError) -> Self {
        AppError(err.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(ClockError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        })
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError(ClockError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let message = self.0.external_message();

        // 5xxは診断文字列をdetailsに載せる
        let payload = if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
            json!({
                "error": message,
                "details": self.0.to_string(),
            })
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
            json!({ "error": message })
        };

        (status, Json(payload)).into_response()
    }
}
