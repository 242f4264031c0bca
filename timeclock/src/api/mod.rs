//! REST APIハンドラー
//!
//! `POST /api/clock` と `GET /api/logs`

/// 打刻API
pub mod clock;

/// エラーレスポンス
pub mod error;

/// ログ取得API
pub mod logs;

use crate::common::error::ClockError;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use error::AppError;
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/clock",
            post(clock::record_clock).fallback(method_not_allowed),
        )
        .route(
            "/api/logs",
            get(logs::get_logs).fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 許可されていないHTTPメソッド
async fn method_not_allowed() -> AppError {
    AppError(ClockError::MethodNotAllowed)
}
