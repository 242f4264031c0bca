//! 打刻API
//!
//! `POST /api/clock`

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppError;
use crate::common::error::CommonError;
use crate::common::types::{ClockAction, ClockEntry, ClockRequest};
use crate::AppState;

/// 打刻成功レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockResponse {
    /// 常に`true`
    pub success: bool,
    /// 契約者ID
    pub contractor: String,
    /// 記録したアクション
    pub action: ClockAction,
    /// 記録したタイムスタンプ
    pub timestamp: String,
}

impl From<ClockEntry> for ClockResponse {
    fn from(entry: ClockEntry) -> Self {
        Self {
            success: true,
            contractor: entry.contractor,
            action: entry.action,
            timestamp: entry.timestamp,
        }
    }
}

/// POST /api/clock
///
/// ボディは型なしJSONとして受け取り、`ClockRequest`へ検証変換してから処理する。
/// 検証に失敗した場合はストアに触れない。
/// ボディ読み取りの失敗（サイズ超過など）もJSONエラーとして返す。
pub async fn record_clock(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ClockResponse>, AppError> {
    let body = body?;
    let value: Value = serde_json::from_slice(&body).map_err(CommonError::from)?;
    let request = ClockRequest::from_json(&value)?;

    let entry = state
        .clock_log
        .append(&request.contractor, request.action)
        .await?;

    Ok(Json(entry.into()))
}
