//! ログ取得API
//!
//! `GET /api/logs?contractor=<id>`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::clock::ClockLog;
use crate::common::error::ClockResult;
use crate::common::types::{AggregateView, ContractorLogs};
use crate::AppState;

/// ログ取得クエリパラメーター
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsQuery {
    /// 契約者ID（省略または空なら全契約者）
    pub contractor: Option<String>,
}

/// ログレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogsResponse {
    /// 1契約者分
    Contractor(ContractorLogs),
    /// 全契約者の集計
    All(AggregateView),
}

impl LogsResponse {
    /// 契約者指定の有無に応じてログを取得する
    pub async fn fetch(clock_log: &ClockLog, contractor: Option<&str>) -> ClockResult<Self> {
        match contractor.filter(|c| !c.is_empty()) {
            Some(contractor) => {
                let logs = clock_log.get_one(contractor).await?;
                Ok(Self::Contractor(ContractorLogs {
                    contractor: contractor.to_string(),
                    logs,
                }))
            }
            None => Ok(Self::All(clock_log.get_all().await?)),
        }
    }
}

/// GET /api/logs
///
/// クエリ文字列の解析失敗（`contractor`の重複など）もJSONエラーとして返す。
pub async fn get_logs(
    State(state): State<AppState>,
    query: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<LogsResponse>, AppError> {
    let Query(query) = query?;
    let response = LogsResponse::fetch(&state.clock_log, query.contractor.as_deref()).await?;
    Ok(Json(response))
}
