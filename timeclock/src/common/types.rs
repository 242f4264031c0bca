//! 打刻ログのデータモデル

use super::error::{ClockError, ClockResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// 打刻アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockAction {
    /// 出勤
    In,
    /// 退勤
    Out,
}

impl ClockAction {
    /// ワイヤー上の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::In => "in",
            ClockAction::Out => "out",
        }
    }
}

impl fmt::Display for ClockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClockAction {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(ClockAction::In),
            "out" => Ok(ClockAction::Out),
            _ => Err(ClockError::validation(INVALID_ACTION_MESSAGE)),
        }
    }
}

/// 記録済みの打刻1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEntry {
    /// 契約者ID（ストアキーを兼ねる）
    pub contractor: String,
    /// アクション
    pub action: ClockAction,
    /// 正規化済みタイムスタンプ（`YYYY-MM-DDTHH:mm:ss PST`）
    pub timestamp: String,
}

/// 契約者1人分のログ（古い順）
pub type ContractorLog = Vec<ClockEntry>;

/// 集計ビューの1要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractorLogs {
    /// 契約者ID
    pub contractor: String,
    /// その契約者のログ
    pub logs: ContractorLog,
}

/// 全契約者の集計ビュー（永続化しない派生データ）
///
/// `contractors`と`data`は同じ順序・同じ長さを持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateView {
    /// ソート済み契約者ID
    pub contractors: Vec<String>,
    /// 契約者ごとのログ（`contractors`と同順）
    pub data: Vec<ContractorLogs>,
}

impl AggregateView {
    /// ソート済みのペア列から構築する
    pub fn from_sorted(data: Vec<ContractorLogs>) -> Self {
        let contractors = data.iter().map(|entry| entry.contractor.clone()).collect();
        Self { contractors, data }
    }
}

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: contractor and action";
pub(crate) const INVALID_ACTION_MESSAGE: &str = "Invalid action. Must be \"in\" or \"out\"";

/// 検証済みの打刻リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockRequest {
    /// 契約者ID（空でない）
    pub contractor: String,
    /// アクション
    pub action: ClockAction,
}

impl ClockRequest {
    /// 型なしJSONボディを検証して変換する
    ///
    /// オブジェクト以外、必須フィールド欠落（空文字列を含む）、文字列以外の値、
    /// `in`/`out`以外のアクションはすべて`Validation`エラー。
    pub fn from_json(body: &Value) -> ClockResult<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| ClockError::validation("Request body must be a JSON object"))?;

        let contractor = required_str(object.get("contractor"), "contractor")?;
        let action = required_str(object.get("action"), "action")?;

        match (contractor, action) {
            (Some(contractor), Some(action)) => Ok(Self {
                contractor: contractor.to_string(),
                action: action.parse()?,
            }),
            _ => Err(ClockError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }

    /// 既に文字列として受け取った値を検証する（CLI用）
    pub fn new(contractor: &str, action: &str) -> ClockResult<Self> {
        if contractor.is_empty() || action.is_empty() {
            return Err(ClockError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(Self {
            contractor: contractor.to_string(),
            action: action.parse()?,
        })
    }
}

/// `null`・欠落・空文字列は`None`、文字列以外は型エラー
fn required_str<'a>(value: Option<&'a Value>, field: &str) -> ClockResult<Option<&'a str>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ClockError::validation(format!(
            "Field '{}' must be a string",
            field
        ))),
    }
}
