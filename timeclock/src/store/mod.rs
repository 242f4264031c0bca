//! キーバリューストア抽象
//!
//! 文字列キーからJSON値への永続マッピング。打刻ログはこのtraitを通してのみ
//! 読み書きされ、リクエストをまたいだキャッシュは持たない。

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::common::error::{ClockResult, CommonError};

/// SQLiteバックエンド
pub mod sqlite;

pub use sqlite::SqliteKvStore;

/// デフォルトのストア名（名前空間）
pub const DEFAULT_STORE_NAME: &str = "clock-logs";

/// 読み取り整合性モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consistency {
    /// 直前の自身の書き込みが必ず読める
    #[default]
    Strong,
    /// 書き込みの反映が遅れる可能性がある
    Eventual,
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consistency::Strong => f.write_str("strong"),
            Consistency::Eventual => f.write_str("eventual"),
        }
    }
}

impl FromStr for Consistency {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strong" => Ok(Consistency::Strong),
            "eventual" => Ok(Consistency::Eventual),
            other => Err(CommonError::Config(format!(
                "Unknown consistency mode '{}'",
                other
            ))),
        }
    }
}

/// キーバリューストア操作のtrait
///
/// `set`は値全体を原子的に置き換える。`get`→`set`の組は原子的ではない。
#[async_trait]
pub trait KvStore: Send + Sync {
    /// キーの値を取得（存在しなければ`None`）
    async fn get(&self, key: &str) -> ClockResult<Option<Value>>;
    /// キーの値を丸ごと置き換える
    async fn set(&self, key: &str, value: &Value) -> ClockResult<()>;
    /// 現在存在するすべてのキーを列挙する
    async fn list_keys(&self) -> ClockResult<Vec<String>>;
    /// このハンドルの読み取り整合性
    fn consistency(&self) -> Consistency;
}
