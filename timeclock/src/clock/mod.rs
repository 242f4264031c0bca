//! 打刻ログのコア
//!
//! キーバリューストア上の追記専用ログ。
//! - 追記: 契約者のログを読み、正規化済みエントリを1件足して丸ごと書き戻す
//! - 取得: 1契約者分、または全契約者分をソートして返す

/// 契約者単位の追記ロック
pub mod locks;

/// タイムスタンプ正規化
pub mod timestamp;

use chrono::{DateTime, Utc};
use feruca::Collator;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::common::error::{ClockError, ClockResult, CommonError};
use crate::common::types::{
    AggregateView, ClockAction, ClockEntry, ContractorLog, ContractorLogs, MISSING_FIELDS_MESSAGE,
};
use crate::store::{Consistency, KvStore};
use locks::AppendLocks;

/// 追記の並行制御ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppendMode {
    /// 同一契約者への追記を直列化する
    #[default]
    Serialized,
    /// 直列化しない（同一契約者への同時追記で後勝ちの更新消失が起こりうる）
    Unguarded,
}

impl fmt::Display for AppendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppendMode::Serialized => f.write_str("serialized"),
            AppendMode::Unguarded => f.write_str("unguarded"),
        }
    }
}

impl FromStr for AppendMode {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serialized" => Ok(AppendMode::Serialized),
            "unguarded" => Ok(AppendMode::Unguarded),
            other => Err(CommonError::Config(format!(
                "Unknown append mode '{}' (expected 'serialized' or 'unguarded')",
                other
            ))),
        }
    }
}

/// 打刻ログサービス
///
/// 状態はストアハンドルとロック表のみ。ログ本体はキャッシュせず、
/// 操作ごとにストアから読み直す。
#[derive(Clone)]
pub struct ClockLog {
    store: Arc<dyn KvStore>,
    mode: AppendMode,
    locks: AppendLocks,
}

impl ClockLog {
    /// サービスを作成する
    ///
    /// 追記は自身の直前の書き込みが読めることを前提とするため、
    /// `Consistency::Strong`でないストアは設定エラーとする。
    pub fn new(store: Arc<dyn KvStore>, mode: AppendMode) -> ClockResult<Self> {
        let consistency = store.consistency();
        if consistency != Consistency::Strong {
            return Err(CommonError::Config(format!(
                "Clock log requires a strongly consistent store (got {})",
                consistency
            ))
            .into());
        }
        Ok(Self {
            store,
            mode,
            locks: AppendLocks::default(),
        })
    }

    /// 追記ポリシー
    pub fn mode(&self) -> AppendMode {
        self.mode
    }

    /// 現在時刻で打刻を追記する
    pub async fn append(&self, contractor: &str, action: ClockAction) -> ClockResult<ClockEntry> {
        self.append_at(contractor, action, Utc::now()).await
    }

    /// 指定時刻で打刻を追記する
    pub async fn append_at(
        &self,
        contractor: &str,
        action: ClockAction,
        instant: DateTime<Utc>,
    ) -> ClockResult<ClockEntry> {
        if contractor.is_empty() {
            return Err(ClockError::validation(MISSING_FIELDS_MESSAGE));
        }

        let _guard = match self.mode {
            AppendMode::Serialized => Some(self.locks.acquire(contractor).await),
            AppendMode::Unguarded => None,
        };

        let mut log = self.read_log(contractor).await?;
        let entry = ClockEntry {
            contractor: contractor.to_string(),
            action,
            timestamp: timestamp::format_timestamp(instant),
        };
        log.push(entry.clone());

        let value = serde_json::to_value(&log)
            .map_err(|e| ClockError::Internal(format!("Failed to serialize log: {}", e)))?;
        self.store.set(contractor, &value).await?;

        info!(
            contractor = %contractor,
            action = %action,
            entries = log.len(),
            "Recorded clock event"
        );
        Ok(entry)
    }

    /// 1契約者分のログを取得する（未記録なら空）
    pub async fn get_one(&self, contractor: &str) -> ClockResult<ContractorLog> {
        self.read_log(contractor).await
    }

    /// 全契約者のログを契約者順に取得する
    ///
    /// どれか1件でも取得に失敗したら全体を失敗とする。
    pub async fn get_all(&self) -> ClockResult<AggregateView> {
        let keys = self.store.list_keys().await?;
        debug!(contractors = keys.len(), "Listing all clock logs");

        let mut data = Vec::with_capacity(keys.len());
        for contractor in keys {
            let logs = self.read_log(&contractor).await?;
            data.push(ContractorLogs { contractor, logs });
        }
        let mut collator = Collator::default();
        data.sort_by(|a, b| {
            collate_contractors(&mut collator, &a.contractor, &b.contractor)
        });

        Ok(AggregateView::from_sorted(data))
    }

    async fn read_log(&self, contractor: &str) -> ClockResult<ContractorLog> {
        match self.store.get(contractor).await? {
            None => Ok(Vec::new()),
            Some(value) => parse_log(contractor, value),
        }
    }
}

fn parse_log(contractor: &str, value: Value) -> ClockResult<ContractorLog> {
    serde_json::from_value(value).map_err(|e| {
        ClockError::Store(format!("Corrupted log for '{}': {}", contractor, e))
    })
}

/// 契約者IDのロケール照合順比較
///
/// CLDRルートロケールのUnicode照合順で比較し、照合上同値なら元の文字列で順序付ける。
/// 小文字は対応する大文字より前、アクセント付き文字は基底文字の位置に並ぶ。
pub fn compare_contractors(a: &str, b: &str) -> Ordering {
    collate_contractors(&mut Collator::default(), a, b)
}

fn collate_contractors(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
