//! SQLiteベースのキーバリューストア
//!
//! `kv_entries`テーブルに`(store, key)`単位でJSON文字列を保存する。

use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;

use super::{Consistency, KvStore, DEFAULT_STORE_NAME};
use crate::common::error::{ClockError, ClockResult};

/// SQLiteキーバリューストア
///
/// 単一のSQLiteデータベースへの書き込みは直後の読み取りから必ず見えるため、
/// 常に`Consistency::Strong`を報告する。
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
    store: String,
}

impl SqliteKvStore {
    /// デフォルトのストア名でインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_name(pool, DEFAULT_STORE_NAME)
    }

    /// ストア名を指定してインスタンスを作成
    pub fn with_name(pool: SqlitePool, store: impl Into<String>) -> Self {
        Self {
            pool,
            store: store.into(),
        }
    }

    /// ストア名
    pub fn name(&self) -> &str {
        &self.store
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> ClockResult<Option<Value>> {
        let raw = sqlx::query_scalar::<_, String>(
            "SELECT value FROM kv_entries WHERE store = ? AND key = ?",
        )
        .bind(&self.store)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClockError::Store(format!("Failed to get '{}': {}", key, e)))?;

        raw.map(|text| {
            serde_json::from_str(&text).map_err(|e| {
                ClockError::Store(format!("Stored value for '{}' is not valid JSON: {}", key, e))
            })
        })
        .transpose()
    }

    async fn set(&self, key: &str, value: &Value) -> ClockResult<()> {
        let text = serde_json::to_string(value)
            .map_err(|e| ClockError::Internal(format!("Failed to serialize value: {}", e)))?;

        sqlx::query(
            "INSERT INTO kv_entries (store, key, value, updated_at) VALUES (?, ?, ?, datetime('now'))
             ON CONFLICT(store, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(&self.store)
        .bind(key)
        .bind(text)
        .execute(&self.pool)
        .await
        .map_err(|e| ClockError::Store(format!("Failed to set '{}': {}", key, e)))?;

        Ok(())
    }

    async fn list_keys(&self) -> ClockResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT key FROM kv_entries WHERE store = ? ORDER BY key")
            .bind(&self.store)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ClockError::Store(format!("Failed to list keys: {}", e)))
    }

    fn consistency(&self) -> Consistency {
        Consistency::Strong
    }
}
