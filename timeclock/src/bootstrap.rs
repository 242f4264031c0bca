//! アプリケーション状態の初期化
//!
//! DB接続 → ストアハンドル → 打刻ログサービスの順に組み立てる。

use std::sync::Arc;
use tracing::info;

use crate::clock::{AppendMode, ClockLog};
use crate::common::error::ClockResult;
use crate::store::SqliteKvStore;
use crate::{config, db, AppState};

/// ストア設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// データベースURL
    pub database_url: String,
    /// ストア名（名前空間）
    pub store_name: String,
    /// 追記ポリシー
    pub append_mode: AppendMode,
}

impl StoreSettings {
    /// 環境変数から読み込む
    pub fn from_env() -> ClockResult<Self> {
        Ok(Self {
            database_url: config::database_url(),
            store_name: config::store_name(),
            append_mode: config::append_mode()?,
        })
    }
}

/// 設定からAppStateを構築する
pub async fn init_state(settings: &StoreSettings) -> ClockResult<AppState> {
    let pool = db::create_pool(&settings.database_url).await?;
    let store = Arc::new(SqliteKvStore::with_name(pool, settings.store_name.clone()));
    let clock_log = ClockLog::new(store, settings.append_mode)?;

    info!(
        store = %settings.store_name,
        append_mode = %settings.append_mode,
        "Clock log initialized"
    );
    Ok(AppState { clock_log })
}

/// 環境変数からAppStateを構築する
pub async fn init_state_from_env() -> ClockResult<AppState> {
    init_state(&StoreSettings::from_env()?).await
}
