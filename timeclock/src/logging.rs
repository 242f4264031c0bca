//! ロギング初期化ユーティリティ
//!
//! `RUST_LOG`が設定されていればそれを、なければ`TIMECLOCK_LOG_LEVEL`（既定: info）を使う。
//! CLIの出力（JSON）と混ざらないよう、ログは標準エラーに書く。

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::get_env_with_fallback_or;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// ログレベル指定からフィルターを構築する
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = get_env_with_fallback_or("TIMECLOCK_LOG_LEVEL", "LOG_LEVEL", "info");
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// グローバルsubscriberを1度だけ登録する
///
/// 既に他のsubscriberが登録済みの場合は何もしない。
pub fn init() {
    if INITIALIZED.get().is_some() {
        return;
    }

    let subscriber = tracing_subscriber::registry()
        .with(build_filter())
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        );

    // 他で初期化済みなら失敗するが、そのまま続行してよい
    let _ = subscriber.try_init();
    let _ = INITIALIZED.set(());
}
