//! Timeclock Server
//!
//! 契約者の出退勤打刻を記録・閲覧するサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// 打刻ログのコア（追記・集計・タイムスタンプ正規化）
pub mod clock;

/// キーバリューストア
pub mod store;

/// データベースアクセス
pub mod db;

/// アプリケーション状態の初期化
pub mod bootstrap;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

/// axumサーバー
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 打刻ログサービス
    pub clock_log: clock::ClockLog,
}
