//! 共通型定義
//!
//! 打刻エントリ、リクエスト型、エラー型

/// エラー型
pub mod error;

/// 打刻関連の型
pub mod types;
