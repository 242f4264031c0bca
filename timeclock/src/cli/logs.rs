//! logs サブコマンド
//!
//! `GET /api/logs`と同じJSONを標準出力に書く。

use clap::Args;

use crate::api::logs::LogsResponse;
use crate::bootstrap;
use crate::common::error::{ClockResult, CommonError};

/// logs サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct LogsArgs {
    /// Contractor identifier (all contractors if omitted)
    #[arg(short, long)]
    pub contractor: Option<String>,
}

/// ログを取得してJSONを返す
pub async fn run(args: &LogsArgs) -> ClockResult<String> {
    let state = bootstrap::init_state_from_env().await?;
    let response = LogsResponse::fetch(&state.clock_log, args.contractor.as_deref()).await?;
    let output = serde_json::to_string_pretty(&response).map_err(CommonError::from)?;
    Ok(output)
}

/// logs サブコマンドを実行する
pub async fn execute(args: &LogsArgs) -> ClockResult<()> {
    println!("{}", run(args).await?);
    Ok(())
}
