//! clock サブコマンド
//!
//! サーバーを介さずストアに直接打刻を記録し、`POST /api/clock`と同じJSONを出力する。

use clap::Args;

use crate::api::clock::ClockResponse;
use crate::bootstrap;
use crate::common::error::{ClockResult, CommonError};
use crate::common::types::ClockRequest;

/// clock サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ClockArgs {
    /// Contractor identifier
    #[arg(short, long)]
    pub contractor: String,

    /// Action to record ("in" or "out")
    #[arg(short, long)]
    pub action: String,
}

/// 打刻を記録してレスポンスJSONを返す
pub async fn run(args: &ClockArgs) -> ClockResult<String> {
    // ストアに触れる前に検証する
    let request = ClockRequest::new(&args.contractor, &args.action)?;
    let state = bootstrap::init_state_from_env().await?;
    let entry = state
        .clock_log
        .append(&request.contractor, request.action)
        .await?;
    let output =
        serde_json::to_string_pretty(&ClockResponse::from(entry)).map_err(CommonError::from)?;
    Ok(output)
}

/// clock サブコマンドを実行する
pub async fn execute(args: &ClockArgs) -> ClockResult<()> {
    println!("{}", run(args).await?);
    Ok(())
}
