//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use std::path::PathBuf;

use crate::clock::AppendMode;
use crate::common::error::ClockResult;
use crate::store::DEFAULT_STORE_NAME;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8787;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use timeclock::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("TIMECLOCK_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// データディレクトリを取得
///
/// `TIMECLOCK_DATA_DIR` が未設定なら `~/.timeclock`、HOMEも無ければ `./.timeclock`。
pub fn data_dir() -> PathBuf {
    if let Some(dir) = get_env_with_fallback("TIMECLOCK_DATA_DIR", "DATA_DIR") {
        return PathBuf::from(dir);
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".timeclock")
}

/// データベースURLを取得
///
/// 環境変数 `TIMECLOCK_DATABASE_URL`（旧: `DATABASE_URL`）から取得し、
/// 未設定の場合はデータディレクトリ配下の `timeclock.db` を使う。
pub fn database_url() -> String {
    get_env_with_fallback("TIMECLOCK_DATABASE_URL", "DATABASE_URL")
        .unwrap_or_else(|| format!("sqlite:{}", data_dir().join("timeclock.db").display()))
}

/// ストア名（名前空間）を取得
pub fn store_name() -> String {
    get_env_with_fallback_or("TIMECLOCK_STORE_NAME", "STORE_NAME", DEFAULT_STORE_NAME)
}

/// 追記ポリシーを取得
///
/// 環境変数 `TIMECLOCK_APPEND_MODE` が `serialized`（既定）または `unguarded`。
/// それ以外の値は設定エラー。
pub fn append_mode() -> ClockResult<AppendMode> {
    match get_env_with_fallback("TIMECLOCK_APPEND_MODE", "APPEND_MODE") {
        Some(value) => Ok(value.parse()?),
        None => Ok(AppendMode::default()),
    }
}
