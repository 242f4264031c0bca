//! CLI module for timeclock
//!
//! Provides command-line interface for the server and direct log access.

pub mod clock;
pub mod logs;
pub mod serve;

use clap::{Parser, Subcommand};

/// Timeclock - contractor clock in/out log
#[derive(Parser, Debug)]
#[command(name = "timeclock")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    TIMECLOCK_HOST          Bind address (default: 0.0.0.0)
    TIMECLOCK_PORT          Listen port (default: 8787)
    TIMECLOCK_LOG_LEVEL     Log level (default: info)
    TIMECLOCK_DATA_DIR      Data directory (default: ~/.timeclock)
    TIMECLOCK_DATABASE_URL  Database URL (default: sqlite:<data dir>/timeclock.db)
    TIMECLOCK_STORE_NAME    Key-value store namespace (default: clock-logs)
    TIMECLOCK_APPEND_MODE   serialized | unguarded (default: serialized)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Record a clock event directly in the store
    Clock(clock::ClockArgs),
    /// Print recorded logs
    Logs(logs::LogsArgs),
}
