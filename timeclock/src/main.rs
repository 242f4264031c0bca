//! Timeclock Server Entry Point

use clap::Parser;
use timeclock::cli::{Cli, Commands};
use timeclock::common::error::ClockResult;
use timeclock::config::{
    get_env_with_fallback_or, get_env_with_fallback_parse, DEFAULT_HOST, DEFAULT_PORT,
};
use timeclock::{bootstrap, logging, server};

#[derive(Clone)]
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = get_env_with_fallback_or("TIMECLOCK_HOST", "HOST", DEFAULT_HOST);
        let port = get_env_with_fallback_parse("TIMECLOCK_PORT", "PORT", DEFAULT_PORT);
        Self { host, port }
    }

    fn from_args(host: String, port: u16) -> Self {
        Self { host, port }
    }

    fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    let result = match cli.command {
        Some(Commands::Serve(args)) => {
            run_server(ServerConfig::from_args(args.host, args.port)).await
        }
        Some(Commands::Clock(args)) => timeclock::cli::clock::execute(&args).await,
        Some(Commands::Logs(args)) => timeclock::cli::logs::execute(&args).await,
        // No subcommand - default to serve
        None => run_server(ServerConfig::from_env()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> ClockResult<()> {
    tracing::info!("Timeclock v{}", env!("CARGO_PKG_VERSION"));
    let state = bootstrap::init_state_from_env().await?;
    server::run(state, &config.bind_addr()).await
}
