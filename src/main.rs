#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use items_daemon::logging::{
    default_log_dir, init_logging, parse_rotation, set_log_file_path, LogConfig, LOG_FILENAME,
};
use items_daemon::server::serve;
use items_daemon::user_config::{load_user_config, ServerSettings, UserConfig};
use items_daemon::{build_app, AppState, ItemStore};
use tracing::{info, warn};

/// Items Daemon - in-memory item catalogue served as a JSON API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to [default: 127.0.0.1:8000]
    #[arg(short, long, env = "ITEMS_DAEMON_ADDR")]
    addr: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins (not recommended for production).
    /// Example: --cors-origins=https://shop.example,http://localhost:5180
    #[arg(long, env = "ITEMS_DAEMON_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Option<Vec<String>>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEMS_DAEMON_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEMS_DAEMON_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.items-daemon/logs)
    #[arg(long, env = "ITEMS_DAEMON_LOG_DIR")]
    log_dir: Option<String>,
}

fn report_server_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    eprintln!();
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of items-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill items-daemon");
        eprintln!("  2. Use a different port:        items-daemon --addr 127.0.0.1:8001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
    } else {
        eprintln!("Error: Failed to start server: {e}");
    }
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_dir = args.log_dir.map_or_else(default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);
    set_log_file_path(log_file.to_string_lossy().to_string());

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.items-daemon/config.toml); file is optional.
    let user_cfg = load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let settings = ServerSettings::resolve(args.addr, args.cors_origins, &user_cfg.server);
    let addr: SocketAddr = settings.addr.parse()?;

    info!(
        "CORS origins: {}",
        if settings.allows_all_origins() {
            "*".to_string()
        } else {
            settings.cors_origins.join(", ")
        }
    );

    let state = AppState::new(Arc::new(ItemStore::new()));
    let app = build_app(state, settings.cors_origins);

    info!("Starting items daemon on {}", addr);

    if let Err(e) = serve(addr, app).await {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Items daemon stopped");
    Ok(())
}
