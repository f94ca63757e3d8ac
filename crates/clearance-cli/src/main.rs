//! Clearance console binary.
//!
//! # Usage
//!
//! ```bash
//! # With config file
//! clearance --config config.yaml
//!
//! # With environment variables only
//! CLEARANCE_LOGGING__LEVEL=debug clearance
//! ```

use std::io;

use clap::Parser;
use tracing::{info, Level};

use clearance_cli::config::{AppConfig, LoggingSettings};
use clearance_cli::menu::App;

/// Clearance - Level-Based Access Control Console
#[derive(Parser, Debug)]
#[command(name = "clearance")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if let Some(config_path) = args.config {
        AppConfig::load(&config_path)?
    } else {
        AppConfig::from_env()?
    };

    init_logging(&config.logging);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting clearance");

    let mut app = App::new(&config.data.users_path, &config.data.resources_path);
    app.seed()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// Initialize the tracing subscriber. Logs go to stderr so the menu on
/// stdout stays clean.
fn init_logging(settings: &LoggingSettings) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&settings.level))
        .with_writer(io::stderr);
    if settings.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Parse log level from string.
fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
