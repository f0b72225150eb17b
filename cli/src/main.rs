//! Table booking service, CLI server
//!
//! ```sh
//! # Run with default config (~/.config/table-booking/config.toml)
//! table-booking
//!
//! # Custom config path and port
//! table-booking --config /etc/table-booking/config.toml --port 8081
//!
//! # Write a default config file, then validate it
//! table-booking --init-config
//! table-booking --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use table_booking::config::AppConfig;
use table_booking::server::{init_tracing, ServerHandle, ServerOptions};

/// Restaurant table booking REST server.
#[derive(Parser, Debug)]
#[command(
    name = "table-booking",
    version,
    about = "Restaurant table reservation server",
    long_about = "REST API for restaurant table reservations with hourly availability.\n\n\
                  Default config: ~/.config/table-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BOOKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the resolved configuration and exit.
    #[arg(long)]
    check: bool,

    /// Write a default configuration file to the config path and exit.
    #[arg(long)]
    init_config: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(table_booking::default_config_path);

    if cli.init_config {
        if config_path.exists() {
            eprintln!("Refusing to overwrite {}", config_path.display());
            std::process::exit(1);
        }
        AppConfig::default().save(&config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── CLI overrides ──────────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Token TTL   : {}h", config.session.expiration_hours);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration: {}", config_path.display());

    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e.into());
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
