use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use calcd::config::Config;
use calcd::{interactive, server};

#[derive(Parser, Debug)]
#[command(name = "calcd", version, about = "Arithmetic over HTTP", long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to (e.g., 0.0.0.0:8080)
    #[arg(short, long)]
    listen: Option<String>,

    /// HTML file served for GET /
    #[arg(long)]
    index: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: Level,

    /// Read one calculation from the terminal instead of serving
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.interactive {
        return interactive::run(std::io::stdin().lock(), std::io::stdout());
    }

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cli.log_level)
        .init();

    let mut cfg = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    if let Some(listen) = cli.listen {
        cfg.listen_addr = listen;
    }
    if let Some(index) = cli.index {
        cfg.index_file = index;
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
