use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use buzobus::app;
use buzobus::config::AppConfig;
use buzobus::error::AppError;
use buzobus::notify::DesktopNotifier;
use buzobus::opendata::{OpenDataClient, OpenDataConfig};
use buzobus::schedule::NotifyMode;
use buzobus::stops::StopError;

/// Fetch the next bus times for a configured stop and send a desktop
/// notification when it is time to leave.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Notify unconditionally, ignoring the walking window
    #[arg(long)]
    force_notify: bool,

    /// Never notify (wins over --force-notify)
    #[arg(long)]
    no_notify: bool,

    /// Write raw API responses into this directory for debugging
    #[arg(long, value_name = "DIR")]
    dump: Option<PathBuf>,
}

impl Cli {
    fn notify_mode(&self) -> NotifyMode {
        if self.no_notify {
            NotifyMode::Suppress
        } else if self.force_notify {
            NotifyMode::Force
        } else {
            NotifyMode::Auto
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(&cli).await {
        error!("Exit with errors: {e}");
        log_diagnostics(&e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<(), AppError> {
    let config = AppConfig::load(&cli.config)?;

    let mut client_config = OpenDataConfig::new(
        config.open_data.geojson_server.clone(),
        config.open_data.api_key.clone(),
    );
    if let Some(dir) = &cli.dump {
        client_config = client_config.with_dump_dir(dir);
    }
    let client = OpenDataClient::new(client_config)?;

    app::run(&config, cli.notify_mode(), &client, &DesktopNotifier).await
}

/// Print the listings that help the operator fix the configuration.
fn log_diagnostics(err: &AppError) {
    match err {
        AppError::Stop(StopError::Ambiguous { idents, .. }) => {
            error!("Found {} bus stops:", idents.len());
            for ident in idents {
                error!("- {ident}");
            }
        }
        AppError::Schedule(e) => {
            if let Some(seen) = e.seen_routes() {
                error!("Here are the possibilities:");
                for (libelle, terminus) in seen {
                    error!("- {libelle} ({terminus})");
                }
            }
        }
        _ => {}
    }
}
