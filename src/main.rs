mod cli;
mod date;
mod error;
mod lifespan;
mod logging;
mod refresh;
mod report;
mod zone;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use cli::Args;
use refresh::{REFRESH_INTERVAL, RefreshDriver};
use report::Report;
use tracing::{debug, warn};
use zone::HostZone;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // help anywhere wins over everything else
    if Args::help_requested(std::env::args_os()) {
        Args::command().print_help()?;
        return Ok(());
    }

    let args = Args::parse();
    logging::init();

    let settings = args.resolve();
    for warning in &settings.warnings {
        warn!(target: logging::INPUT_TARGET, "{warning}");
    }
    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "extra arguments ignored");
    }

    let lifespan = settings.lifespan;
    debug!(
        years_to_life = lifespan.years_to_life,
        birthday = %lifespan.birth_date,
        deathday = %lifespan.death_date,
        "starting"
    );

    // clock and zone are read fresh for every frame
    let frame = || {
        Report {
            lifespan: &lifespan,
            now: Utc::now(),
            zone: HostZone::detect(),
        }
        .to_string()
    };

    RefreshDriver::new(std::io::stdout().lock(), REFRESH_INTERVAL)
        .run(shutdown_signal(), frame)
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the process just
/// runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
