// pickxi entry point.
//
// Startup sequence:
// 1. Parse CLI arguments
// 2. Load config (seeding config/ from defaults/)
// 3. Initialize tracing (log to file, not terminal)
// 4. Load the player pool
// 5. Dispatch the command, writing results to stdout

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use pickxi_app::cli::{Cli, Command};
use pickxi_app::commands::{self, SaveParams};
use pickxi_app::config;
use pickxi_app::pool;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let config = config::load_config(&base_dir).context("failed to load configuration")?;

    init_tracing(&config.log_dir())?;
    info!("pickxi starting in {}", base_dir.display());

    let players_path = config.players_path();
    let mut players = pool::load_players(&players_path).context("failed to load player pool")?;
    if config.pool.only_playing {
        players = pool::only_playing(players);
        info!("{} players in the announced sides", players.len());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Players { filters } => {
            commands::run_players(&players, &filters.to_filter(), &mut out)?
        }
        Command::Suggest { json } => commands::run_suggest(&players, json, &mut out)?,
        Command::Build { strategy, json } => {
            commands::run_build(&players, strategy, json, &mut out)?
        }
        Command::Fill { picks, json } => commands::run_fill(&players, &picks, json, &mut out)?,
        Command::Save {
            match_id,
            picks,
            captain,
            vice_captain,
            name,
        } => {
            let params = SaveParams {
                match_id,
                picks,
                captain,
                vice_captain,
                name,
                created_at: Utc::now(),
            };
            commands::run_save(&players, params, &config.teams_dir(), &mut out)
                .context("failed to save team")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Initialize the tracing subscriber to write to a log file.
///
/// Logs go to `<log_dir>/pickxi.log` so stdout carries only command output.
fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("pickxi.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pickxi=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
