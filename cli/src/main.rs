mod cli;
mod scenario;

use clap::Parser;
use cli::{Cli, Command};
use scenario::Scenario;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Show {
            scenario,
            summary,
            json,
        } => {
            let calendar = Scenario::load(&scenario)?.apply()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();

            if json {
                writeln!(out, "{}", calendar.report().to_json_pretty()?)?;
            } else {
                calendar.describe(&mut out, summary)?;
            }
            out.flush()?;
        }
        Command::Check { scenario } => {
            let calendar = Scenario::load(&scenario)?.apply()?;
            calendar.check_invariants()?;
            println!(
                "ok: {} ({} days, {} events)",
                calendar.name(),
                calendar.days(),
                calendar.total_events()
            );
        }
    }

    Ok(())
}
