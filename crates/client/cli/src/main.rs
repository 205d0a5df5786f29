//! Headless simulation driver: loads a scenario and plays it round by round.
mod config;

use anyhow::{Context, Result};
use config::CliConfig;
use game_content::ContentFactory;
use runtime::{RoundReport, Scenario, TurnRunner};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    setup_logging(&config)?;

    let mut runner = load_runner(&config)?;
    for _ in 0..config.turns {
        let report = runner.play_round()?;
        log_round(&report);
    }

    print_summary(&runner);
    Ok(())
}

/// Setup logging to both stderr and a log file.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let log_dir = config.resolve_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "unit-sim.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Keep the file writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/unit-sim.log", log_dir.display());
    Ok(())
}

fn load_runner(config: &CliConfig) -> Result<TurnRunner> {
    let factory = ContentFactory::new(config.data_dir.clone());
    let (spec, map) = factory.load_scenario_with_map(&config.scenario)?;
    let units = factory.load_units()?;
    let turn_config = factory.load_config()?;

    tracing::info!(
        scenario = %config.scenario,
        data_dir = %config.data_dir.display(),
        turns = config.turns,
        "loading scenario"
    );

    Scenario::new(spec, map, units, turn_config)
        .build()
        .with_context(|| format!("Failed to build scenario '{}'", config.scenario))
}

fn log_round(report: &RoundReport) {
    for (unit, outcome) in &report.pre_turn {
        tracing::info!(turn = report.turn, %unit, ?outcome, "pre-turn");
    }
    for (unit, end) in &report.end_turn {
        if end.construction.is_some() || end.healed > 0 {
            tracing::info!(
                turn = report.turn,
                %unit,
                construction = ?end.construction,
                healed = end.healed,
                "end of turn"
            );
        }
    }
}

fn print_summary(runner: &TurnRunner) {
    println!("after {} rounds:", runner.turn());
    for unit in runner.units() {
        println!(
            "  {:>3} {:<10} owner {} at {} hp {:>3} mp {} order {}",
            unit.id(),
            unit.type_name(),
            unit.owner(),
            unit.position(),
            unit.health(),
            unit.movement_string(),
            unit.action,
        );
    }
}
