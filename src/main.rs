use std::path::PathBuf;

use clap::{ArgAction, Parser};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

mod allocate;
mod checks;
mod config;
mod display;
mod error;
mod loaders;
mod model;
mod scoring;
mod stats;

/// Assign students to specialty tracks by merit and wishes
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Students CSV file
    students: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = "trackmatch.toml")]
    config: PathBuf,

    /// Do not write the ranking and assignment files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Ranking output file
    #[arg(long, default_value = "classement.csv")]
    ranking: PathBuf,

    /// Assignment output file
    #[arg(long, default_value = "affectations.csv")]
    assignments: PathBuf,

    /// Increase verbosity
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so the reports on stdout stay clean. `RUST_LOG`
/// overrides the `-v` ladder.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trackmatch={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    init_logging(options.verbose);
    let config = Config::load(&options.config)?;
    let students = loaders::load_students(&options.students, &config.periods)?;
    display::display_input(&config, students.len());
    let assignments = allocate::solve(students, &config.periods, &config.tracks)?;
    if !options.dry_run {
        loaders::save_ranking(&options.ranking, &assignments)?;
        loaders::save_assignments(&options.assignments, &assignments)?;
    }
    display::display_details(&assignments);
    display::display_stats(&assignments);
    checks::check_seat_count(&assignments);
    checks::report_unassigned(&assignments);
    Ok(())
}
