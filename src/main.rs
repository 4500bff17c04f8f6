//! Endurance Fuel Planner
//!
//! Reads questionnaire answers as JSON and prints the nutrition plan.
//!
//! Usage: fuel_planner [--json] [answers.json]
//!
//! Without a path the answers come from `FUEL_PLANNER_ANSWERS`, then stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fuel_planner::build_info;
use fuel_planner::questionnaire::Answers;
use fuel_planner::report::{write_report, OutputFormat};

/// Answers file from the command line or environment
fn get_answers_path(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .or_else(|| std::env::var("FUEL_PLANNER_ANSWERS").ok().map(PathBuf::from))
}

/// `--json` wins over `FUEL_PLANNER_FORMAT`, which wins over text
fn get_output_format(args: &[String]) -> OutputFormat {
    if args.iter().any(|a| a == "--json") {
        return OutputFormat::Json;
    }

    match std::env::var("FUEL_PLANNER_FORMAT") {
        Ok(value) => OutputFormat::from_str(&value).unwrap_or_else(|| {
            warn!("Unknown FUEL_PLANNER_FORMAT '{}', using text", value);
            OutputFormat::Text
        }),
        Err(_) => OutputFormat::default(),
    }
}

fn read_answers(path: Option<&Path>) -> Result<Answers, Box<dyn std::error::Error>> {
    let raw = match path {
        Some(path) => {
            info!("Reading answers from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading answers from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the plan
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fuel_planner=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let format = get_output_format(&args);
    let answers = read_answers(get_answers_path(&args).as_deref())?;

    let completed = answers.complete()?;
    info!(
        bmr = completed.plan().bmr,
        weekly_calories = completed.plan().weekly_calories,
        "Plan computed"
    );

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, format, completed.profile(), completed.plan())?;

    Ok(())
}
