//! Headless imeasure driver: replays an input script and prints the result.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use imeasure::{AppConfig, LogLevel, MeasureApp, Script, ScriptError};

#[derive(Parser)]
#[command(name = "imeasure")]
#[command(about = "Replay a measurement input script and report the distances")]
#[command(version)]
struct Cli {
    /// Path to the JSON input script.
    script: PathBuf,

    /// Print the full session as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli, config: &AppConfig) -> Result<String, ScriptError> {
    let script = Script::load(&cli.script)?;
    let base_dir = cli.script.parent().unwrap_or(Path::new("."));

    let mut app = MeasureApp::new(config);
    script.run(&mut app, base_dir)?;

    if cli.json {
        Ok(serde_json::to_string_pretty(app.session())?)
    } else {
        Ok(app.report().to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The logger comes up before the config so config problems are reported.
    // RUST_LOG, when set, overrides the configured level.
    let env_filter = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .parse_default_env()
        .init();
    if !env_filter {
        log::set_max_level(LogLevel::default().to_level_filter());
    }

    let config = AppConfig::load_or_default();
    if !env_filter {
        log::set_max_level(config.preferences.log_level.to_level_filter());
    }

    match run(&cli, &config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
