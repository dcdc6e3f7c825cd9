#![warn(missing_docs)]
//! # link-guard-app binary
//!
//! Command-line shell for link-guard.
//!
//! Usage: `link-guard-app [--health] [--json] [URL ...]`. Without URLs, one URL
//! is read per line from stdin until EOF. Results go to stdout; logs and
//! errors go to stderr.

use std::io::{self, BufRead};
use std::process::ExitCode;

use link_guard_app::{
    AppConfig, AppError, CheckOutcome, app_version, check_url, describe_health, present_outcome,
    probe_health,
};
use link_guard_client::PredictionController;
use link_guard_ui::{TextRenderer, UiState};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Parsed command-line options.
#[derive(Debug, Default)]
struct CliArgs {
    health: bool,
    json: bool,
    version: bool,
    urls: Vec<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--health" => parsed.health = true,
                "--json" => parsed.json = true,
                "--version" | "-V" => parsed.version = true,
                _ => parsed.urls.push(arg),
            }
        }
        parsed
    }
}

/// CLI entry point.
fn main() -> ExitCode {
    let args = CliArgs::parse(std::env::args().skip(1));
    if args.version {
        println!("link-guard-app {}", app_version());
        return ExitCode::SUCCESS;
    }

    let config = AppConfig::from_env();
    init_tracing(&config);

    match run(&config, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("link-guard-app: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Returns `Ok(false)` when at least one check failed.
fn run(config: &AppConfig, args: &CliArgs) -> Result<bool, AppError> {
    let controller = config.http_controller()?;

    if args.health {
        let health = probe_health(&controller)?;
        println!("{}", describe_health(&health));
        return Ok(health.model_loaded);
    }

    let state = UiState::new(app_version());
    let mut all_ok = true;
    if args.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            all_ok &= check_and_print(&controller, &state, &line, args.json)?;
        }
    } else {
        for url in &args.urls {
            all_ok &= check_and_print(&controller, &state, url, args.json)?;
        }
    }
    Ok(all_ok)
}

fn check_and_print(
    controller: &PredictionController,
    state: &UiState,
    url: &str,
    json: bool,
) -> Result<bool, AppError> {
    let outcome = check_url(controller, url, state.indicator());
    if json && let CheckOutcome::Verdict(model) = &outcome {
        println!("{}", serde_json::to_string_pretty(model)?);
        return Ok(true);
    }

    let mut renderer = TextRenderer::new();
    present_outcome(&outcome, &mut renderer);
    let text = renderer.text();
    match outcome {
        CheckOutcome::Verdict(_) => {
            print!("{text}");
            println!();
            Ok(true)
        }
        CheckOutcome::Busy => {
            warn!(url, "check skipped while another is running");
            Ok(false)
        }
        CheckOutcome::EmptyInput | CheckOutcome::Failed(_) => {
            eprint!("{text}");
            Ok(false)
        }
    }
}
