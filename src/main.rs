// Cross-checks the tensor and reference forms of both weighted losses on
// random data. Usage:
//   weighted-loss [CONFIG.json]
// Set RUST_LOG=debug for per-loss shapes.
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use weighted_loss::{run_cross_check, LossConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    Registry::default().with(filter).with(fmt_layer).init();
}

fn run() -> weighted_loss::Result<bool> {
    let config = match std::env::args().nth(1) {
        Some(path) => LossConfig::load_json(&path)?,
        None => LossConfig::default(),
    };
    let report = run_cross_check(&config)?;
    for outcome in &report.outcomes {
        info!(
            loss = %outcome.kind,
            tensor = outcome.tensor,
            reference = outcome.reference,
            abs_error = outcome.abs_error(),
            passed = outcome.passed(report.tolerance),
            "cross-check"
        );
    }
    Ok(report.passed())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("tensor and reference forms disagree beyond tolerance");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "cross-check failed");
            ExitCode::FAILURE
        }
    }
}
