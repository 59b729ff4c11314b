// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::process::ExitCode;

use bouncy_search::{report, Counter, THRESHOLD};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bouncy_search=warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    let mut counter = Counter::new(THRESHOLD);
    match counter.run() {
        Ok(first_over) => {
            print!("{}", report(counter.threshold(), first_over));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "expansion failed");
            ExitCode::FAILURE
        }
    }
}
