use std::process::ExitCode;
use std::time::Instant;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::reporting::Report;

/// Sends diagnostics to stderr so stdout carries only the report line.
pub fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("memprobe=debug"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs one benchmark and returns its report, logging elapsed time.
pub fn run_timed<F>(name: &str, workload: F) -> Result<Report>
where
    F: FnOnce() -> Result<Report>,
{
    debug!(benchmark = name, "starting");
    let start = Instant::now();
    let report = workload();
    let elapsed = start.elapsed();

    match &report {
        Ok(_) => info!(benchmark = name, "completed in {:.3}s", elapsed.as_secs_f64()),
        Err(e) => debug!(benchmark = name, error = ?e, "aborted"),
    }
    report
}

/// Turns a benchmark result into process output and an exit code.
pub fn finish(result: Result<Report>) -> ExitCode {
    match result {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

pub fn execute<F>(name: &str, verbose: bool, workload: F) -> ExitCode
where
    F: FnOnce() -> Result<Report>,
{
    init_logging(verbose);
    finish(run_timed(name, workload))
}
