mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Args;
use payroll_report::ReportEngine;

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Initialize the ReportEngine
    let mut engine = ReportEngine::new();

    // 2. Load every input file, the first file-level error aborts the run
    for path in &args.files {
        engine
            .load_file(path)
            .with_context(|| format!("Failed to process input file: {}", path.display()))?;
    }

    log::info!(
        "Loading complete, {} employees from {} files",
        engine.employee_count(),
        args.files.len()
    );

    // 3. Write the requested report to stdout
    engine
        .write_report(args.report, std::io::stdout().lock())
        .context("Failed to write report to stdout")?;

    Ok(())
}
