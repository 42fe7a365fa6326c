mod app;

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use redscare::{
    batch::{run_batch, BatchOptions},
    instance::Instance,
    report::Report,
    solver::solve_all,
};

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // redscare info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("redscare", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    match &cli.command {
        Command::Solve { path } => solve(path),
        Command::Batch { dir, extension } => batch(
            dir,
            &BatchOptions {
                extension: extension.clone(),
            },
        ),
    }
}

fn solve(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    let instance = Instance::from_path(path)
        .with_context(|| format!("parsing instance: {}", path.display()))?;
    let solutions = solve_all(&instance);
    let file = path.display().to_string();
    print!(
        "{}",
        Report {
            file: &file,
            instance: &instance,
            solutions: &solutions,
        }
    );
    Ok(())
}

fn batch(dir: &Path, options: &BatchOptions) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let summary = run_batch(dir, options, &mut out, &mut err)
        .with_context(|| format!("running batch over: {}", dir.display()))?;
    out.flush()?;
    info!(
        "{} instances solved, {} malformed",
        summary.solved, summary.failed
    );
    Ok(())
}
