mod cli;
mod config;
mod error;
mod hasher;
mod input;
mod report;

use std::io::{BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::UpdateTarget;
use crate::error::ToolError;

fn main() -> Result<(), ToolError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let target = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => UpdateTarget::default(),
    };

    run(
        cli,
        &target,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        std::io::stderr(),
    )
}

fn run<R, W, P>(
    cli: Cli,
    target: &UpdateTarget,
    input: R,
    out: W,
    prompt: P,
) -> Result<(), ToolError>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let password = input::read_password(cli.password, input, prompt)?;
    let hash = hasher::hash_password(&password)?;

    if cli.check && !hasher::verify_password(&password, &hash)? {
        return Err(ToolError::VerifyMismatch);
    }

    tracing::info!(
        cost = hasher::COST,
        table = %target.table,
        users = target.usernames.len(),
        "generated password hash"
    );

    report::write_report(out, &hash, target)
}
