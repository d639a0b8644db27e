//! xtask - Development tasks for the vapour workspace
//!
//! Run with `cargo xtask <COMMAND>`.

use std::process::Command;

use anyhow::{Context, bail};
use clap::Parser;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for the vapour workspace")]
enum Task {
    /// Run tests, clippy, and formatting checks
    Test,
    /// Check formatting only
    Fmt,
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    match Task::parse() {
        Task::Test => {
            println!("Running cargo test...");
            run_command("cargo", &["test", "--workspace", "--all-features"])?;

            println!("\nRunning cargo clippy...");
            run_command(
                "cargo",
                &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            )?;

            println!("\nRunning cargo fmt check...");
            run_command("cargo", &["fmt", "--all", "--", "--check"])?;

            println!("\n✓ All checks passed!");
        }
        Task::Fmt => run_command("cargo", &["fmt", "--all", "--", "--check"])?,
    }
    Ok(())
}

fn run_command(cmd: &str, args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new(cmd)
        .args(args)
        .status()
        .with_context(|| format!("failed to execute {cmd}"))?;

    if !status.success() {
        bail!("{cmd} failed with exit code: {:?}", status.code());
    }
    Ok(())
}
