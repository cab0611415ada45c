use std::process::Command;

use log::info;

use crate::error::{BuildStatsError, Result};

/// Developer tasks wrapping cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Setup,
    Lint,
    Test,
    Build,
}

#[derive(Debug, PartialEq, Eq)]
struct Step {
    banner: &'static str,
    args: &'static [&'static str],
}

static SETUP: Step = Step {
    banner: "Installing dependencies...",
    args: &["fetch"],
};

static LINT: Step = Step {
    banner: "Running linting...",
    args: &["clippy", "--all-targets", "--", "-D", "warnings"],
};

static TEST: Step = Step {
    banner: "Running unit tests...",
    args: &["test"],
};

impl Task {
    fn steps(self) -> Vec<&'static Step> {
        match self {
            Self::Setup => vec![&SETUP],
            Self::Lint => vec![&LINT],
            Self::Test => vec![&TEST],
            Self::Build => vec![&LINT, &TEST],
        }
    }
}

/// Runs every step of `task` in order, stopping at the first failure.
pub fn run(task: Task) -> Result<()> {
    for step in task.steps() {
        run_step(step)?;
    }
    Ok(())
}

fn run_step(step: &Step) -> Result<()> {
    println!("{}", step.banner);

    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    info!("Executing: {cargo} {}", step.args.join(" "));

    let status = Command::new(&cargo).args(step.args).status()?;
    if !status.success() {
        return Err(BuildStatsError::Task(format!(
            "'{cargo} {}' exited with {status}",
            step.args.join(" ")
        )));
    }

    Ok(())
}
