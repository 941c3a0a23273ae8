//! Stage, commit and push every change in the site repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SiteError;

/// One external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs commands and reports their exit code (`None` when killed by a signal).
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<Option<i32>, SiteError>;
}

/// Runs commands as child processes inside `repo_dir`, inheriting stdio.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    repo_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(repo_dir: &Path) -> Self {
        Self { repo_dir: repo_dir.to_path_buf() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<Option<i32>, SiteError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.repo_dir)
            .status()
            .map_err(|source| SiteError::Spawn { command: invocation.display(), source })?;
        Ok(status.code())
    }
}

/// The git sequence for one publish.
pub fn publish_steps(message: &str) -> Vec<Invocation> {
    vec![
        Invocation::new("git", &["add", "-A"]),
        Invocation::new("git", &["commit", "-m", message]),
        Invocation::new("git", &["push"]),
    ]
}

/// Run the publish sequence, halting at the first non-zero exit.
pub fn publish<R: CommandRunner>(runner: &mut R, message: &str) -> Result<(), SiteError> {
    for step in publish_steps(message) {
        let command = step.display();
        tracing::info!(%command, "running");
        match runner.run(&step)? {
            Some(0) => {}
            code => return Err(SiteError::CommandFailed { command, code }),
        }
    }
    tracing::info!("published");
    Ok(())
}

#[cfg(test)]
#[path = "publish_test.rs"]
mod tests;
