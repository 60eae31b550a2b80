use crate::error::{ReleaseError, Result};
use crate::exec::{render, CommandRunner};
use std::path::PathBuf;
use std::process::Command;

/// Real subprocess invocation, pinned to a working directory.
///
/// Standard streams are inherited so the invoked tool's own output (Maven's
/// progress, git's messages) reaches the terminal directly.
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    /// Create a runner whose subprocesses execute in `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        SystemRunner { cwd: cwd.into() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| {
                ReleaseError::command(format!("failed to run {}: {}", render(program, args), e))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ReleaseError::command(format!(
                "{} (exit status {})",
                render(program, args),
                status.code().unwrap_or(-1)
            )))
        }
    }
}
