use crate::error::{ReleaseError, Result};
use crate::exec::{render, CommandRunner};
use std::sync::Mutex;

/// Mock runner for testing without invoking real subprocesses.
///
/// Records every invocation in order. Failures are injected by registering a
/// pattern: any command whose rendered line contains a registered pattern
/// returns an error instead of succeeding.
pub struct MockRunner {
    calls: Mutex<Vec<Vec<String>>>,
    failures: Vec<String>,
}

impl MockRunner {
    /// Create a mock runner where every command succeeds.
    pub fn new() -> Self {
        MockRunner {
            calls: Mutex::new(Vec::new()),
            failures: Vec::new(),
        }
    }

    /// Fail any command whose rendered line contains `pattern`.
    pub fn fail_when(&mut self, pattern: impl Into<String>) {
        self.failures.push(pattern.into());
    }

    /// All recorded invocations, each as `[program, arg...]`.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.lock_calls().clone()
    }

    /// All recorded invocations rendered as single command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock_calls().iter().map(|c| c.join(" ")).collect()
    }

    /// Number of recorded invocations.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<Vec<String>>> {
        match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let line = render(program, args);

        let mut recorded = vec![program.to_string()];
        recorded.extend(args.iter().map(|a| a.to_string()));
        self.lock_calls().push(recorded);

        if self.failures.iter().any(|p| line.contains(p)) {
            return Err(ReleaseError::command(format!("{} (exit status 1)", line)));
        }
        Ok(())
    }
}
