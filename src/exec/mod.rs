//! Subprocess execution abstraction.
//!
//! Every external interaction of the release workflow is a blocking
//! subprocess call. The [CommandRunner] trait is the seam between the
//! workflow and the outside world; the concrete implementations are:
//!
//! - [system::SystemRunner]: real invocation via `std::process::Command`
//! - [mock::MockRunner]: a recording implementation for testing
//!
//! Workflow code should depend on the trait rather than a concrete runner so
//! the full command sequence can be asserted in tests without touching a
//! real build tool or repository.

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::Result;

/// Blocking invocation of an external program.
///
/// Implementors must be `Send + Sync`. A run succeeds iff the process exits
/// with status 0; any other outcome (spawn failure included) is an error
/// naming the command line.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, waiting for completion.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Render a command line for diagnostics.
pub(crate) fn render(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
