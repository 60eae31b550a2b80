use crate::config::ToolsConfig;
use crate::error::Result;
use crate::exec::CommandRunner;

/// Wrapper for the external Maven version-set tool.
///
/// The descriptors are never edited in-memory; every version change in the
/// tree goes through `versions:set` so Maven rewrites the root and module
/// descriptors itself.
pub struct Maven<'a> {
    runner: &'a dyn CommandRunner,
    binary: String,
    quiet: bool,
}

impl<'a> Maven<'a> {
    pub fn new(runner: &'a dyn CommandRunner, tools: &ToolsConfig) -> Self {
        Maven {
            runner,
            binary: tools.maven.clone(),
            quiet: tools.quiet,
        }
    }

    /// Set every descriptor in the tree to `new_version`.
    ///
    /// Runs `mvn [-q] versions:set -DnewVersion=<v> -DgenerateBackupPoms=false`.
    pub fn set_version(&self, new_version: &str) -> Result<()> {
        let new_version_arg = format!("-DnewVersion={}", new_version);

        let mut args: Vec<&str> = Vec::new();
        if self.quiet {
            args.push("-q");
        }
        args.push("versions:set");
        args.push(&new_version_arg);
        args.push("-DgenerateBackupPoms=false");

        self.runner.run(&self.binary, &args)
    }
}
