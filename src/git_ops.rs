use crate::config::ToolsConfig;
use crate::error::{ReleaseError, Result};
use crate::exec::CommandRunner;
use crate::pom;
use std::path::Path;

/// Version-control operations of the release workflow, driven through the
/// system `git` binary.
///
/// Staging, committing, and tagging are part of the tool's external
/// contract, so they are plain subprocess calls rather than library
/// operations; only the read-only [preflight] uses `git2`.
pub struct GitCli<'a> {
    runner: &'a dyn CommandRunner,
    binary: String,
}

impl<'a> GitCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, tools: &ToolsConfig) -> Self {
        GitCli {
            runner,
            binary: tools.git.clone(),
        }
    }

    /// Stage the root descriptor (`module` absent) or a module's descriptor
    /// (`module` present). Prints the staged path on success.
    pub fn add_pom(&self, module: Option<&str>) -> Result<()> {
        let path = match module {
            Some(name) => format!("{}/{}", name, pom::POM),
            None => pom::POM.to_string(),
        };

        self.runner
            .run(&self.binary, &["add", &path])
            .map_err(|_| ReleaseError::command(format!("failed to git-add; {}", path)))?;

        println!("{}: (added)", path);
        Ok(())
    }

    /// Commit staged changes with `message`.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.runner.run(&self.binary, &["commit", "-m", message])
    }

    /// Create an annotated tag `name` carrying `message`.
    pub fn tag_annotated(&self, name: &str, message: &str) -> Result<()> {
        self.runner
            .run(&self.binary, &["tag", "-a", name, "-m", message])
    }
}

/// Read-only repository checks before the first mutating step.
///
/// Verifies that `dir` is inside a git work tree and that the release tag
/// does not already exist, so a re-run of an already-tagged release aborts
/// while the run is still side-effect-free.
pub fn preflight(dir: &Path, tag_name: &str) -> Result<()> {
    let repo = git2::Repository::discover(dir)?;

    let reference = format!("refs/tags/{}", tag_name);
    if repo.find_reference(&reference).is_ok() {
        return Err(ReleaseError::tag(format!(
            "tag '{}' already exists",
            tag_name
        )));
    }

    Ok(())
}
