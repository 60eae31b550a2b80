//! Release workflow orchestration.
//!
//! The workflow is a linear sequence with no rollback: validation first
//! (all read-only), then the mutating steps. Any failure halts the run at
//! that point; completed git operations are left in place.

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::exec::CommandRunner;
use crate::git_ops::{self, GitCli};
use crate::maven::Maven;
use crate::pom;
use crate::ui;
use crate::version::SnapshotVersion;
use std::path::Path;

/// Result of a completed release, or of the validation phase for a dry run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The snapshot version the tree started from.
    pub current_version: String,

    /// The tagged version, snapshot marker stripped.
    pub release_version: String,

    /// The next development version the tree was moved to.
    pub future_version: String,

    /// Name of the annotated tag.
    pub tag: String,

    /// Discovered module names, sorted.
    pub modules: Vec<String>,
}

/// Run the release workflow in `dir`.
///
/// 1. Parse the root descriptor and check the expected artifact id
/// 2. Discover modules and validate their parent versions
/// 3. Derive the release and next development versions
/// 4. (dry-run stops here and prints the plan)
/// 5. Preflight the repository (work tree present, release tag absent)
/// 6. `versions:set` to the release version, stage, commit, tag
/// 7. `versions:set` to the next snapshot, stage, commit
/// 8. Remind the caller to push
///
/// Subprocesses run through `runner`; tests substitute a recording mock.
pub fn run_release(
    dir: &Path,
    config: &Config,
    runner: &dyn CommandRunner,
    dry_run: bool,
) -> Result<ReleaseOutcome> {
    let root_pom_path = dir.join(pom::POM);
    if !root_pom_path.is_file() {
        return Err(ReleaseError::pom(format!(
            "the 'pom.xml' file should be accessible in {}",
            dir.display()
        )));
    }

    let text = pom::read(&root_pom_path)?;
    let doc = pom::parse(&text, pom::POM)?;

    let artifact_id = pom::extract_artifact_id(&doc)?;
    if artifact_id != config.project.artifact_id {
        return Err(ReleaseError::pom(format!(
            "the top level pom should have the '{}' artifactId; found '{}'",
            config.project.artifact_id, artifact_id
        )));
    }

    let modules = pom::scan_modules(dir)?;

    let current_version = pom::extract_version(&doc)?;
    let snapshot = SnapshotVersion::parse(&current_version)?;
    ui::display_status(&format!("top-level version; {}", current_version));

    let release_version = snapshot.release_version();
    let future_version = snapshot.next_snapshot();
    let tag = config.project.tag_name(&release_version);

    ui::display_status("will check version consistency");
    for module in &modules {
        pom::ensure_version_consistency(dir, module, &current_version)?;
    }

    let outcome = ReleaseOutcome {
        current_version,
        release_version,
        future_version,
        tag,
        modules,
    };

    if dry_run {
        ui::display_release_plan(&outcome);
        return Ok(outcome);
    }

    git_ops::preflight(dir, &outcome.tag)?;

    let maven = Maven::new(runner, &config.tools);
    let git = GitCli::new(runner, &config.tools);

    maven.set_version(&outcome.release_version)?;
    ui::display_success(&format!("versions:set to {}", outcome.release_version));

    stage_poms(&git, &outcome.modules)?;
    let release_message = config.project.commit_message(&outcome.release_version);
    git.commit(&release_message)?;
    ui::display_success(&format!("git committed '{}'", release_message));

    git.tag_annotated(&outcome.tag, &outcome.tag)?;
    ui::display_success(&format!("git tagged '{}'", outcome.tag));

    maven.set_version(&outcome.future_version)?;
    ui::display_success(&format!("versions:set to {}", outcome.future_version));

    stage_poms(&git, &outcome.modules)?;
    let future_message = config.project.commit_message(&outcome.future_version);
    git.commit(&future_message)?;
    ui::display_success(&format!("git committed '{}'", future_message));

    ui::display_push_reminder();

    Ok(outcome)
}

fn stage_poms(git: &GitCli<'_>, modules: &[String]) -> Result<()> {
    ui::display_status("will git-add pom files");
    git.add_pom(None)?;
    for module in modules {
        git.add_pom(Some(module))?;
    }
    Ok(())
}
