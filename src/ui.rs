use crate::release::ReleaseOutcome;
use console::style;

/// Format and print an error message.
///
/// Diagnostics share the line-oriented stdout stream with progress output.
pub fn display_error(message: &str) {
    println!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the planned release without performing it (dry-run mode).
pub fn display_release_plan(outcome: &ReleaseOutcome) {
    println!("\n{}", style("Release plan:").bold());
    println!("  current: {}", outcome.current_version);
    println!("  release: {}", style(&outcome.release_version).green());
    println!("  next:    {}", outcome.future_version);
    println!("  tag:     {}", outcome.tag);
    if outcome.modules.is_empty() {
        println!("  modules: (none)");
    } else {
        println!("  modules: {}", outcome.modules.join(", "));
    }
    println!("\nNo changes made.");
}

/// Final reminder: commits and tags are local until pushed.
pub fn display_push_reminder() {
    println!("---------------");
    println!("to complete the release; git push && git push --tags");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_helpers_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_push_reminder();
    }

    #[test]
    fn test_display_release_plan() {
        let outcome = ReleaseOutcome {
            current_version: "2.3.4-SNAPSHOT".to_string(),
            release_version: "2.3.4".to_string(),
            future_version: "2.3.5-SNAPSHOT".to_string(),
            tag: "photocat-2.3.4".to_string(),
            modules: vec!["foo".to_string()],
        };
        display_release_plan(&outcome);
    }
}
