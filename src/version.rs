use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;

/// Pattern a development version must match: `major.minor.patch-SNAPSHOT`,
/// where major and patch start with a nonzero digit.
const SNAPSHOT_PATTERN: &str = r"^([1-9][0-9]*\.[0-9]+\.)([1-9][0-9]*)-SNAPSHOT$";

/// A development ("snapshot") version split into its stable prefix and
/// numeric patch component.
///
/// `2.3.4-SNAPSHOT` decomposes into prefix `"2.3."` and patch `4`. The
/// release version is the prefix plus the patch; the next development
/// version increments the patch and restores the snapshot marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotVersion {
    prefix: String,
    patch: u64,
}

impl SnapshotVersion {
    /// Parse a snapshot version string (e.g., "2.3.4-SNAPSHOT").
    ///
    /// # Returns
    /// * `Ok(SnapshotVersion)` - the decomposed version
    /// * `Err` - if the string does not match the snapshot pattern
    pub fn parse(raw: &str) -> Result<Self> {
        let re = Regex::new(SNAPSHOT_PATTERN)
            .map_err(|e| ReleaseError::version(format!("bad snapshot pattern: {}", e)))?;

        let captures = re.captures(raw).ok_or_else(|| {
            ReleaseError::version(format!(
                "the current root pom version is not a valid snapshot version; {}",
                raw
            ))
        })?;

        let prefix = captures[1].to_string();
        let patch = captures[2].parse::<u64>().map_err(|e| {
            ReleaseError::version(format!("unparsable patch component in '{}': {}", raw, e))
        })?;

        Ok(SnapshotVersion { prefix, patch })
    }

    /// The version to tag: the snapshot marker stripped (e.g., "2.3.4").
    pub fn release_version(&self) -> String {
        format!("{}{}", self.prefix, self.patch)
    }

    /// The next development version: patch incremented, snapshot marker
    /// restored (e.g., "2.3.5-SNAPSHOT").
    pub fn next_snapshot(&self) -> String {
        format!("{}{}-SNAPSHOT", self.prefix, self.patch + 1)
    }
}

impl fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-SNAPSHOT", self.prefix, self.patch)
    }
}
