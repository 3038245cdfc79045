//! Version bumps for the virtually published package set.

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{ManifestError, Result};

/// Increment the minor component of a semver string.
///
/// The patch is reset to zero and any pre-release or build metadata is
/// dropped. Surrounding whitespace and a single leading `v` are tolerated,
/// as in npm's strict parsing (e.g. "v1.2.3" bumps to "1.3.0").
pub fn minor_increment(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let mut parsed = Version::parse(cleaned)
        .map_err(|e| ManifestError::value(format!("Invalid version '{}': {}", version, e)))?;

    parsed.minor = parsed.minor.checked_add(1).ok_or_else(|| {
        ManifestError::value(format!("Minor component of '{}' cannot be incremented", version))
    })?;
    parsed.patch = 0;
    parsed.pre = Prerelease::EMPTY;
    parsed.build = BuildMetadata::EMPTY;
    Ok(parsed)
}
