//! Release version comparison for the startup update check.

use semver::Version;

/// Parse a release tag like `v0.2.1` or `0.2.1` into a semver version.
pub fn parse_tag(tag: &str) -> Option<Version> {
    Version::parse(tag.trim().trim_start_matches('v')).ok()
}

/// Whether `latest_tag` names a strictly newer version than `current`.
/// Unparseable tags never report an update.
pub fn is_newer(current: &str, latest_tag: &str) -> bool {
    match (parse_tag(current), parse_tag(latest_tag)) {
        (Some(cur), Some(latest)) => latest > cur,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_patch() {
        assert!(is_newer("0.1.0", "v0.1.1"));
        assert!(!is_newer("0.1.1", "v0.1.1"));
        assert!(!is_newer("0.1.2", "v0.1.1"));
    }

    #[test]
    fn test_minor_beats_patch() {
        assert!(is_newer("0.1.9", "0.2.0"));
    }

    #[test]
    fn test_garbage_tags_never_update() {
        assert!(!is_newer("0.1.0", "nightly"));
        assert!(!is_newer("oops", "0.2.0"));
    }
}
