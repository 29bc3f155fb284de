//! Parsing of the `release` metadata file shipped at the root of a JDK
//! install. JRE-style installs commonly lack it, in which case callers fall
//! back to the live probes in [`crate::probe`].

use std::path::Path;

const JAVA_VERSION_KEY: &str = "JAVA_VERSION=";

/// First major version with the security manager removed (JEP 486).
pub const SECURITY_MANAGER_REMOVED_MAJOR: u32 = 24;

/// First major version accepting the special security-manager tokens
/// ("allow", "disallow", "default").
pub const ENHANCED_SECURITY_MANAGER_MIN_MAJOR: u32 = 12;

/// Major Java version read from `<java_home>/release`, `None` when the file
/// is absent, unreadable, or carries no parseable `JAVA_VERSION`.
pub fn major_version(java_home: &Path) -> Option<u32> {
    parse_major(&java_version_value(java_home)?)
}

/// Conclusive answer for the legacy security-manager capability, `None` when
/// the release file cannot answer and a live probe is required.
///
/// A `JAVA_VERSION` line that is present but unparseable is a conclusive
/// `false`, not a fall-through.
pub fn security_manager_from_release(java_home: &Path) -> Option<bool> {
    let value = java_version_value(java_home)?;
    Some(matches!(parse_major(&value), Some(major) if major < SECURITY_MANAGER_REMOVED_MAJOR))
}

/// Raw `JAVA_VERSION` value from `<java_home>/release`, `None` when the file
/// is not a readable regular file or carries no such line.
fn java_version_value(java_home: &Path) -> Option<String> {
    let release = java_home.join("release");
    if !release.is_file() {
        return None;
    }
    let content = std::fs::read_to_string(&release).ok()?;
    content
        .lines()
        .find_map(|line| line.strip_prefix(JAVA_VERSION_KEY))
        .map(str::to_string)
}

/// `"17.0.1"` (quoted or not) -> `17`.
fn parse_major(value: &str) -> Option<u32> {
    let value = value.trim().replace('"', "");
    value.split('.').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn home_with_release(content: &str) -> TempDir {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join("release"), content).unwrap();
        home
    }

    #[test]
    fn quoted_version_is_parsed() {
        let home = home_with_release("IMPLEMENTOR=\"Eclipse Adoptium\"\nJAVA_VERSION=\"17.0.1\"\n");
        assert_eq!(major_version(home.path()), Some(17));
        assert_eq!(security_manager_from_release(home.path()), Some(true));
    }

    #[test]
    fn unquoted_version_is_parsed() {
        let home = home_with_release("JAVA_VERSION=11.0.22\n");
        assert_eq!(major_version(home.path()), Some(11));
    }

    #[test]
    fn major_at_removal_threshold_is_unsupported() {
        let home = home_with_release("JAVA_VERSION=\"24.0.0\"\n");
        assert_eq!(security_manager_from_release(home.path()), Some(false));
    }

    #[test]
    fn single_segment_version_is_parsed() {
        let home = home_with_release("JAVA_VERSION=\"21\"\n");
        assert_eq!(major_version(home.path()), Some(21));
    }

    #[test]
    fn missing_file_is_inconclusive() {
        let home = TempDir::new().unwrap();
        assert_eq!(major_version(home.path()), None);
        assert_eq!(security_manager_from_release(home.path()), None);
    }

    #[test]
    fn missing_key_is_inconclusive() {
        let home = home_with_release("IMPLEMENTOR=\"Someone\"\nOS_NAME=\"Linux\"\n");
        assert_eq!(security_manager_from_release(home.path()), None);
    }

    #[test]
    fn garbage_version_is_conclusively_unsupported() {
        let home = home_with_release("JAVA_VERSION=\"not-a-number\"\n");
        assert_eq!(major_version(home.path()), None);
        assert_eq!(security_manager_from_release(home.path()), Some(false));
    }

    #[test]
    fn release_directory_is_inconclusive() {
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join("release")).unwrap();
        assert_eq!(security_manager_from_release(home.path()), None);
    }
}
