//! Platform environment helpers: executable naming and default Java home
//! discovery.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether this build targets a Windows-family platform.
pub fn is_windows() -> bool {
    cfg!(windows)
}

/// Name of the java executable inside a JDK's `bin/` directory.
pub fn java_exe() -> &'static str {
    if is_windows() {
        "java.exe"
    } else {
        "java"
    }
}

/// The Java home the launcher uses when the caller names none.
///
/// Resolved once per process and cached; `java_home` is `None` when neither
/// `JAVA_HOME` nor `PATH` yields a usable installation.
#[derive(Debug, Clone)]
pub struct JavaHomeConfig {
    pub java_home: Option<PathBuf>,
}

impl JavaHomeConfig {
    pub fn from_env() -> &'static Self {
        static CACHE: OnceLock<JavaHomeConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            java_home: discover_java_home(),
        })
    }
}

/// `JAVA_HOME` wins; otherwise walk up from a `java` found on `PATH`
/// (`<home>/bin/java` implies `<home>`).
fn discover_java_home() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("JAVA_HOME") {
        let home = PathBuf::from(home);
        if home.is_dir() {
            return Some(home.canonicalize().unwrap_or(home));
        }
        tracing::warn!(
            "JAVA_HOME is set but is not a directory: {}",
            home.display()
        );
    }
    let java = which::which(java_exe()).ok()?;
    // Resolve symlinks (e.g. /usr/bin/java -> /usr/lib/jvm/.../bin/java)
    // before walking up, or the grandparent is not the real home.
    let java = java.canonicalize().unwrap_or(java);
    Some(java.parent()?.parent()?.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_exe_matches_platform() {
        if cfg!(windows) {
            assert_eq!(java_exe(), "java.exe");
        } else {
            assert_eq!(java_exe(), "java");
        }
    }

    #[test]
    fn config_is_cached() {
        assert!(std::ptr::eq(
            JavaHomeConfig::from_env(),
            JavaHomeConfig::from_env()
        ));
    }
}
