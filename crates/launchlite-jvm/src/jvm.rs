//! Descriptor for one Java runtime installation: where its executable lives
//! and which deprecated security-manager flags it still tolerates.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use launchlite_core::env;
use launchlite_core::error::LauncherError;

use crate::probe;
use crate::release;

/// One Java runtime installation, immutable once constructed.
///
/// `path` is `None` only for the current-runtime descriptor when neither
/// `JAVA_HOME` nor `PATH` yields an install root; [`Jvm::of`] always
/// validates and stores a canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jvm {
    path: Option<PathBuf>,
    security_manager_supported: bool,
    enhanced_security_manager: bool,
}

impl Jvm {
    /// The runtime the launcher uses by default, resolved from `JAVA_HOME`
    /// or `PATH` once and cached for the process lifetime.
    pub fn current() -> &'static Jvm {
        static CURRENT: OnceLock<Jvm> = OnceLock::new();
        CURRENT.get_or_init(|| {
            match env::JavaHomeConfig::from_env().java_home.clone() {
                Some(home) => {
                    let (supported, enhanced) = current_capabilities(&home);
                    Jvm {
                        path: Some(home),
                        security_manager_supported: supported,
                        enhanced_security_manager: enhanced,
                    }
                }
                None => {
                    tracing::warn!("no Java runtime found via JAVA_HOME or PATH");
                    Jvm {
                        path: None,
                        security_manager_supported: false,
                        enhanced_security_manager: false,
                    }
                }
            }
        })
    }

    /// Descriptor for the runtime at `java_home`. `None`, or the current
    /// runtime's own home, yields the cached descriptor from
    /// [`Jvm::current`] without re-validating or re-probing.
    pub fn of(java_home: Option<&Path>) -> Result<Jvm, LauncherError> {
        let current = Self::current();
        let Some(java_home) = java_home else {
            return Ok(current.clone());
        };
        if current.path.as_deref() == Some(java_home) {
            return Ok(current.clone());
        }
        let path = validate_java_home(java_home)?;
        // The raw argument may only match the current home once canonicalized.
        if current.path.as_deref() == Some(path.as_path()) {
            return Ok(current.clone());
        }
        let supported = probe::is_security_manager_supported(&path);
        let enhanced = supported && probe::has_enhanced_security_manager(&path);
        Ok(Jvm {
            path: Some(path),
            security_manager_supported: supported,
            enhanced_security_manager: enhanced,
        })
    }

    /// The command which can launch this JVM, quoted if it contains spaces.
    pub fn command(&self) -> String {
        resolve_java_command(self.path.as_deref())
    }

    /// The install root, `None` when the launcher falls back to the bare
    /// `java` from `PATH`.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether `-Djava.security.manager` can be passed to this runtime.
    pub fn is_security_manager_supported(&self) -> bool {
        self.security_manager_supported
    }

    /// Whether the special security-manager tokens ("allow", "disallow",
    /// "default") can be passed to this runtime. Implies
    /// [`Jvm::is_security_manager_supported`].
    pub fn enhanced_security_manager_available(&self) -> bool {
        self.enhanced_security_manager
    }
}

/// Capabilities of the default runtime: the release file answers both flags
/// without spawning anything; only an inconclusive file costs live probes.
fn current_capabilities(home: &Path) -> (bool, bool) {
    match release::major_version(home) {
        Some(major) => {
            let supported = major < release::SECURITY_MANAGER_REMOVED_MAJOR;
            let enhanced = supported && major >= release::ENHANCED_SECURITY_MANAGER_MIN_MAJOR;
            (supported, enhanced)
        }
        None => {
            let supported = probe::is_security_manager_supported(home);
            let enhanced = supported && probe::has_enhanced_security_manager(home);
            (supported, enhanced)
        }
    }
}

/// Check that `java_home` is an existing directory holding `bin/<exe>` and
/// return it in absolute canonical form.
pub fn validate_java_home(java_home: &Path) -> Result<PathBuf, LauncherError> {
    if !java_home.exists() {
        return Err(LauncherError::PathDoesNotExist(java_home.to_path_buf()));
    }
    if !java_home.is_dir() {
        return Err(LauncherError::InvalidDirectory(java_home.to_path_buf()));
    }
    let normalized = java_home
        .canonicalize()
        .map_err(|_| LauncherError::InvalidDirectory(java_home.to_path_buf()))?;
    let relative = Path::new("bin").join(env::java_exe());
    if !normalized.join(&relative).exists() {
        return Err(LauncherError::InvalidDirectoryMissing {
            relative: relative.to_string_lossy().into_owned(),
            path: java_home.to_path_buf(),
        });
    }
    Ok(normalized)
}

/// The launch command for a Java home, the bare `"java"` when no home is
/// given. Wrapped in double quotes when the path contains a space — the
/// quoting is for shell-facing command strings; probes use
/// [`java_binary`] directly.
pub fn resolve_java_command(java_home: Option<&Path>) -> String {
    let exe = java_binary(java_home).to_string_lossy().into_owned();
    if exe.contains(' ') {
        format!("\"{exe}\"")
    } else {
        exe
    }
}

/// Unquoted executable path, suitable for `Command::new`. Always the
/// unsuffixed `java` token; suffix checking belongs to validation.
pub(crate) fn java_binary(java_home: Option<&Path>) -> PathBuf {
    match java_home {
        Some(home) => home.join("bin").join("java"),
        None => PathBuf::from("java"),
    }
}
