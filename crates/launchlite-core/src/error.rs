//! Launcher error types.
//!
//! Validation failures are the only hard errors in this workspace: capability
//! probes degrade to `false` instead of propagating (see `launchlite-jvm`).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when validating a Java installation for launch.
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("The path '{0}' does not exist")]
    PathDoesNotExist(PathBuf),

    #[error("The path '{0}' is not a valid directory")]
    InvalidDirectory(PathBuf),

    /// Same "invalid directory" kind as [`LauncherError::InvalidDirectory`],
    /// but carries the `bin/<exe>` fragment that was expected under the path.
    #[error("The path '{path}' is not a valid directory, could not find '{relative}'")]
    InvalidDirectoryMissing { relative: String, path: PathBuf },
}
