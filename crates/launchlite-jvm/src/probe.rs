//! Live capability probes: spawn `java <flag> -version` and inspect the
//! outcome. Probe failures of every sort (spawn error, timeout, non-zero
//! exit, deprecation warning in the output) degrade to `false` — a capability
//! that cannot be proven supported is treated as unsupported.

use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;

use crate::jvm;
use crate::release;

/// How long a probe child may run before it is killed, in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 30;

/// Poll interval while waiting for a probe child, in milliseconds.
const POLL_INTERVAL_MS: u64 = 50;

/// A runtime that accepts the flag but prints a line with this prefix does
/// not support it cleanly.
const WARNING_PREFIX: &str = "WARNING:";

const SECURITY_MANAGER_ARG: &str = "-Djava.security.manager";
const ENHANCED_SECURITY_MANAGER_ARG: &str = "-Djava.security.manager=allow";
const VERSION_ARG: &str = "-version";

/// Whether the runtime at `java_home` still supports the security manager.
///
/// Ordered strategies, first conclusive answer wins: the `release` metadata
/// file, then a live `-Djava.security.manager -version` probe.
pub fn is_security_manager_supported(java_home: &Path) -> bool {
    if let Some(supported) = release::security_manager_from_release(java_home) {
        tracing::debug!(
            java_home = %java_home.display(),
            supported,
            "release file answered security-manager probe"
        );
        return supported;
    }
    tracing::debug!(
        java_home = %java_home.display(),
        "release file inconclusive, probing live runtime"
    );
    is_argument_supported(Some(java_home), SECURITY_MANAGER_ARG)
}

/// Whether the runtime accepts the special security-manager tokens ("allow",
/// "disallow", "default"). Always a live probe; the release file cannot
/// answer this.
pub fn has_enhanced_security_manager(java_home: &Path) -> bool {
    is_argument_supported(Some(java_home), ENHANCED_SECURITY_MANAGER_ARG)
}

/// Whether the runtime at `java_home` (or the bare `java` from `PATH` when
/// `None`) accepts `argument` alongside `-version`.
pub fn is_argument_supported(java_home: Option<&Path>, argument: &str) -> bool {
    let program = jvm::java_binary(java_home);
    check_process_status(
        &program,
        &[argument, VERSION_ARG],
        Duration::from_secs(PROBE_TIMEOUT_SECS),
    )
}

/// Run the probe command with stdout and stderr merged into a scratch file.
/// `true` only for exit code 0 within the deadline and no `WARNING:` line in
/// the captured output. The scratch file is removed on every path (tempfile
/// RAII); a child still alive at the deadline is killed.
fn check_process_status(program: &Path, args: &[&str], timeout: Duration) -> bool {
    let Ok(capture) = NamedTempFile::new() else {
        return false;
    };
    let Ok(out) = capture.reopen() else {
        return false;
    };
    // Duplicate the handle so stdout and stderr share one file cursor.
    let Ok(err) = out.try_clone() else {
        return false;
    };
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(out))
        .stderr(Stdio::from(err))
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(program = %program.display(), "probe spawn failed: {e}");
            return false;
        }
    };

    let deadline = Instant::now() + timeout;
    let mut result = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status.code() == Some(0),
            Ok(None) if Instant::now() >= deadline => {
                tracing::warn!(
                    program = %program.display(),
                    "probe timed out after {}s, killing child",
                    timeout.as_secs()
                );
                let _ = child.kill();
                let _ = child.wait();
                break false;
            }
            Ok(None) => thread::sleep(Duration::from_millis(POLL_INTERVAL_MS)),
            Err(_) => break false,
        }
    };
    if result && contains_warning(capture.path()) {
        result = false;
    }
    result
}

fn contains_warning(log_file: &Path) -> bool {
    match std::fs::read(log_file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes)
            .lines()
            .any(|line| line.starts_with(WARNING_PREFIX)),
        Err(_) => false,
    }
}
