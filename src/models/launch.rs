use std::ffi::OsString;
use std::path::PathBuf;

/// Everything needed to start the worker as a detached child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Working directory of the child only; the launcher's own cwd is untouched
    pub cwd: PathBuf,
    pub stdout: PathBuf,
    pub stderr: PathBuf,
}

/// Result of a successful launcher run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A matching worker was found, nothing was started
    AlreadyRunning,
    /// A new worker was spawned
    Launched { pid: u32 },
}
