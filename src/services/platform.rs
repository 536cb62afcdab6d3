use anyhow::{Context, Result};
use std::fs::File;
use std::process::{Command, Stdio};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use crate::models::{ProcessEntry, SpawnRequest};

/// OS capabilities the launcher depends on
pub trait Platform {
    /// Point-in-time list of running processes
    fn list_processes(&self) -> Vec<ProcessEntry>;

    /// Starts `request` detached from this process and returns the child PID.
    /// The child is never waited on.
    fn spawn_detached(&self, request: &SpawnRequest) -> Result<u32>;
}

/// Real process table and process spawning
#[derive(Debug, Default)]
pub struct SystemPlatform;

impl SystemPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for SystemPlatform {
    fn list_processes(&self) -> Vec<ProcessEntry> {
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::OnlyIfNotSet),
        );

        sys.processes()
            .iter()
            .map(|(pid, process)| {
                let process_cmd = process
                    .cmd()
                    .iter()
                    .map(|s| s.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ");

                ProcessEntry::new(
                    pid.as_u32(),
                    process.name().to_string_lossy(),
                    Some(process_cmd),
                )
            })
            .collect()
    }

    fn spawn_detached(&self, request: &SpawnRequest) -> Result<u32> {
        // File::create truncates, so every launch starts fresh logs
        let stdout = File::create(&request.stdout)
            .with_context(|| format!("Failed to open stdout log {}", request.stdout.display()))?;
        let stderr = File::create(&request.stderr)
            .with_context(|| format!("Failed to open stderr log {}", request.stderr.display()))?;

        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .current_dir(&request.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr));
        detach(&mut command);

        let child = command
            .spawn()
            .with_context(|| format!("Failed to spawn {}", request.program.display()))?;

        Ok(child.id())
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: setsid is async-signal-safe and touches no parent state
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

#[cfg(windows)]
fn detach(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP | CREATE_NO_WINDOW);
}

#[cfg(not(any(unix, windows)))]
fn detach(_command: &mut Command) {}
