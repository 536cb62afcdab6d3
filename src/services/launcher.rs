use anyhow::{Context, Result};
use std::fs;

use crate::models::{LaunchConfig, LaunchOutcome, SpawnRequest};
use crate::services::platform::Platform;
use crate::services::process_checker;

/// Starts the collector unless an instance is already running
///
/// The check and the spawn are not atomic: two launchers started at the same
/// instant can both see an empty snapshot and both spawn a worker.
pub struct Launcher<P> {
    platform: P,
    config: LaunchConfig,
}

impl<P: Platform> Launcher<P> {
    pub fn new(platform: P, config: LaunchConfig) -> Self {
        Self { platform, config }
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Creates `<root>/logs` and any missing parents
    pub fn ensure_log_directory(&self) -> Result<()> {
        let log_dir = self.config.log_dir();
        fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))
    }

    /// Takes one process snapshot and reports whether the worker is in it
    pub fn is_already_running(&self) -> bool {
        let snapshot = self.platform.list_processes();
        let interpreter_name = self.config.interpreter_name();
        let entry = self.config.entry.to_string_lossy();

        let running = process_checker::is_already_running(&snapshot, &interpreter_name, &entry);

        if log::log_enabled!(log::Level::Debug) {
            let matches = process_checker::matching_processes(&snapshot, &interpreter_name, &entry);
            log::debug!(
                "Scanned {} processes for '{}' running '{}': {} match(es)",
                snapshot.len(),
                interpreter_name,
                entry,
                matches.len()
            );
            for process in matches {
                log::debug!("  PID {}: {}", process.pid, process.cmdline.as_deref().unwrap_or(""));
            }
        }

        running
    }

    /// Spawns the worker detached, with its output going to the two log files
    pub fn launch(&self) -> Result<u32> {
        let request = self.spawn_request();
        log::debug!("Spawning {:?}", request);

        self.platform.spawn_detached(&request)
    }

    /// Ensures the log directory, then launches the worker or skips if one is running
    pub fn run(&self) -> Result<LaunchOutcome> {
        self.ensure_log_directory()?;

        if self.is_already_running() {
            log::info!("Collector already running, nothing to do");
            return Ok(LaunchOutcome::AlreadyRunning);
        }

        let pid = self.launch()?;
        log::info!(
            "🚀 Collector started with PID {} (logs in {})",
            pid,
            self.config.log_dir().display()
        );

        Ok(LaunchOutcome::Launched { pid })
    }

    fn spawn_request(&self) -> SpawnRequest {
        SpawnRequest {
            program: self.config.interpreter.clone(),
            args: vec![self.config.entry.clone().into_os_string()],
            cwd: self.config.root.clone(),
            stdout: self.config.stdout_log(),
            stderr: self.config.stderr_log(),
        }
    }
}
