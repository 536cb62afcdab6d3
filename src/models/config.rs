use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

pub const LOG_DIR_NAME: &str = "logs";
pub const STDOUT_LOG_NAME: &str = "collector.out.log";
pub const STDERR_LOG_NAME: &str = "collector.err.log";

/// Fixed inputs of the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Absolute root directory, used as the worker's working directory
    pub root: PathBuf,
    /// Interpreter used to run the worker
    pub interpreter: PathBuf,
    /// Absolute path of the worker entry script
    pub entry: PathBuf,
}

impl LaunchConfig {
    /// Builds a config from an absolute root. A relative entry is taken relative to root.
    ///
    /// Both paths are normalised so the entry matches how it appears in a
    /// worker's command line when started by hand.
    pub fn new(root: impl Into<PathBuf>, interpreter: impl Into<PathBuf>, entry: impl AsRef<Path>) -> Self {
        let root = normalize(&root.into());
        let entry = entry.as_ref();
        let entry = if entry.is_absolute() {
            normalize(entry)
        } else {
            normalize(&root.join(entry))
        };

        Self {
            root,
            interpreter: interpreter.into(),
            entry,
        }
    }

    /// Like [`LaunchConfig::new`], but anchors a relative root at the current directory
    pub fn resolve(root: &Path, interpreter: impl Into<PathBuf>, entry: impl AsRef<Path>) -> Result<Self> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to read current directory")?
                .join(root)
        };

        Ok(Self::new(root, interpreter, entry))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR_NAME)
    }

    pub fn stdout_log(&self) -> PathBuf {
        self.log_dir().join(STDOUT_LOG_NAME)
    }

    pub fn stderr_log(&self) -> PathBuf {
        self.log_dir().join(STDERR_LOG_NAME)
    }

    /// File name of the interpreter, compared against process names
    pub fn interpreter_name(&self) -> String {
        self.interpreter
            .file_name()
            .unwrap_or(self.interpreter.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Drops `.` components and folds `..` into its parent, without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root; a leading relative `..` is kept
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_))) && out.pop();
                if !popped && !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
