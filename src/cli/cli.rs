use clap::Parser;
use std::path::PathBuf;

#[cfg(windows)]
const DEFAULT_INTERPRETER: &str = "pythonw.exe";
#[cfg(not(windows))]
const DEFAULT_INTERPRETER: &str = "python3";

/// Collector Launcher - starts the news collector in the background unless it is already running
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Root directory; the collector runs here and logs go to <root>/logs
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Interpreter used to run the collector
    #[arg(short, long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: PathBuf,

    /// Collector entry script, relative to the root unless absolute
    #[arg(short, long, default_value = "collector.py")]
    pub entry: PathBuf,

    /// Log more of what the launcher does (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandArgs {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
