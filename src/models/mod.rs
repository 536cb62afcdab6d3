pub mod config;
pub mod launch;
pub mod process;

pub use config::LaunchConfig;
pub use launch::{LaunchOutcome, SpawnRequest};
pub use process::ProcessEntry;
