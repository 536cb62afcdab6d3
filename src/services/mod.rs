pub mod launcher;
pub mod platform;
pub mod process_checker;

pub use launcher::Launcher;
pub use platform::{Platform, SystemPlatform};
