use clap::Parser;

mod cli;
mod models;
mod services;

use cli::CommandArgs;
use models::{LaunchConfig, LaunchOutcome};
use services::{Launcher, SystemPlatform};

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter())).init();

    let config = LaunchConfig::resolve(&args.root, args.interpreter.clone(), &args.entry)?;
    let launcher = Launcher::new(SystemPlatform::new(), config);
    log::debug!("Launch config: {:?}", launcher.config());

    if let LaunchOutcome::Launched { pid } = launcher.run()? {
        log::debug!("Not waiting on PID {}, exiting", pid);
    }

    Ok(())
}
