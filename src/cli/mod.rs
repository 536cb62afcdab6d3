mod cli;

pub use cli::CommandArgs;
