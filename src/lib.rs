//! notelist - folders of notes in a local database

pub mod cli;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_folder, handle_login, handle_logout, handle_note,
        handle_whoami,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match &cli.command {
        Command::Login(args) => handle_login(args, &data_dir, &config),
        Command::Logout(args) => handle_logout(args, &data_dir),
        Command::Whoami => handle_whoami(&data_dir),
        Command::Folder(command) => handle_folder(command, &data_dir),
        Command::Note(command) => handle_note(command, &data_dir),
        Command::Completions(args) => handle_completions(args),
    }
}
