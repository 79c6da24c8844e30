//! Login, logout, whoami, and completions handlers.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::Path;

use super::{load_session, load_session_or_reset, open_repository};
use crate::cli::config::Config;
use crate::cli::{Cli, CompletionsArgs, LoginArgs, LogoutArgs};
use crate::session::{ConfiguredAccounts, SessionGate, require_authenticated};

pub fn handle_login(args: &LoginArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let accounts = ConfiguredAccounts::new(&config.accounts).with_context(|| {
        format!(
            "invalid account in config file: {}",
            Config::config_path().display()
        )
    })?;
    if accounts.is_empty() {
        tracing::warn!(
            config = %Config::config_path().display(),
            "no accounts configured"
        );
    }

    let mut session = load_session_or_reset(data_dir)?;
    let password = args.password.as_deref().unwrap_or_default();
    let remember = !args.no_remember;
    session.login(&accounts, &args.username, password, remember)?;

    let user = session.current_user().unwrap_or_default();
    if remember {
        println!("Logged in as {}", user);
    } else {
        println!("Credentials accepted for {} (session not remembered)", user);
    }
    Ok(())
}

pub fn handle_logout(args: &LogoutArgs, data_dir: &Path) -> Result<()> {
    let mut session = load_session_or_reset(data_dir)?;
    if args.purge {
        // Purging needs an authenticated session like any other data access
        let mut repo = open_repository(data_dir)?;
        repo.clear_all()?;
        println!("Deleted all folders and notes");
    }

    match session.current_user().map(str::to_string) {
        Some(user) => {
            session.logout()?;
            println!("Logged out {}", user);
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

pub fn handle_whoami(data_dir: &Path) -> Result<()> {
    let session = load_session(data_dir)?;
    let user = require_authenticated(&session)?;
    println!("{}", user);
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
