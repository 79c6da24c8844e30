//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notelist - folders of notes in a local database
#[derive(Parser, Debug)]
#[command(name = "notelist", version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding the database and session (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with a configured account
    Login(LoginArgs),

    /// Log out and forget the remembered session
    Logout(LogoutArgs),

    /// Show the logged-in user
    Whoami,

    /// Manage folders
    #[command(subcommand)]
    Folder(FolderCommand),

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `login` command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account username
    pub username: String,

    /// Account password
    #[arg(short, long, env = "NOTELIST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Do not keep the session after this command
    #[arg(long)]
    pub no_remember: bool,
}

/// Arguments for the `logout` command
#[derive(Parser, Debug)]
pub struct LogoutArgs {
    /// Also delete every folder and note
    #[arg(long)]
    pub purge: bool,
}

#[derive(Subcommand, Debug)]
pub enum FolderCommand {
    /// Create a folder
    New(FolderNewArgs),

    /// Rename a folder
    Rename(FolderRenameArgs),

    /// Delete a folder and all of its notes
    Rm(FolderRmArgs),

    /// List folders, optionally filtered by name
    Ls(FolderLsArgs),
}

/// Arguments for `folder new`
#[derive(Parser, Debug)]
pub struct FolderNewArgs {
    /// Folder name
    pub name: String,
}

/// Arguments for `folder rename`
#[derive(Parser, Debug)]
pub struct FolderRenameArgs {
    /// Folder name or ID prefix
    pub folder: String,

    /// New folder name
    pub new_name: String,
}

/// Arguments for `folder rm`
#[derive(Parser, Debug)]
pub struct FolderRmArgs {
    /// Folder name or ID prefix
    pub folder: String,
}

/// Arguments for `folder ls`
#[derive(Parser, Debug)]
pub struct FolderLsArgs {
    /// Only folders whose name contains this text (ignoring case)
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Create a note in a folder
    New(NoteNewArgs),

    /// Change a note's title or description
    Edit(NoteEditArgs),

    /// Delete a note
    Rm(NoteRmArgs),

    /// Show a note
    Show(NoteShowArgs),

    /// List the notes of a folder, optionally filtered by title
    Ls(NoteLsArgs),
}

/// Arguments for `note new`
#[derive(Parser, Debug)]
pub struct NoteNewArgs {
    /// Folder name or ID prefix
    pub folder: String,

    /// Note title
    pub title: String,

    /// Note description
    pub description: String,
}

/// Arguments for `note edit`
#[derive(Parser, Debug)]
pub struct NoteEditArgs {
    /// Note ID or ID prefix
    pub note: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub description: Option<String>,
}

/// Arguments for `note rm`
#[derive(Parser, Debug)]
pub struct NoteRmArgs {
    /// Note ID or ID prefix
    pub note: String,
}

/// Arguments for `note show`
#[derive(Parser, Debug)]
pub struct NoteShowArgs {
    /// Note ID or ID prefix
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `note ls`
#[derive(Parser, Debug)]
pub struct NoteLsArgs {
    /// Folder name or ID prefix
    pub folder: String,

    /// Only notes whose title contains this text (ignoring case)
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
