//! Note command handlers.

use anyhow::{Result, bail};
use std::path::Path;

use super::resolve::{require_folder, require_note};
use super::{open_repository, truncate_str};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{NoteCommand, NoteEditArgs, NoteLsArgs, NoteShowArgs};
use crate::repository::Repository;

pub fn handle_note(command: &NoteCommand, data_dir: &Path) -> Result<()> {
    let mut repo = open_repository(data_dir)?;

    match command {
        NoteCommand::New(args) => {
            let folder = require_folder(&repo, &args.folder)?;
            let note = repo.create_note(&args.title, &args.description, &folder)?;
            println!(
                "Created note {} ({}) in {}",
                note.title(),
                note.id().prefix(),
                folder.name()
            );
        }
        NoteCommand::Edit(args) => edit_note(&mut repo, args)?,
        NoteCommand::Rm(args) => {
            let note = require_note(&repo, &args.note)?;
            repo.delete_note(&note)?;
            println!("Deleted note {} ({})", note.title(), note.id().prefix());
        }
        NoteCommand::Show(args) => show_note(&repo, args)?,
        NoteCommand::Ls(args) => list_notes(&repo, args)?,
    }

    Ok(())
}

fn edit_note(repo: &mut Repository, args: &NoteEditArgs) -> Result<()> {
    if args.title.is_none() && args.description.is_none() {
        bail!("nothing to change: pass --title and/or --description");
    }

    let note = require_note(repo, &args.note)?;
    let title = args.title.as_deref().unwrap_or(note.title());
    let description = args.description.as_deref().unwrap_or(note.description());

    let updated = repo.update_note(&note, title, description)?;
    println!("Updated note {} ({})", updated.title(), updated.id().prefix());
    Ok(())
}

fn show_note(repo: &Repository, args: &NoteShowArgs) -> Result<()> {
    let note = require_note(repo, &args.note)?;

    match args.format {
        OutputFormat::Human => {
            let folder = repo.get_folder(note.folder_id())?;
            println!("{}", note.title());
            println!();
            println!("{}", note.description());
            println!();
            println!("ID:       {}", note.id());
            println!("Folder:   {}", folder.name());
            println!("Created:  {}", note.created().format("%Y-%m-%d %H:%M"));
            println!("Modified: {}", note.modified().format("%Y-%m-%d %H:%M"));
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn list_notes(repo: &Repository, args: &NoteLsArgs) -> Result<()> {
    let folder = require_folder(repo, &args.folder)?;
    let notes = repo.list_notes(&folder, args.filter.as_deref())?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!("{:<10}  {:<50}  {:>10}", "ID", "Title", "Modified");
            println!(
                "{:<10}  {:<50}  {:>10}",
                "----------",
                "--------------------------------------------------",
                "----------"
            );
            for note in &notes {
                println!(
                    "{:<10}  {:<50}  {:>10}",
                    note.id().prefix(),
                    truncate_str(note.title(), 50),
                    note.modified().format("%Y-%m-%d").to_string()
                );
            }

            println!();
            println!("{} note(s)", notes.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
