//! Folder command handlers.

use anyhow::Result;
use std::path::Path;

use super::resolve::require_folder;
use super::{open_repository, truncate_str};
use crate::cli::output::{FolderListing, Output, OutputFormat};
use crate::cli::{FolderCommand, FolderLsArgs};
use crate::repository::Repository;

pub fn handle_folder(command: &FolderCommand, data_dir: &Path) -> Result<()> {
    let mut repo = open_repository(data_dir)?;

    match command {
        FolderCommand::New(args) => {
            let folder = repo.create_folder(&args.name)?;
            println!("Created folder {} ({})", folder.name(), folder.id().prefix());
        }
        FolderCommand::Rename(args) => {
            let folder = require_folder(&repo, &args.folder)?;
            let renamed = repo.rename_folder(&folder, &args.new_name)?;
            println!("Renamed folder {} to {}", folder.name(), renamed.name());
        }
        FolderCommand::Rm(args) => {
            let folder = require_folder(&repo, &args.folder)?;
            let removed = repo.delete_folder(&folder)?;
            println!(
                "Deleted folder {} and {} note(s)",
                folder.name(),
                removed
            );
        }
        FolderCommand::Ls(args) => list_folders(&repo, args)?,
    }

    Ok(())
}

fn list_folders(repo: &Repository, args: &FolderLsArgs) -> Result<()> {
    let summaries = repo.list_folder_summaries(args.filter.as_deref())?;

    match args.format {
        OutputFormat::Human => {
            if summaries.is_empty() {
                println!("No folders found.");
                return Ok(());
            }

            println!("{:<10}  {:<40}  {:>5}", "ID", "Name", "Notes");
            println!(
                "{:<10}  {:<40}  {:>5}",
                "----------",
                "----------------------------------------",
                "-----"
            );
            for summary in &summaries {
                let folder = &summary.folder;
                println!(
                    "{:<10}  {:<40}  {:>5}",
                    folder.id().prefix(),
                    truncate_str(folder.name(), 40),
                    summary.note_count
                );
            }

            println!();
            println!("{} folder(s)", summaries.len());
        }
        OutputFormat::Json => {
            let listings: Vec<FolderListing> = summaries.iter().map(FolderListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
