use std::io::Write;
use std::path::Path;

use crate::io::lock::{LockError, StoreLock};
use crate::io::paths::resolve_fade_dir;
use crate::io::store::{self, StoreError};
use crate::model::ItemList;
use crate::ops::list_ops;

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error("no item at position {0}")]
    BadPosition(usize),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

use super::commands::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let fade_dir = resolve_fade_dir(cli.dir.as_deref());
    match cli.command {
        // No subcommand launches the TUI; main handles that before us
        None => Ok(()),
        Some(Commands::List) => cmd_list(&fade_dir, cli.json),
        Some(Commands::Add(args)) => cmd_add(&fade_dir, &args.text),
        Some(Commands::Done(args)) => cmd_set_completed(&fade_dir, args.position, true),
        Some(Commands::Undone(args)) => cmd_set_completed(&fade_dir, args.position, false),
        Some(Commands::Remove(args)) => cmd_remove(&fade_dir, args.position),
        Some(Commands::Clear(args)) => cmd_clear(&fade_dir, args.force),
    }
}

fn cmd_list(fade_dir: &Path, json: bool) -> Result<(), CliError> {
    let items = store::load_items(fade_dir)?;
    if json {
        let json = serde_json::to_string_pretty(&items).map_err(std::io::Error::from)?;
        println!("{json}");
        return Ok(());
    }
    if items.is_empty() {
        println!("no items");
        return Ok(());
    }
    for (i, item) in items.iter().enumerate() {
        let marker = if item.is_completed { "[x]" } else { "[ ]" };
        println!("{:>3}  {} {}", i + 1, marker, item.text);
    }
    Ok(())
}

fn cmd_add(fade_dir: &Path, text: &str) -> Result<(), CliError> {
    let _lock = StoreLock::acquire_default(fade_dir)?;
    let mut list = ItemList::from_items(store::load_items(fade_dir)?);
    list_ops::add_item(&mut list, text);
    store::save_items(fade_dir, &list.snapshot())?;
    println!("added {}  {}", list.len(), text);
    Ok(())
}

fn cmd_set_completed(fade_dir: &Path, position: usize, completed: bool) -> Result<(), CliError> {
    let index = position.checked_sub(1).ok_or(CliError::BadPosition(position))?;
    let _lock = StoreLock::acquire_default(fade_dir)?;
    let mut list = ItemList::from_items(store::load_items(fade_dir)?);
    list_ops::set_completed(&mut list, index, completed)
        .map_err(|_| CliError::BadPosition(position))?;
    store::save_items(fade_dir, &list.snapshot())?;
    let state = if completed { "done" } else { "active" };
    println!("marked {} {}", position, state);
    Ok(())
}

fn cmd_remove(fade_dir: &Path, position: usize) -> Result<(), CliError> {
    let index = position.checked_sub(1).ok_or(CliError::BadPosition(position))?;
    let _lock = StoreLock::acquire_default(fade_dir)?;
    let mut list = ItemList::from_items(store::load_items(fade_dir)?);
    let removed =
        list_ops::remove_at(&mut list, index).map_err(|_| CliError::BadPosition(position))?;
    store::save_items(fade_dir, &list.snapshot())?;
    println!("removed {}  {}", position, removed.text);
    Ok(())
}

fn cmd_clear(fade_dir: &Path, force: bool) -> Result<(), CliError> {
    let count = store::load_items(fade_dir)?.len();
    if count == 0 {
        println!("no items");
        return Ok(());
    }

    if !force {
        // Blocking confirmation, default no
        print!("delete all {} items? [y/N] ", count);
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("aborted");
            return Ok(());
        }
    }

    let _lock = StoreLock::acquire_default(fade_dir)?;
    store::save_items(fade_dir, &[])?;
    println!("cleared {} items", count);
    Ok(())
}
