//! Tradebook CLI — manage planned trade entries from the terminal.
//!
//! Commands:
//! - `new` — add an empty entry and print its id
//! - `list` — table of all entries with the active row marked
//! - `show [id]` — detail view for one entry (defaults to the active one)
//! - `select <id>` — change the active entry
//! - `edit <id>` — update fields on an entry
//! - `remove <id>` — delete an entry, moving the selection up a row
//! - `path` — print the state file location
//!
//! Each invocation loads the book, applies at most one mutation, and saves
//! before exiting, so the file on disk always reflects the last command.

mod persistence;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tradebook_core::PositionBook;

#[derive(Parser)]
#[command(
    name = "tradebook",
    about = "Tradebook — planned trade entries with one active selection"
)]
struct Cli {
    /// State file. Defaults to the per-user config directory.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an empty entry and print its id.
    New,
    /// List all entries; the active row is marked with `*`.
    List,
    /// Show one entry in detail. Without an id, shows the active entry.
    Show {
        /// Entry id. Unknown ids fall back to the first entry.
        id: Option<u64>,
    },
    /// Make the given entry the active one.
    Select { id: u64 },
    /// Update fields on the entry with the given id.
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        market: Option<String>,

        /// Stop-loss level.
        #[arg(long)]
        stop: Option<String>,

        /// Take-profit level.
        #[arg(long)]
        take: Option<String>,

        /// Risk per trade (e.g. a percentage).
        #[arg(long)]
        risk: Option<String>,

        /// Account base amount the risk is measured against.
        #[arg(long)]
        base: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete the entry with the given id.
    Remove { id: u64 },
    /// Print the state file location.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(persistence::default_path);
    let mut book = persistence::load(&path);

    match cli.command {
        Commands::New => {
            let id = book.create();
            persistence::save(&path, &book)?;
            println!("Created entry #{id}");
        }
        Commands::List => run_list(&book),
        Commands::Show { id } => run_show(&book, id),
        Commands::Select { id } => {
            book.select(id);
            persistence::save(&path, &book)?;
            match book.active() {
                Some(entry) => println!("Active: #{} {}", entry.id, entry.label()),
                None => println!("Book is empty — nothing to select."),
            }
        }
        Commands::Edit {
            id,
            name,
            market,
            stop,
            take,
            risk,
            base,
            notes,
        } => {
            run_edit(&mut book, id, name, market, stop, take, risk, base, notes)?;
            persistence::save(&path, &book)?;
        }
        Commands::Remove { id } => {
            let before = book.len();
            book.remove_by_id(id);
            if book.len() == before {
                println!("No entry with id {id}; nothing removed.");
            } else {
                persistence::save(&path, &book)?;
                match book.active() {
                    Some(entry) => {
                        println!("Removed #{id}. Active: #{} {}", entry.id, entry.label())
                    }
                    None => println!("Removed #{id}. Book is now empty."),
                }
            }
        }
        Commands::Path => println!("{}", path.display()),
    }

    Ok(())
}

fn run_list(book: &PositionBook) {
    if book.is_empty() {
        println!("No entries. Add one with `tradebook new`.");
        return;
    }

    println!(
        "{:<2} {:>4}  {:<20} {:<10} {:>10} {:>10} {:>6} {:>10}",
        "", "Id", "Name", "Market", "Stop", "Take", "Risk", "Base"
    );
    println!("{}", "-".repeat(80));

    let active = book.active_index();
    for (i, entry) in book.items().iter().enumerate() {
        let marker = if i == active { "*" } else { "" };
        println!(
            "{:<2} {:>4}  {:<20} {:<10} {:>10} {:>10} {:>6} {:>10}",
            marker, entry.id, entry.label(), entry.market, entry.stop, entry.take, entry.risk,
            entry.base
        );
    }
}

fn run_show(book: &PositionBook, id: Option<u64>) {
    let entry = match id {
        Some(id) => book.by_id(id),
        None => book.active(),
    };
    let Some(entry) = entry else {
        println!("No entries. Add one with `tradebook new`.");
        return;
    };

    println!("Entry #{}", entry.id);
    println!("  Name:   {}", entry.label());
    println!("  Market: {}", entry.market);
    println!("  Stop:   {}", entry.stop);
    println!("  Take:   {}", entry.take);
    println!("  Risk:   {}", entry.risk);
    println!("  Base:   {}", entry.base);
    if !entry.notes.is_empty() {
        println!("  Notes:  {}", entry.notes);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_edit(
    book: &mut PositionBook,
    id: u64,
    name: Option<String>,
    market: Option<String>,
    stop: Option<String>,
    take: Option<String>,
    risk: Option<String>,
    base: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let Some(entry) = book.find_mut(id) else {
        bail!("no entry with id {id}");
    };

    if let Some(v) = name {
        entry.name = v;
    }
    if let Some(v) = market {
        entry.market = v;
    }
    if let Some(v) = stop {
        entry.stop = v;
    }
    if let Some(v) = take {
        entry.take = v;
    }
    if let Some(v) = risk {
        entry.risk = v;
    }
    if let Some(v) = base {
        entry.base = v;
    }
    if let Some(v) = notes {
        entry.notes = v;
    }

    println!("Updated entry #{id}");
    Ok(())
}
