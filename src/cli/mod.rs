use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::application::{LedgerError, LedgerStore};
use crate::domain::{format_amount, Totals};
use crate::io::{write_export, CSV_EXPORT_FILE, JSON_EXPORT_FILE};
use crate::storage::{FileStore, KeyValueStore};

/// Expense Tracker - income and expense ledger
#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "Track income and expenses, keep running totals, export history")]
#[command(version)]
pub struct Cli {
    /// Directory holding the stored ledger
    #[arg(long, default_value = ".expense-tracker", global = true)]
    pub data_dir: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new entry
    Add {
        /// What the money was for
        description: String,

        /// Positive amount (e.g., "50" or "12.5")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Entry kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },

    /// Delete an entry by id
    Delete {
        /// Entry ID
        id: i64,
    },

    /// List all entries
    List,

    /// Show income, expense and balance
    Totals,

    /// Export history as JSON or CSV
    Export {
        /// Format: json, csv
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Write to transactions.json / transactions.csv when no output is given
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let mut store = LedgerStore::load(FileStore::new(&self.data_dir));
        run_command(&mut store, self.command)
    }
}

/// Execute one command against the ledger, then print its derived state.
pub fn run_command<S: KeyValueStore>(store: &mut LedgerStore<S>, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            description,
            amount,
            kind,
        } => match store.add(&description, &amount, &kind) {
            Ok(entry) => {
                println!(
                    "Added: {} {} {} (id {})",
                    entry.description,
                    entry.kind.sign(),
                    format_amount(entry.amount),
                    entry.id
                );
                print_totals(&store.totals());
            }
            Err(LedgerError::Validation(err)) => {
                anyhow::bail!(
                    "Please enter a valid description and a positive amount. ({})",
                    err
                );
            }
            Err(err) => return Err(err.into()),
        },

        Commands::Delete { id } => {
            let existed = store.get(id).is_some();
            store.delete(id)?;
            if existed {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            print_totals(&store.totals());
        }

        Commands::List => {
            if store.is_empty() {
                println!("No entries found.");
            } else {
                println!("{:<15} {:<30} {:>14}", "ID", "DESCRIPTION", "AMOUNT");
                println!("{}", "-".repeat(61));
                for entry in store.entries() {
                    println!(
                        "{:<15} {:<30} {:>1}{:>13}",
                        entry.id,
                        entry.description,
                        entry.kind.sign(),
                        format_amount(entry.amount)
                    );
                }
            }
        }

        Commands::Totals => {
            print_totals(&store.totals());
        }

        Commands::Export {
            format,
            output,
            save,
        } => {
            let output = export_destination(&format, output, save);
            run_export_command(store, &format, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_totals(totals: &Totals) {
    println!("Income:   {:>15}", format_amount(totals.income_total));
    println!("Expense:  {:>15}", format_amount(totals.expense_total));
    println!("Balance:  {:>15}", format_amount(totals.balance));
}

/// Where an export goes: the explicit output, the default file name when
/// `save` is set, or stdout (`None`).
fn export_destination(format: &str, output: Option<String>, save: bool) -> Option<String> {
    output.or_else(|| match (save, format) {
        (true, "json") => Some(JSON_EXPORT_FILE.to_string()),
        (true, "csv") => Some(CSV_EXPORT_FILE.to_string()),
        _ => None,
    })
}

fn run_export_command<S: KeyValueStore>(
    store: &LedgerStore<S>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let contents = match format {
        "json" => store.export_json()?,
        "csv" => match store.export_csv()? {
            Some(csv) => csv,
            None => {
                eprintln!("Nothing to export");
                return Ok(());
            }
        },
        _ => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: json, csv", format);
        }
    };

    match output {
        Some(path) => {
            write_export(path, &contents)
                .with_context(|| format!("Failed to write export file: {}", path))?;
            eprintln!("Exported {} entries to {}", store.len(), path);
        }
        None => {
            print!("{}", contents);
            if !contents.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
