mod db;
mod error;
mod models;
mod operations;

use clap::Parser;
use db::repository::{DEFAULT_STORE_PATH, ExpenseStore};
use error::StoreError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "expenses",
    about = "Log personal expenses and summarize them by category or month"
)]
struct Args {
    /// JSON file the expenses are stored in.
    #[arg(short, long, default_value = DEFAULT_STORE_PATH)]
    file: PathBuf,
    /// Tracing filter directive for diagnostics on stderr.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, PartialEq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    ViewByCategory,
    MonthlySummary,
    Exit,
    Invalid,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let mut store = ExpenseStore::new(args.file);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut store, stdin.lock(), stdout.lock()) {
        tracing::error!("terminal error: {e}");
    }
}

fn run<R: BufRead, W: Write>(
    store: &mut ExpenseStore,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    match store.load() {
        Ok(count) => tracing::debug!(path = %store.path().display(), count, "store ready"),
        Err(StoreError::Decode { .. }) => writeln!(out, "Error decoding the file.")?,
        Err(e) => writeln!(out, "Error reading data: {}", e)?,
    }

    loop {
        writeln!(out, "\nExpense Tracker Menu:")?;
        writeln!(out, "1. Add Expense")?;
        writeln!(out, "2. View All Expenses")?;
        writeln!(out, "3. View Expenses by Category")?;
        writeln!(out, "4. View Monthly Summary")?;
        writeln!(out, "5. Exit")?;

        let choice = match prompt(&mut input, &mut out, "Enter your choice (1-5): ")? {
            Some(choice) => check_for_choice(&choice),
            None => {
                writeln!(out)?;
                writeln!(out, "Exiting...")?;
                break;
            }
        };

        match choice {
            MenuChoice::Add => {
                let Some(amount) = prompt(&mut input, &mut out, "Enter amount: ")? else {
                    break;
                };
                let Some(description) = prompt(&mut input, &mut out, "Enter description: ")? else {
                    break;
                };
                let category_prompt = "Enter category (e.g., food, transport, etc.): ";
                let Some(category) = prompt(&mut input, &mut out, category_prompt)? else {
                    break;
                };
                match store.add(&amount, &description, &category) {
                    Ok(()) => writeln!(out, "Expense added successfully!")?,
                    Err(StoreError::InvalidAmount(_)) => {
                        writeln!(out, "Invalid input. Please enter a valid number for the amount.")?
                    }
                    Err(e) => writeln!(out, "Error saving data: {}", e)?,
                }
            }
            MenuChoice::ViewAll => match store.list_all() {
                Some(expenses) => {
                    for exp in expenses {
                        writeln!(
                            out,
                            "Amount: {} | Description: {} | Category: {} | Date: {}",
                            exp.amount,
                            exp.description,
                            exp.category,
                            exp.date_string()
                        )?;
                    }
                }
                None => writeln!(out, "No expenses recorded.")?,
            },
            MenuChoice::ViewByCategory => {
                let Some(category) = prompt(&mut input, &mut out, "Enter category to filter by: ")?
                else {
                    break;
                };
                match store.list_by_category(&category) {
                    Some(expenses) => {
                        for exp in expenses {
                            writeln!(
                                out,
                                "Amount: {} | Description: {} | Date: {}",
                                exp.amount,
                                exp.description,
                                exp.date_string()
                            )?;
                        }
                    }
                    None => writeln!(out, "No expenses found for category '{}'.", category)?,
                }
            }
            MenuChoice::MonthlySummary => {
                let Some(month) = prompt(&mut input, &mut out, "Enter month (YYYY-MM): ")? else {
                    break;
                };
                match store.summary_for_month(&month) {
                    Some(summary) => {
                        writeln!(out, "Total spent in {}: {}", summary.month, summary.total)?;
                        for exp in summary.expenses {
                            writeln!(
                                out,
                                "Amount: {} | Description: {} | Category: {}",
                                exp.amount, exp.description, exp.category
                            )?;
                        }
                    }
                    None => writeln!(out, "No expenses found for month '{}'.", month)?,
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                break;
            }
            MenuChoice::Invalid => writeln!(out, "Invalid choice. Please select a valid option.")?,
        }
    }

    Ok(())
}

/// Prints `message` and reads one trimmed line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn check_for_choice(input: &str) -> MenuChoice {
    match input {
        "1" => MenuChoice::Add,
        "2" => MenuChoice::ViewAll,
        "3" => MenuChoice::ViewByCategory,
        "4" => MenuChoice::MonthlySummary,
        "5" => MenuChoice::Exit,
        _ => MenuChoice::Invalid,
    }
}
