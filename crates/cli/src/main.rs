//! `tally` — command-line front-end for the bookkeeping engine.
//!
//! One engine operation per invocation: the data file is loaded, the
//! operation applied, and (for mutating commands) the file saved again. A
//! missing data file means first run and starts an empty ledger. All
//! bookkeeping rules live in the `ledger` crate; this binary only prompts,
//! prints and forwards.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ledger::{AccountKind, Ledger, LedgerError, Money};

mod settings;

#[derive(Parser)]
#[command(name = "tally", version, about = "Single-user double-entry bookkeeping")]
struct Cli {
    /// Ledger data file (overrides the configured path).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a new account with a zero balance.
    AddAccount {
        code: String,
        name: String,
        /// asset | liability | equity | revenue | expense
        #[arg(value_parser = parse_kind)]
        kind: AccountKind,
    },
    /// Delete an account; its balance must be exactly zero.
    RemoveAccount { code: String },
    /// Record a double-entry transaction.
    Record {
        description: String,
        debit_code: String,
        credit_code: String,
        /// Positive decimal amount, e.g. 500 or 12.50.
        amount: Money,
    },
    /// List accounts, or show a single one by code.
    Accounts {
        code: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List transactions in recording order.
    Transactions {
        #[arg(long)]
        json: bool,
    },
    /// Print the balance sheet.
    BalanceSheet {
        #[arg(long)]
        json: bool,
    },
    /// Print the income statement.
    IncomeStatement {
        #[arg(long)]
        json: bool,
    },
}

fn parse_kind(value: &str) -> Result<AccountKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "asset" => Ok(AccountKind::Asset),
        "liability" => Ok(AccountKind::Liability),
        "equity" => Ok(AccountKind::Equity),
        "revenue" => Ok(AccountKind::Revenue),
        "expense" => Ok(AccountKind::Expense),
        other => Err(format!(
            "unknown account kind `{other}' (expected asset, liability, equity, revenue or expense)"
        )),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match settings::Settings::new() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("invalid settings: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally={level},ledger={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli, &settings) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Loads the data file, or starts empty when it does not exist yet.
fn open_books(path: &Path) -> Result<Ledger, LedgerError> {
    match Ledger::load(path) {
        Ok(books) => Ok(books),
        Err(LedgerError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            tracing::info!("no data file at {}, starting empty", path.display());
            Ok(Ledger::new())
        }
        Err(err) => Err(err),
    }
}

fn run(cli: &Cli, settings: &settings::Settings) -> Result<(), Box<dyn std::error::Error>> {
    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.books.path));
    let mut books = open_books(&path)?;

    match &cli.command {
        Command::AddAccount { code, name, kind } => {
            books.add_account(code, name, *kind)?;
            books.save(&path)?;
            tracing::info!("account {code} added");
            println!("account {code} ({name}) added");
        }
        Command::RemoveAccount { code } => {
            books.remove_account(code)?;
            books.save(&path)?;
            tracing::info!("account {code} removed");
            println!("account {code} removed");
        }
        Command::Record {
            description,
            debit_code,
            credit_code,
            amount,
        } => {
            let id = books.record(description, debit_code, credit_code, *amount)?;
            books.save(&path)?;
            tracing::info!("transaction {id} recorded");
            println!("transaction {id} recorded");
        }
        Command::Accounts { code, json } => match code {
            Some(code) => {
                let account = books.account(code)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(account)?);
                } else {
                    print_account(account);
                }
            }
            None => {
                if *json {
                    let accounts: Vec<_> = books.accounts().collect();
                    println!("{}", serde_json::to_string_pretty(&accounts)?);
                } else if books.chart().is_empty() {
                    println!("no accounts");
                } else {
                    for account in books.accounts() {
                        print_account(account);
                    }
                }
            }
        },
        Command::Transactions { json } => {
            if *json {
                let entries: Vec<_> = books.transactions().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if books.journal().is_empty() {
                println!("no transactions");
            } else {
                for entry in books.transactions() {
                    println!(
                        "#{} {} | {} | {} -> {} | {}",
                        entry.id,
                        entry.date,
                        entry.description,
                        entry.debit_account,
                        entry.credit_account,
                        entry.amount
                    );
                }
            }
        }
        Command::BalanceSheet { json } => {
            let sheet = books.balance_sheet();
            if *json {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            } else {
                println!("{sheet}");
            }
        }
        Command::IncomeStatement { json } => {
            let statement = books.income_statement();
            if *json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                println!("{statement}");
            }
        }
    }

    Ok(())
}

fn print_account(account: &ledger::Account) {
    println!(
        "{:<10} {:<10} {:<20} {}",
        account.code,
        account.kind.as_str(),
        account.name,
        account.balance
    );
}
