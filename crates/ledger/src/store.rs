//! Line-oriented text persistence for the chart and the journal.
//!
//! The on-disk layout is one UTF-8 file with two marker-delimited sections:
//!
//! ```text
//! ACCOUNTS
//! <code>,<name>,<kind_ordinal>,<balance>
//! TRANSACTIONS
//! <id>,<date>,<description>,<debit_name>,<credit_name>,<amount>
//! ```
//!
//! Fields are joined with a literal comma and never escaped; a name or
//! description containing a comma corrupts its record on reload. That is an
//! accepted limitation of the format, kept for compatibility. The codec
//! lives behind this module so a structured encoding could replace it
//! without touching the rest of the engine.
//!
//! Saving has no atomic-rename or fsync guarantee: a crash mid-save can
//! leave a truncated file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{
    LedgerResult,
    accounts::{Account, AccountKind, Chart},
    error::LedgerError,
    journal::{Journal, Transaction},
    money::Money,
};

const ACCOUNTS_MARKER: &str = "ACCOUNTS";
const TRANSACTIONS_MARKER: &str = "TRANSACTIONS";

/// Renders the chart and journal in the persisted text format.
pub fn render(chart: &Chart, journal: &Journal) -> String {
    let mut out = String::new();

    out.push_str(ACCOUNTS_MARKER);
    out.push('\n');
    for account in chart.iter() {
        out.push_str(&format!(
            "{},{},{},{}\n",
            account.code,
            account.name,
            account.kind.ordinal(),
            account.balance
        ));
    }

    out.push_str(TRANSACTIONS_MARKER);
    out.push('\n');
    for entry in journal.iter() {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.id,
            entry.date,
            entry.description,
            entry.debit_account,
            entry.credit_account,
            entry.amount
        ));
    }

    out
}

/// Writes the rendered ledger to `path`, creating or truncating the file.
pub fn save(path: &Path, chart: &Chart, journal: &Journal) -> LedgerResult<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(render(chart, journal).as_bytes())?;
    file.flush()?;
    Ok(())
}

fn corrupt(line: &str, reason: &str) -> LedgerError {
    LedgerError::CorruptRecord(format!("{reason}: `{line}'"))
}

fn parse_account(line: &str) -> LedgerResult<Account> {
    let fields: Vec<&str> = line.split(',').collect();
    let [code, name, ordinal, balance] = fields[..] else {
        return Err(corrupt(line, "account record must have 4 fields"));
    };

    let kind = ordinal
        .parse::<u8>()
        .ok()
        .and_then(AccountKind::from_ordinal)
        .ok_or_else(|| corrupt(line, "unknown account kind ordinal"))?;
    let balance: Money = balance
        .parse()
        .map_err(|_| corrupt(line, "unparseable balance"))?;

    Ok(Account {
        code: code.to_string(),
        name: name.to_string(),
        kind,
        balance,
    })
}

fn parse_transaction(line: &str) -> LedgerResult<Transaction> {
    let fields: Vec<&str> = line.split(',').collect();
    let [id, date, description, debit_account, credit_account, amount] = fields[..] else {
        return Err(corrupt(line, "transaction record must have 6 fields"));
    };

    let id: u64 = id
        .parse()
        .map_err(|_| corrupt(line, "unparseable transaction id"))?;
    let amount: Money = amount
        .parse()
        .map_err(|_| corrupt(line, "unparseable amount"))?;

    Ok(Transaction {
        id,
        date: date.to_string(),
        description: description.to_string(),
        debit_account: debit_account.to_string(),
        credit_account: credit_account.to_string(),
        amount,
    })
}

enum Section {
    Preamble,
    Accounts,
    Transactions,
}

/// Parses the persisted text format back into a chart and journal.
///
/// Section markers switch the parsing state and blank lines are skipped.
/// Any structurally malformed record (wrong field count, unknown kind
/// ordinal, non-numeric id or amount, or a record before the first marker)
/// fails the whole load with [`LedgerError::CorruptRecord`].
pub fn parse(input: &str) -> LedgerResult<(Chart, Journal)> {
    let mut chart = Chart::new();
    let mut journal = Journal::new();
    let mut section = Section::Preamble;

    for line in input.lines() {
        if line == ACCOUNTS_MARKER {
            section = Section::Accounts;
            continue;
        }
        if line == TRANSACTIONS_MARKER {
            section = Section::Transactions;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match section {
            Section::Accounts => chart.insert_loaded(parse_account(line)?),
            Section::Transactions => journal.insert_loaded(parse_transaction(line)?),
            Section::Preamble => return Err(corrupt(line, "record before any section marker")),
        }
    }

    Ok((chart, journal))
}

/// Reads and parses the ledger file at `path`.
///
/// A missing file surfaces as [`LedgerError::Io`]; callers treat that as the
/// first-run condition and start empty.
pub fn load(path: &Path) -> LedgerResult<(Chart, Journal)> {
    let input = fs::read_to_string(path)?;
    parse(&input)
}
