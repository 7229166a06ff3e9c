//! Single-user double-entry bookkeeping engine.
//!
//! The [`Ledger`] owns a [`Chart`] (the account registry) and a [`Journal`]
//! (the append-only transaction list) and is the only place the two
//! interact: [`Ledger::record`] moves real balances first and then appends
//! the journal entry, so a transaction never exists in a staged or pending
//! state. Reports are pure aggregations over the chart, and persistence is a
//! line-oriented text file handled by the [`store`] module.
//!
//! Everything is synchronous and single-threaded; every operation runs to
//! completion before the next begins.

use std::path::Path;

pub use accounts::{Account, AccountKind, Chart};
pub use error::LedgerError;
pub use journal::{Journal, Transaction};
pub use money::Money;
pub use reports::{BalanceSheet, IncomeStatement, ReportLine};

mod accounts;
mod error;
mod journal;
mod money;
mod reports;
pub mod store;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// The bookkeeping engine: a chart of accounts plus a transaction journal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    chart: Chart,
    journal: Journal,
}

impl Ledger {
    /// An empty ledger: no accounts, no transactions, next id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account with a zero balance.
    pub fn add_account(&mut self, code: &str, name: &str, kind: AccountKind) -> LedgerResult<()> {
        self.chart.add(code, name, kind)
    }

    /// Removes an account; its balance must be exactly zero.
    pub fn remove_account(&mut self, code: &str) -> LedgerResult<()> {
        self.chart.remove(code)
    }

    pub fn account(&self, code: &str) -> LedgerResult<&Account> {
        self.chart.get(code)
    }

    /// Accounts in ascending code order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.chart.iter()
    }

    /// Transactions in recording (id ascending) order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.journal.iter()
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Records a double-entry transaction and returns its id.
    ///
    /// Debits `debit_code` and credits `credit_code` by `amount` (each
    /// signed per the account kind's polarity), then appends a journal entry
    /// snapshotting the two accounts' current names. All validation happens
    /// before any balance moves: on error the ledger is exactly as it was.
    pub fn record(
        &mut self,
        description: &str,
        debit_code: &str,
        credit_code: &str,
        amount: Money,
    ) -> LedgerResult<u64> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "amount must be positive, got {amount}"
            )));
        }
        let debit_name = self
            .chart
            .get(debit_code)
            .map_err(|_| LedgerError::UnknownAccount(debit_code.to_string()))?
            .name
            .clone();
        let credit_name = self
            .chart
            .get(credit_code)
            .map_err(|_| LedgerError::UnknownAccount(credit_code.to_string()))?
            .name
            .clone();

        self.chart.debit(debit_code, amount)?;
        self.chart.credit(credit_code, amount)?;

        let entry = self
            .journal
            .append(description, &debit_name, &credit_name, amount);
        Ok(entry.id)
    }

    /// Builds the balance sheet from the current chart.
    pub fn balance_sheet(&self) -> BalanceSheet {
        BalanceSheet::from_chart(&self.chart)
    }

    /// Builds the income statement from the current chart.
    pub fn income_statement(&self) -> IncomeStatement {
        IncomeStatement::from_chart(&self.chart)
    }

    /// Writes the ledger to `path` in the text format of [`store`].
    pub fn save(&self, path: &Path) -> LedgerResult<()> {
        store::save(path, &self.chart, &self.journal)
    }

    /// Reads a ledger back from `path`.
    ///
    /// A missing file is an [`LedgerError::Io`] error; first-run callers
    /// treat that as "start empty" rather than as fatal.
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let (chart, journal) = store::load(path)?;
        Ok(Self { chart, journal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Ledger {
        let mut books = Ledger::new();
        books.add_account("1001", "现金", AccountKind::Asset).unwrap();
        books
            .add_account("2001", "应付账款", AccountKind::Liability)
            .unwrap();
        books
    }

    #[test]
    fn record_moves_both_balances_and_appends_one_entry() {
        let mut books = books();

        let id = books
            .record("借款", "1001", "2001", Money::new(50000))
            .unwrap();

        assert_eq!(id, 1);
        assert_eq!(books.account("1001").unwrap().balance, Money::new(50000));
        assert_eq!(books.account("2001").unwrap().balance, Money::new(50000));
        assert_eq!(books.journal().len(), 1);

        let entry = books.transactions().next().unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.description, "借款");
        assert_eq!(entry.debit_account, "现金");
        assert_eq!(entry.credit_account, "应付账款");
        assert_eq!(entry.amount, Money::new(50000));
    }

    #[test]
    fn record_ids_strictly_increase() {
        let mut books = books();
        let first = books.record("a", "1001", "2001", Money::new(100)).unwrap();
        let second = books.record("b", "2001", "1001", Money::new(100)).unwrap();
        assert!(second > first);
    }

    #[test]
    fn record_rejects_non_positive_amounts_without_touching_state() {
        let mut books = books();

        for cents in [0i64, -100] {
            let err = books
                .record("bad", "1001", "2001", Money::new(cents))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)), "{err}");
        }

        assert_eq!(books.account("1001").unwrap().balance, Money::ZERO);
        assert_eq!(books.account("2001").unwrap().balance, Money::ZERO);
        assert!(books.journal().is_empty());
        assert_eq!(books.journal().next_id(), 1);
    }

    #[test]
    fn record_rejects_unknown_accounts_without_touching_state() {
        let mut books = books();

        let err = books
            .record("bad", "9999", "2001", Money::new(100))
            .unwrap_err();
        assert_eq!(err, LedgerError::UnknownAccount("9999".to_string()));

        let err = books
            .record("bad", "1001", "9999", Money::new(100))
            .unwrap_err();
        assert_eq!(err, LedgerError::UnknownAccount("9999".to_string()));

        assert_eq!(books.account("1001").unwrap().balance, Money::ZERO);
        assert_eq!(books.account("2001").unwrap().balance, Money::ZERO);
        assert!(books.journal().is_empty());
    }

    #[test]
    fn deleting_an_account_keeps_history_readable() {
        let mut books = books();
        books.record("借款", "1001", "2001", Money::new(100)).unwrap();
        books.record("还款", "2001", "1001", Money::new(100)).unwrap();

        books.remove_account("1001").unwrap();

        let names: Vec<&str> = books
            .transactions()
            .map(|entry| entry.debit_account.as_str())
            .collect();
        assert_eq!(names, ["现金", "应付账款"]);
    }

    #[test]
    fn balance_sheet_example_scenario() {
        let mut books = books();
        books
            .record("借款", "1001", "2001", Money::new(50000))
            .unwrap();

        let sheet = books.balance_sheet();
        assert_eq!(sheet.total_assets, Money::new(50000));
        assert_eq!(sheet.total_liabilities, Money::new(50000));
        assert_eq!(sheet.total_equity, Money::ZERO);
        assert_eq!(sheet.liabilities_and_equity, Money::new(50000));

        let statement = books.income_statement();
        assert_eq!(statement.total_revenue, Money::ZERO);
        assert_eq!(statement.total_expense, Money::ZERO);
        assert_eq!(statement.net_income, Money::ZERO);
    }
}
