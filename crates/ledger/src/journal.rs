//! The append-only transaction journal.

use chrono::Local;
use serde::Serialize;

use crate::money::Money;

/// A recorded double-entry transaction.
///
/// Holds the *names* of the two accounts as they were at recording time, not
/// their codes: deleting an account later never invalidates history, and the
/// snapshot is immutable once written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transaction {
    pub id: u64,
    /// Creation-time string, captured once and never reparsed.
    pub date: String,
    pub description: String,
    pub debit_account: String,
    pub credit_account: String,
    pub amount: Money,
}

/// Transactions in insertion order plus the id counter.
///
/// `next_id` is an explicit field rather than a global: it starts at 1 and
/// the store restores it to one past the highest persisted id, so ids are
/// never reused across reloads.
#[derive(Clone, Debug, PartialEq)]
pub struct Journal {
    entries: Vec<Transaction>,
    next_id: u64,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new transaction, assigning it the next sequential id and
    /// stamping the current local time.
    pub(crate) fn append(
        &mut self,
        description: &str,
        debit_account: &str,
        credit_account: &str,
        amount: Money,
    ) -> &Transaction {
        let entry = Transaction {
            id: self.next_id,
            date: Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
            description: description.to_string(),
            debit_account: debit_account.to_string(),
            credit_account: credit_account.to_string(),
            amount,
        };
        self.next_id += 1;
        self.entries.push(entry);

        &self.entries[self.entries.len() - 1]
    }

    /// Iterates transactions in insertion (id ascending) order.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next recorded transaction will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Rehydration path used by the store; keeps the counter one past the
    /// highest id seen.
    pub(crate) fn insert_loaded(&mut self, entry: Transaction) {
        self.next_id = self.next_id.max(entry.id + 1);
        self.entries.push(entry);
    }
}
