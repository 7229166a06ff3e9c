//! The chart of accounts: named accounts grouped into the five classical
//! categories, with the debit/credit polarity rules.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{LedgerResult, error::LedgerError, money::Money};

/// The five classical account categories.
///
/// The category decides the polarity of a balance update: asset and expense
/// accounts grow when debited, liability, equity and revenue accounts grow
/// when credited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }

    /// Zero-based ordinal used by the data file.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Asset => 0,
            Self::Liability => 1,
            Self::Equity => 2,
            Self::Revenue => 3,
            Self::Expense => 4,
        }
    }

    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Asset),
            1 => Some(Self::Liability),
            2 => Some(Self::Equity),
            3 => Some(Self::Revenue),
            4 => Some(Self::Expense),
            _ => None,
        }
    }

    /// `true` when a debit increases balances of this kind.
    pub fn debit_increases(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }
}

/// A single account. `code` and `kind` never change after creation; the
/// balance moves only through [`Account::debit`] and [`Account::credit`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Account {
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
    pub balance: Money,
}

impl Account {
    pub fn new(code: &str, name: &str, kind: AccountKind) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            kind,
            balance: Money::ZERO,
        }
    }

    pub(crate) fn debit(&mut self, amount: Money) {
        if self.kind.debit_increases() {
            self.balance += amount;
        } else {
            self.balance -= amount;
        }
    }

    pub(crate) fn credit(&mut self, amount: Money) {
        if self.kind.debit_increases() {
            self.balance -= amount;
        } else {
            self.balance += amount;
        }
    }
}

/// The account registry, keyed by code.
///
/// Logically a sorted mapping: iteration is always ascending by code, which
/// is also the line order reports and the data file use.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    accounts: BTreeMap<String, Account>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account with a zero balance.
    pub fn add(&mut self, code: &str, name: &str, kind: AccountKind) -> LedgerResult<()> {
        if self.accounts.contains_key(code) {
            return Err(LedgerError::DuplicateCode(code.to_string()));
        }
        self.accounts
            .insert(code.to_string(), Account::new(code, name, kind));
        Ok(())
    }

    /// Removes an account. Only an account whose balance is exactly zero can
    /// be removed; history in the journal is unaffected because entries only
    /// snapshot account names.
    pub fn remove(&mut self, code: &str) -> LedgerResult<()> {
        let account = self
            .accounts
            .get(code)
            .ok_or_else(|| LedgerError::NotFound(code.to_string()))?;
        if !account.balance.is_zero() {
            return Err(LedgerError::NonZeroBalance(code.to_string()));
        }
        self.accounts.remove(code);
        Ok(())
    }

    /// Applies a debit to the account, signed per its kind's polarity.
    pub fn debit(&mut self, code: &str, amount: Money) -> LedgerResult<()> {
        match self.accounts.get_mut(code) {
            Some(account) => {
                account.debit(amount);
                Ok(())
            }
            None => Err(LedgerError::UnknownAccount(code.to_string())),
        }
    }

    /// Applies a credit to the account, signed per its kind's polarity.
    pub fn credit(&mut self, code: &str, amount: Money) -> LedgerResult<()> {
        match self.accounts.get_mut(code) {
            Some(account) => {
                account.credit(amount);
                Ok(())
            }
            None => Err(LedgerError::UnknownAccount(code.to_string())),
        }
    }

    pub fn get(&self, code: &str) -> LedgerResult<&Account> {
        self.accounts
            .get(code)
            .ok_or_else(|| LedgerError::NotFound(code.to_string()))
    }

    /// Iterates accounts in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Rehydration path used by the store; a duplicate code replaces the
    /// earlier record (last one in the file wins).
    pub(crate) fn insert_loaded(&mut self, account: Account) {
        self.accounts.insert(account.code.clone(), account);
    }
}
