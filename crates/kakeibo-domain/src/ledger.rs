//! In-memory household ledger: the accounts and transactions a projection is fed from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{account::Account, transaction::Transaction};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Adds an account, returning its identifier.
    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Adds a transaction, returning its identifier.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn recurring_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|txn| txn.is_recurring)
    }
}
