//! Adapters turning the persisted ledger into projection inputs.

use rust_decimal::Decimal;
use tracing::warn;

use kakeibo_domain::{Account, Ledger, RecurringTransaction, Transaction};

/// Supplies the recurring definitions a projection run should consider.
pub trait TransactionCatalogue {
    fn recurring_definitions(&self) -> Vec<RecurringTransaction>;
}

/// Supplies the starting balance of a projection run.
pub trait BalanceSource {
    fn initial_balance(&self) -> Decimal;
}

pub struct CatalogueService;

impl CatalogueService {
    /// Converts transactions flagged as recurring (with a day of month) into
    /// projection definitions. Entries that break the definition invariants are
    /// skipped and logged.
    pub fn recurring_definitions(transactions: &[Transaction]) -> Vec<RecurringTransaction> {
        transactions
            .iter()
            .filter(|txn| txn.is_recurring)
            .filter_map(|txn| {
                let day = txn.recurring_day?;
                match RecurringTransaction::new(
                    txn.id.to_string(),
                    txn.amount,
                    txn.kind.direction(),
                    day,
                    txn.description.clone(),
                ) {
                    Ok(definition) => Some(definition),
                    Err(err) => {
                        warn!(transaction = %txn.id, error = %err, "skipping recurring transaction");
                        None
                    }
                }
            })
            .collect()
    }

    /// Sums account balances, optionally restricted to a single currency code.
    pub fn total_balance(accounts: &[Account], currency: Option<&str>) -> Decimal {
        accounts
            .iter()
            .filter(|account| {
                currency.map_or(true, |code| account.currency.eq_ignore_ascii_case(code))
            })
            .map(|account| account.balance)
            .sum()
    }
}

impl TransactionCatalogue for Ledger {
    fn recurring_definitions(&self) -> Vec<RecurringTransaction> {
        CatalogueService::recurring_definitions(&self.transactions)
    }
}

impl BalanceSource for Ledger {
    fn initial_balance(&self) -> Decimal {
        CatalogueService::total_balance(&self.accounts, None)
    }
}

impl TransactionCatalogue for [RecurringTransaction] {
    fn recurring_definitions(&self) -> Vec<RecurringTransaction> {
        self.to_vec()
    }
}

impl BalanceSource for Decimal {
    fn initial_balance(&self) -> Decimal {
        *self
    }
}
