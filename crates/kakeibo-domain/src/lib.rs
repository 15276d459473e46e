//! kakeibo-domain
//!
//! Pure domain models for cash-flow projection (recurring definitions, what-if
//! events, daily balances) and the household ledger they are drawn from.
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod common;
pub mod ledger;
pub mod projection;
pub mod transaction;

pub use account::*;
pub use common::*;
pub use ledger::*;
pub use projection::*;
pub use transaction::*;
