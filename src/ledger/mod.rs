//! The transaction ledger.
//!
//! This module contains the domain core of the application:
//! - The `Transaction` model and its database queries
//! - Aggregation of a list of transactions into income/expense/balance totals
//! - Filtering of a list of transactions by kind and date range
//!
//! The aggregation and filter functions are pure: they operate on an
//! in-memory snapshot of the ledger and never touch the database themselves.

mod aggregation;
mod filter;
mod transaction;

pub use aggregation::{balance, total_expense, total_income};
pub use filter::{RangePreset, TypeFilter, filter_transactions};
pub use transaction::{
    Transaction, TransactionBuilder, TransactionId, TransactionKind, create_transaction,
    create_transaction_table, delete_transaction, get_all_transactions, map_transaction_row,
};

#[cfg(test)]
pub use transaction::count_transactions;
