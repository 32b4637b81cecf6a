//! Aggregation of transaction snapshots into summary totals.
//!
//! All functions here are pure: they take an already-materialized list of
//! transactions and return a derived value. Re-running them on the same
//! snapshot always yields the same result, so callers recompute on every
//! page load instead of caching.

use crate::ledger::{Transaction, TransactionKind};

/// The sum of the amounts of all income transactions.
///
/// Transactions of an unrecognized kind are not counted. An empty snapshot
/// sums to zero.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    sum_of_kind(transactions, TransactionKind::Income)
}

/// The sum of the amounts of all expense transactions, as a non-negative
/// magnitude.
///
/// Transactions of an unrecognized kind are not counted. An empty snapshot
/// sums to zero.
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    sum_of_kind(transactions, TransactionKind::Expense)
}

/// The overall balance: total income minus total expense.
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expense(transactions)
}

fn sum_of_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}
