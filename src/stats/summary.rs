//! Database queries for retrieving pre-aggregated stats data.
//!
//! The stats page never aggregates in memory: daily totals come back from
//! the store already summed per date, and the top-spending list comes back
//! already ordered and limited.

use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    ledger::{Transaction, map_transaction_row},
};

/// The total amount spent on one date.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct DailyExpense {
    /// The date bucket.
    pub date: Date,
    /// The summed expense magnitude for that date.
    pub total: f64,
}

/// Gets the expense total for each date that has at least one expense,
/// oldest first.
///
/// Only rows stored with the expense kind are counted; income and rows of an
/// unrecognized kind never show up in the spending chart.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub(super) fn get_expense_totals_by_day(connection: &Connection) -> Result<Vec<DailyExpense>, Error> {
    connection
        .prepare(
            "SELECT date, SUM(amount) FROM \"transaction\"
             WHERE kind = 'Expense'
             GROUP BY date
             ORDER BY date ASC",
        )?
        .query_map([], |row| {
            Ok(DailyExpense {
                date: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|result| result.map_err(Error::SqlError))
        .collect()
}

/// Gets the `limit` largest expenses, biggest first.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub(super) fn get_top_expenses(
    limit: u32,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, kind, date, category FROM \"transaction\"
             WHERE kind = 'Expense'
             ORDER BY amount DESC, date DESC
             LIMIT ?1",
        )?
        .query_map([limit], map_transaction_row)?
        .map(|result| result.map_err(Error::SqlError))
        .collect()
}
