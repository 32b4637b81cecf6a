//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use time::Date;

use crate::Error;

/// The ID of a transaction in the database.
pub type TransactionId = i64;

/// Whether a transaction brought money in or took money out.
///
/// The kind is stored as text in the database. Rows whose stored kind is
/// neither `Income` nor `Expense` (e.g., written by an older version or by
/// other tooling) map to [TransactionKind::Other] instead of failing the
/// query. Such rows are still listed, but they are never counted toward the
/// income or expense totals and they do not match the typed list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a grocery shop.
    Expense,
    /// A stored kind this version of the app does not recognize.
    Other,
}

impl TransactionKind {
    /// The text stored in the database for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other => "Other",
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(value: &str) -> Self {
        match value {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            _ => Self::Other,
        }
    }
}

/// An income or expense, i.e. an event where money was either earned or spent.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short text label for the transaction, e.g. "Rent" or "Paycheck".
    pub title: String,
    /// The amount of money as a non-negative magnitude.
    ///
    /// Whether the money was earned or spent is recorded in `kind`, so the
    /// amount itself never carries a sign.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// When the transaction happened.
    pub date: Date,
    /// The category the transaction belongs to, e.g. "Groceries".
    ///
    /// Used to pick a display icon. Free-form: unrecognized categories fall
    /// back to a default icon rather than failing.
    pub category: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(title: &str, amount: f64, kind: TransactionKind, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            title: title.to_owned(),
            amount,
            kind,
            date,
            category: String::new(),
        }
    }

    /// The amount with its direction applied: positive for income, negative
    /// for an expense.
    ///
    /// Rows of an unrecognized kind keep their stored magnitude since there
    /// is no direction to apply.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income | TransactionKind::Other => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Call [create_transaction] with the finished builder to persist the
/// transaction and get back the stored row with its assigned ID.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// A short text label for the transaction.
    pub title: String,
    /// The non-negative magnitude of the transaction.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The date when the transaction occurred.
    pub date: Date,
    /// The category the transaction belongs to. Defaults to the empty string,
    /// which renders with the default icon.
    pub category: String,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }
}

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (title, amount, kind, date, category)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, title, amount, kind, date, category",
        )?
        .query_row(
            (
                builder.title,
                builder.amount,
                builder.kind.as_str(),
                builder.date,
                builder.category,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve every transaction in the ledger, most recent first.
///
/// Rows are ordered by date descending and then by ID descending so the
/// order is stable across inserts. List views and the aggregation functions
/// treat this order as the canonical presentation order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, kind, date, category FROM \"transaction\"
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::SqlError))
        .collect()
}

/// Delete the transaction with the given `id` from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a stored transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_deleted = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_deleted == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount REAL NOT NULL CHECK (amount >= 0),
                kind TEXT NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Index used by the list pages and the stats queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let kind: String = row.get(3)?;
    let date = row.get(4)?;
    let category = row.get(5)?;

    Ok(Transaction {
        id,
        title,
        amount,
        kind: TransactionKind::from(kind.as_str()),
        date,
        category,
    })
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        ledger::{
            Transaction, TransactionKind, count_transactions, create_transaction,
            delete_transaction, get_all_transactions,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();
        let amount = 12.3;

        let result = create_transaction(
            Transaction::build("Coffee", amount, TransactionKind::Expense, date!(2025 - 10 - 05))
                .category("Dining"),
            &conn,
        );

        match result {
            Ok(transaction) => {
                assert_eq!(transaction.amount, amount);
                assert_eq!(transaction.kind, TransactionKind::Expense);
                assert_eq!(transaction.title, "Coffee");
                assert_eq!(transaction.category, "Dining");
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }
    }

    #[test]
    fn get_all_returns_most_recent_first() {
        let conn = get_test_connection();
        create_transaction(
            Transaction::build("Older", 1.0, TransactionKind::Income, date!(2025 - 10 - 01)),
            &conn,
        )
        .unwrap();
        create_transaction(
            Transaction::build("Newer", 2.0, TransactionKind::Income, date!(2025 - 10 - 03)),
            &conn,
        )
        .unwrap();
        create_transaction(
            Transaction::build(
                "Same day, inserted later",
                3.0,
                TransactionKind::Income,
                date!(2025 - 10 - 03),
            ),
            &conn,
        )
        .unwrap();

        let transactions = get_all_transactions(&conn).unwrap();

        let titles: Vec<&str> = transactions
            .iter()
            .map(|transaction| transaction.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Same day, inserted later", "Newer", "Older"]);
    }

    #[test]
    fn unrecognized_kind_maps_to_other() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO \"transaction\" (title, amount, kind, date, category)
             VALUES ('Bank transfer', 42.0, 'Transfer', '2025-10-05', '')",
            (),
        )
        .unwrap();

        let transactions = get_all_transactions(&conn).unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].kind, TransactionKind::Other);
        assert_eq!(transactions[0].amount, 42.0);
    }

    #[test]
    fn delete_removes_transaction() {
        let conn = get_test_connection();
        let transaction = create_transaction(
            Transaction::build("Lunch", 15.0, TransactionKind::Expense, date!(2025 - 10 - 05)),
            &conn,
        )
        .unwrap();

        delete_transaction(transaction.id, &conn).unwrap();

        assert_eq!(count_transactions(&conn).unwrap(), 0);
    }

    #[test]
    fn delete_fails_on_missing_transaction() {
        let conn = get_test_connection();

        let result = delete_transaction(999, &conn);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }

    #[test]
    fn get_count() {
        let conn = get_test_connection();
        let today = date!(2025 - 10 - 05);
        let want_count = 20;
        for i in 1..=want_count {
            create_transaction(
                Transaction::build("", i as f64, TransactionKind::Income, today),
                &conn,
            )
            .expect("Could not create transaction");
        }

        let got_count = count_transactions(&conn).expect("Could not get count");

        assert_eq!(want_count, got_count);
    }

    #[test]
    fn signed_amount_follows_kind() {
        let today = date!(2025 - 10 - 05);
        let income = Transaction {
            id: 1,
            title: "Pay".to_owned(),
            amount: 100.0,
            kind: TransactionKind::Income,
            date: today,
            category: String::new(),
        };
        let expense = Transaction {
            kind: TransactionKind::Expense,
            ..income.clone()
        };

        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -100.0);
    }
}
