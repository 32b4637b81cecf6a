//! Database initialization.

use rusqlite::Connection;

use crate::{ledger::create_transaction_table, preferences::create_preference_table};

/// Create the tables for the application's domain models if they do not
/// already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_transaction_table(connection)?;
    create_preference_table(connection)?;

    Ok(())
}
