//! User preference management.
//!
//! Preferences are simple key-value pairs stored in the database, created
//! through the same initialization path as the rest of the schema. The only
//! preference today is the display name shown in the home page header.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::{Connection, OptionalExtension};
use serde::Deserialize;

use crate::{AppState, Error, endpoints};

const USER_NAME_KEY: &str = "user_name";

/// Create the preference table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_preference_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS preference (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Get the user's display name, or `None` if it has not been set yet.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_user_name(connection: &Connection) -> Result<Option<String>, Error> {
    let name = connection
        .prepare("SELECT value FROM preference WHERE key = ?1")?
        .query_row([USER_NAME_KEY], |row| row.get(0))
        .optional()?;

    Ok(name)
}

/// Set the user's display name, replacing any previously stored name.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn set_user_name(name: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO preference (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (USER_NAME_KEY, name),
    )?;

    Ok(())
}

/// The state needed to update preferences.
#[derive(Debug, Clone)]
pub struct PreferencesState {
    /// The database connection for managing preferences.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for PreferencesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for setting the display name.
#[derive(Debug, Deserialize)]
pub struct UserNameForm {
    /// The name to greet the user with on the home page.
    pub name: String,
}

/// A route handler for setting the display name, redirects to the home page.
///
/// Leading and trailing whitespace is trimmed. Submitting an empty name
/// leaves the stored name unchanged, so the home page will prompt again.
pub async fn set_user_name_endpoint(
    State(state): State<PreferencesState>,
    Form(form): Form<UserNameForm>,
) -> Result<Response, Error> {
    let name = form.name.trim();

    if !name.is_empty() {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        set_user_name(name, &connection)
            .inspect_err(|error| tracing::error!("could not save display name: {error}"))
            .map_err(|_| Error::PreferenceSaveError)?;
    }

    Ok(Redirect::to(endpoints::ROOT).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::db::initialize;

    use super::{
        PreferencesState, UserNameForm, get_user_name, set_user_name, set_user_name_endpoint,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn get_returns_none_when_unset() {
        let conn = get_test_connection();

        let name = get_user_name(&conn).unwrap();

        assert_eq!(name, None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let conn = get_test_connection();

        set_user_name("Ada", &conn).unwrap();

        assert_eq!(get_user_name(&conn).unwrap(), Some("Ada".to_owned()));
    }

    #[test]
    fn set_replaces_existing_name() {
        let conn = get_test_connection();

        set_user_name("Ada", &conn).unwrap();
        set_user_name("Grace", &conn).unwrap();

        assert_eq!(get_user_name(&conn).unwrap(), Some("Grace".to_owned()));
    }

    #[tokio::test]
    async fn endpoint_trims_and_stores_name() {
        let conn = get_test_connection();
        let state = PreferencesState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = set_user_name_endpoint(
            State(state.clone()),
            Form(UserNameForm {
                name: "  Ada  ".to_owned(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_user_name(&connection).unwrap(), Some("Ada".to_owned()));
    }

    #[tokio::test]
    async fn endpoint_ignores_empty_name() {
        let conn = get_test_connection();
        let state = PreferencesState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = set_user_name_endpoint(
            State(state.clone()),
            Form(UserNameForm {
                name: "   ".to_owned(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_user_name(&connection).unwrap(), None);
    }
}
