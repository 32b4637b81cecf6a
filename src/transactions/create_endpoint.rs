//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    ledger::{Transaction, TransactionKind, create_transaction},
    timezone,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The kind submitted by the add income / add expense forms.
///
/// Unlike the stored kind there is no fallback arm here: the forms are the
/// only writers, and a request with any other value is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl From<FormKind> for TransactionKind {
    fn from(value: FormKind) -> Self {
        match value {
            FormKind::Income => TransactionKind::Income,
            FormKind::Expense => TransactionKind::Expense,
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// A short text label for the transaction.
    pub title: String,
    /// The value of the transaction in dollars, as a non-negative magnitude.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: Date,
    /// Whether the transaction is income or an expense.
    pub kind: FormKind,
    /// The category the transaction belongs to.
    pub category: String,
}

/// A route handler for creating a new transaction, redirects to the home
/// page on success.
///
/// # Errors
/// Returns a:
/// - [Error::EmptyTitle] if the title is empty or only whitespace,
/// - [Error::NegativeAmount] if the amount is negative,
/// - [Error::FutureDate] if the date is after today in the local timezone,
/// - or [Error::SqlError] if there is some other SQL error.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    if form.amount < 0.0 {
        return Err(Error::NegativeAmount(form.amount));
    }

    let today = timezone::local_date(&state.local_timezone)?;
    if form.date > today {
        return Err(Error::FutureDate(form.date));
    }

    let builder = Transaction::build(title, form.amount, form.kind.into(), form.date)
        .category(&form.category);

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    create_transaction(builder, &connection)
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    Ok(Redirect::to(endpoints::ROOT).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Form, extract::State, http::StatusCode};
    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime};

    use crate::{
        Error,
        db::initialize,
        ledger::{TransactionKind, get_all_transactions},
    };

    use super::{CreateTransactionState, FormKind, TransactionForm, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn sample_form() -> TransactionForm {
        TransactionForm {
            title: "Pay".to_owned(),
            amount: 500.0,
            date: OffsetDateTime::now_utc().date(),
            kind: FormKind::Income,
            category: "Salary".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_income() {
        let state = get_test_state();

        let response = create_transaction_endpoint(State(state.clone()), Form(sample_form()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let connection = state.db_connection.lock().unwrap();
        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].title, "Pay");
        assert_eq!(transactions[0].amount, 500.0);
        assert_eq!(transactions[0].kind, TransactionKind::Income);
        assert_eq!(transactions[0].category, "Salary");
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_state();
        let form = TransactionForm {
            kind: FormKind::Expense,
            ..sample_form()
        };

        create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .unwrap();

        let connection = state.db_connection.lock().unwrap();
        let transactions = get_all_transactions(&connection).unwrap();
        assert_eq!(transactions[0].kind, TransactionKind::Expense);
    }

    #[tokio::test]
    async fn rejects_empty_title() {
        let state = get_test_state();
        let form = TransactionForm {
            title: "   ".to_owned(),
            ..sample_form()
        };

        let result = create_transaction_endpoint(State(state), Form(form)).await;

        assert_eq!(result.unwrap_err(), Error::EmptyTitle);
    }

    #[tokio::test]
    async fn rejects_negative_amount() {
        let state = get_test_state();
        let form = TransactionForm {
            amount: -12.5,
            ..sample_form()
        };

        let result = create_transaction_endpoint(State(state), Form(form)).await;

        assert_eq!(result.unwrap_err(), Error::NegativeAmount(-12.5));
    }

    #[tokio::test]
    async fn rejects_future_date() {
        let state = get_test_state();
        let tomorrow = OffsetDateTime::now_utc().date() + Duration::days(1);
        let form = TransactionForm {
            date: tomorrow,
            ..sample_form()
        };

        let result = create_transaction_endpoint(State(state), Form(form)).await;

        assert_eq!(result.unwrap_err(), Error::FutureDate(tomorrow));
    }

    #[tokio::test]
    async fn accepts_zero_amount() {
        let state = get_test_state();
        let form = TransactionForm {
            amount: 0.0,
            ..sample_form()
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
