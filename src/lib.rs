//! Spendtrack is a web app for tracking personal income and spending.
//!
//! It serves HTML pages directly: a home page with the current balance and
//! recent transactions, a filterable transaction list, and a statistics page
//! with a spending-over-time chart.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::Date;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod home;
mod html;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod preferences;
mod routing;
mod stats;
mod timezone;
mod transactions;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use routing::build_router;

use crate::{html::error_view, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore future
    /// dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// A negative amount was used to create a transaction.
    ///
    /// Amounts are stored as non-negative magnitudes and the direction of the
    /// money flow is recorded separately as income or expense, so a negative
    /// amount is always a mistake on the client's part.
    #[error("{0} is negative, amounts must be zero or greater")]
    NegativeAmount(f64),

    /// An empty string was used as a transaction title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An error occurred while saving a user preference.
    #[error("failed to save preference")]
    PreferenceSaveError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                error_view(
                    "Not Found",
                    "404",
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if it has already been deleted.",
                ),
            )
                .into_response(),
            Error::FutureDate(date) => (
                StatusCode::BAD_REQUEST,
                error_view(
                    "Invalid Date",
                    "400",
                    "Invalid transaction date",
                    &format!("{date} is a date in the future, which is not allowed."),
                ),
            )
                .into_response(),
            Error::NegativeAmount(amount) => (
                StatusCode::BAD_REQUEST,
                error_view(
                    "Invalid Amount",
                    "400",
                    "Invalid transaction amount",
                    &format!(
                        "{amount} is negative. Enter the amount as a positive \
                        number and choose income or expense instead."
                    ),
                ),
            )
                .into_response(),
            Error::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                error_view(
                    "Invalid Title",
                    "400",
                    "Invalid transaction title",
                    "The transaction title cannot be empty.",
                ),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_view(
                    "Invalid Timezone",
                    "500",
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string."
                    ),
                ),
            )
                .into_response(),
            Error::PreferenceSaveError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_view(
                    "Save Failed",
                    "500",
                    "Save Failed",
                    "Failed to save your preferences. Please try again.",
                ),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Error",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
