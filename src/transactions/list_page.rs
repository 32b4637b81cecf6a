//! Defines the route handler for the page that displays the transaction list.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_SELECT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, link},
    ledger::{RangePreset, Transaction, TypeFilter, filter_transactions, get_all_transactions},
    navigation::NavBar,
    timezone,
    transactions::view::transaction_list_view,
};

/// The filters selected through the dropdowns on the transactions page.
///
/// Both parameters are optional and default to the pass-through filters, so
/// a bare `/transactions` URL shows everything. Unrecognized values also
/// deserialize to the pass-through filters rather than failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// Which transaction kinds to show.
    #[serde(rename = "type")]
    pub type_filter: Option<TypeFilter>,
    /// The date window to show.
    pub range: Option<RangePreset>,
}

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render an overview of the user's transactions.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let today = timezone::local_date(&state.local_timezone)?;
    let type_filter = query.type_filter.unwrap_or_default();
    let range = query.range.unwrap_or_default();

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    if transactions.is_empty() {
        return Ok(transactions_empty_view().into_response());
    }

    let filtered = filter_transactions(&transactions, type_filter, range, today);

    Ok(transactions_view(&filtered, type_filter, range).into_response())
}

/// Renders the transactions page when no transactions exist at all.
fn transactions_empty_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let add_income_link = link(endpoints::NEW_INCOME_VIEW, "adding income");
    let add_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "an expense");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Transactions will show up here once you record some.
                Start by " (add_income_link) " or " (add_expense_link) "."
            }
        }
    );

    base("Transactions", &[], &content)
}

/// Renders the transactions page: filter dropdowns above the filtered list.
fn transactions_view(
    transactions: &[&Transaction],
    type_filter: TypeFilter,
    range: RangePreset,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " max-w-screen-md w-full" }
        {
            div class="flex justify-between items-center w-full mb-4"
            {
                h2 class="text-2xl font-bold" { "Transactions" }

                div class="flex gap-4"
                {
                    a href=(endpoints::NEW_INCOME_VIEW) class=(LINK_STYLE) { "Add income" }
                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE) { "Add expense" }
                }
            }

            (filter_form(type_filter, range))

            (transaction_list_view("", transactions, None, true))
        }
    );

    base("Transactions", &[], &content)
}

/// Renders the type and date-range dropdowns.
///
/// The form submits with GET so the selected filters live in the URL and
/// survive reloads and bookmarks.
fn filter_form(type_filter: TypeFilter, range: RangePreset) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::TRANSACTIONS_VIEW)
            class="flex flex-wrap items-end gap-3 w-full mb-4 bg-gray-50
                dark:bg-gray-800 p-4 rounded-lg"
        {
            label class="flex-1 min-w-32 text-sm font-medium"
            {
                "Type"
                select name="type" class=(FORM_SELECT_STYLE)
                {
                    @for option in TypeFilter::ALL {
                        option
                            value=(option.as_query_value())
                            selected[option == type_filter]
                        {
                            (option.label())
                        }
                    }
                }
            }

            label class="flex-1 min-w-32 text-sm font-medium"
            {
                "Date range"
                select name="range" class=(FORM_SELECT_STYLE)
                {
                    @for option in RangePreset::ALL {
                        option
                            value=(option.as_query_value())
                            selected[option == range]
                        {
                            (option.label())
                        }
                    }
                }
            }

            button type="submit" class={ (BUTTON_PRIMARY_STYLE) " max-w-24" } { "Apply" }
        }
    )
}
