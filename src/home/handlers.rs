//! Home page HTTP handler and view rendering.
//!
//! This module contains:
//! - The route handler for the home page
//! - The balance summary card and greeting views
//! - The first-run prompt asking for a display name

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, format_currency,
    },
    ledger::{Transaction, balance, get_all_transactions, total_expense, total_income},
    navigation::NavBar,
    preferences::get_user_name,
    timezone,
    transactions::transaction_list_view,
};

/// How many transactions the "Recent Transactions" list shows before the
/// user has to follow the "See all" link.
const RECENT_TRANSACTION_LIMIT: usize = 10;

/// The state needed for displaying the home page.
#[derive(Debug, Clone)]
pub struct HomeState {
    /// The database connection for managing transactions and preferences.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for HomeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Holds all the data needed to render the home page.
struct HomeData {
    user_name: String,
    greeting: &'static str,
    balance: f64,
    total_income: f64,
    total_expense: f64,
    recent_transactions: Vec<Transaction>,
}

/// Display the home page, or the display-name prompt on first run.
pub async fn get_home_page(State(state): State<HomeState>) -> Result<Response, Error> {
    let (_, hour) = timezone::local_date_and_hour(&state.local_timezone)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let Some(user_name) = get_user_name(&connection)
        .inspect_err(|error| tracing::error!("could not get display name: {error}"))?
    else {
        return Ok(name_prompt_view().into_response());
    };

    // One snapshot feeds the totals and the recent list so they can never
    // disagree with each other.
    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    let data = HomeData {
        user_name,
        greeting: greeting_for_hour(hour),
        balance: balance(&transactions),
        total_income: total_income(&transactions),
        total_expense: total_expense(&transactions),
        recent_transactions: transactions
            .into_iter()
            .take(RECENT_TRANSACTION_LIMIT)
            .collect(),
    };

    Ok(home_view(&data).into_response())
}

/// The greeting for an hour of the day (0-23).
fn greeting_for_hour(hour: u8) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Renders the prompt asking for the user's name, shown until a name has
/// been saved.
fn name_prompt_view() -> Markup {
    let content = html!(
        div class="flex flex-col items-center justify-center px-6 py-8 mx-auto max-w-md"
        {
            h1 class="text-2xl font-bold mb-2 text-gray-900 dark:text-white" { "Welcome!" }

            p class="text-gray-600 dark:text-gray-400 mb-6" {
                "What should we call you?"
            }

            form
                method="post"
                action=(endpoints::USER_NAME)
                class="flex flex-col gap-4 w-full"
            {
                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Name" }
                    input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="Your name"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required
                        autofocus;
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "OK" }
            }
        }
    );

    base("Welcome", &[], &content)
}

/// Renders the home page: header with greeting, summary card, and the recent
/// transactions list.
fn home_view(data: &HomeData) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " max-w-screen-md w-full" }
        {
            header class="w-full mb-4" {
                p class="text-sm text-gray-600 dark:text-gray-400" { (data.greeting) }
                h2 class="text-2xl font-bold" { (data.user_name) }
            }

            (summary_card(data.balance, data.total_income, data.total_expense))

            div class="w-full mt-6" {
                (transaction_list_view(
                    "Recent Transactions",
                    &data.recent_transactions.iter().collect::<Vec<_>>(),
                    Some(endpoints::TRANSACTIONS_VIEW),
                    false,
                ))
            }

            div class="flex gap-4 w-full mt-4" {
                a
                    href=(endpoints::NEW_INCOME_VIEW)
                    class="flex-1 text-center px-4 py-2 bg-green-600 hover:bg-green-700 text-white rounded"
                {
                    "+ Add Income"
                }
                a
                    href=(endpoints::NEW_EXPENSE_VIEW)
                    class="flex-1 text-center px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded"
                {
                    "- Add Expense"
                }
            }
        }
    );

    base("Home", &[], &content)
}

/// Renders the card showing the total balance with its income and expense
/// components.
///
/// The expense total is displayed pre-negated so the sign always reflects
/// the direction of the money flow.
fn summary_card(balance: f64, total_income: f64, total_expense: f64) -> Markup {
    html!(
        section id="summary-card" class=(CARD_STYLE)
        {
            p class="text-sm text-gray-600 dark:text-gray-400" { "Total Balance" }
            p class="text-4xl font-bold mb-4" { (format_currency(balance)) }

            div class="flex justify-between" {
                div {
                    p class="text-sm text-gray-600 dark:text-gray-400" { "Income" }
                    p class="text-lg font-medium text-green-600 dark:text-green-400" {
                        (format_currency(total_income))
                    }
                }

                div class="text-right" {
                    p class="text-sm text-gray-600 dark:text-gray-400" { "Expense" }
                    p class="text-lg font-medium text-red-600 dark:text-red-400" {
                        (format_currency(-total_expense))
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
    };
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::OffsetDateTime;

    use crate::{
        db::initialize,
        ledger::{Transaction, TransactionKind, create_transaction},
        preferences::set_user_name,
    };

    use super::{HomeState, get_home_page, greeting_for_hour};

    fn get_test_state() -> HomeState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        HomeState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[tokio::test]
    async fn prompts_for_name_on_first_run() {
        let state = get_test_state();

        let response = get_home_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        let name_input = Selector::parse("input[name='name']").unwrap();
        assert!(html.select(&name_input).next().is_some());
    }

    #[tokio::test]
    async fn shows_name_and_totals_once_name_is_set() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            set_user_name("Ada", &conn).unwrap();

            let today = OffsetDateTime::now_utc().date();
            create_transaction(
                Transaction::build("Pay", 500.0, TransactionKind::Income, today),
                &conn,
            )
            .unwrap();
            create_transaction(
                Transaction::build("Groceries", 200.0, TransactionKind::Expense, today),
                &conn,
            )
            .unwrap();
            create_transaction(
                Transaction::build("Petrol", 50.0, TransactionKind::Expense, today),
                &conn,
            )
            .unwrap();
        }

        let response = get_home_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html(response).await;
        let text = html.html();
        assert!(text.contains("Ada"));

        let card = Selector::parse("#summary-card").unwrap();
        let card_text: String = html
            .select(&card)
            .next()
            .expect("summary card should be present")
            .text()
            .collect();
        assert!(card_text.contains("$250.00"), "balance missing: {card_text}");
        assert!(card_text.contains("$500.00"), "income missing: {card_text}");
        assert!(
            card_text.contains("-$250.00"),
            "expense missing: {card_text}"
        );
    }

    #[tokio::test]
    async fn zero_transactions_show_zero_totals() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            set_user_name("Ada", &conn).unwrap();
        }

        let response = get_home_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let card = Selector::parse("#summary-card").unwrap();
        let card_text: String = html.select(&card).next().unwrap().text().collect();
        assert!(card_text.contains("$0.00"));
        assert!(html.html().contains("No transactions to show."));
    }

    #[tokio::test]
    async fn recent_list_is_capped() {
        let state = get_test_state();
        {
            let conn = state.db_connection.lock().unwrap();
            set_user_name("Ada", &conn).unwrap();

            let today = OffsetDateTime::now_utc().date();
            for i in 0..15 {
                create_transaction(
                    Transaction::build(
                        &format!("transaction #{i}"),
                        1.0,
                        TransactionKind::Expense,
                        today,
                    ),
                    &conn,
                )
                .unwrap();
            }
        }

        let response = get_home_page(State(state)).await.unwrap();

        let html = parse_html(response).await;
        let rows = Selector::parse("#transaction-list > li").unwrap();
        assert_eq!(html.select(&rows).count(), 10);
    }
}
