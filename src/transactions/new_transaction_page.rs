//! Defines the route handlers for the add income and add expense pages.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    timezone,
};

/// The categories offered in the new-transaction form.
///
/// This list only seeds the dropdown: the stored category is free-form text
/// and anything unrecognized renders with the default icon.
const CATEGORY_OPTIONS: [&str; 10] = [
    "Salary",
    "Freelance",
    "Groceries",
    "Rent",
    "Transport",
    "Dining",
    "Entertainment",
    "Utilities",
    "Health",
    "Other",
];

/// The state needed for the new transaction pages.
#[derive(Debug, Clone)]
pub struct NewTransactionState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the form for recording a new income transaction.
pub async fn get_new_income_page(
    State(state): State<NewTransactionState>,
) -> Result<Response, Error> {
    let today = timezone::local_date(&state.local_timezone)?;

    Ok(new_transaction_view("Add Income", "income", today).into_response())
}

/// Display the form for recording a new expense transaction.
pub async fn get_new_expense_page(
    State(state): State<NewTransactionState>,
) -> Result<Response, Error> {
    let today = timezone::local_date(&state.local_timezone)?;

    Ok(new_transaction_view("Add Expense", "expense", today).into_response())
}

/// Renders the shared new-transaction form.
///
/// `kind_value` goes into a hidden input so both pages can post to the same
/// endpoint. The date input defaults to today and is capped at today since
/// future-dated transactions are rejected.
fn new_transaction_view(title: &str, kind_value: &str, today: Date) -> Markup {
    let nav_bar = NavBar::new("").into_html();

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " max-w-md w-full" }
        {
            h2 class="text-2xl font-bold mb-4" { (title) }

            form
                method="post"
                action=(endpoints::TRANSACTIONS_API)
                class="flex flex-col gap-4 w-full"
            {
                input type="hidden" name="kind" value=(kind_value);

                div
                {
                    label for="title" class=(FORM_LABEL_STYLE) { "Title" }
                    input
                        type="text"
                        name="title"
                        id="title"
                        placeholder="e.g. Rent"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required
                        autofocus;
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required;
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        type="date"
                        name="date"
                        id="date"
                        value=(today)
                        max=(today)
                        class=(FORM_TEXT_INPUT_STYLE)
                        required;
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    select name="category" id="category" class=(FORM_SELECT_STYLE)
                    {
                        @for category in CATEGORY_OPTIONS {
                            option value=(category) { (category) }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
            }
        }
    );

    base(title, &[], &content)
}
