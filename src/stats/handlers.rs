//! Stats page HTTP handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base, format_currency},
    ledger::Transaction,
    navigation::NavBar,
    transactions::transaction_list_view,
};

use super::{
    chart::{StatsChart, chart_script, chart_view, daily_expense_chart},
    points::{chart_points, coordinate_to_label},
    summary::{get_expense_totals_by_day, get_top_expenses},
};

/// How many of the largest expenses the "Top Spending" list shows.
const TOP_EXPENSE_LIMIT: u32 = 5;

/// The state needed for displaying the stats page.
#[derive(Debug, Clone)]
pub struct StatsState {
    /// The database connection for reading transaction summaries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for StatsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Display a page with spending statistics.
pub async fn get_stats_page(State(state): State<StatsState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let daily_totals = get_expense_totals_by_day(&connection)
        .inspect_err(|error| tracing::error!("could not get daily expense totals: {error}"))?;
    let top_expenses = get_top_expenses(TOP_EXPENSE_LIMIT, &connection)
        .inspect_err(|error| tracing::error!("could not get top expenses: {error}"))?;

    let points = chart_points(&daily_totals);
    let chart = StatsChart {
        id: "spending-chart",
        options: daily_expense_chart(&points).to_string(),
    };

    Ok(stats_view(&chart, &points, &top_expenses).into_response())
}

/// Renders the stats page: the spending chart, a daily breakdown table, and
/// the top-spending list.
fn stats_view(chart: &StatsChart, points: &[(f64, f64)], top_expenses: &[Transaction]) -> Markup {
    let nav_bar = NavBar::new(endpoints::STATS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " max-w-screen-md w-full" }
        {
            section class=(CARD_STYLE)
            {
                (chart_view(chart))
            }

            @if !points.is_empty() {
                section class="w-full mt-6"
                {
                    h3 class="text-xl font-semibold mb-2" { "Daily breakdown" }

                    table class="w-full text-sm text-left"
                    {
                        thead class="text-xs text-gray-700 uppercase bg-gray-50
                            dark:bg-gray-700 dark:text-gray-400"
                        {
                            tr {
                                th class="px-4 py-2" { "Day" }
                                th class="px-4 py-2 text-right" { "Spent" }
                            }
                        }

                        tbody {
                            @for (coordinate, total) in points {
                                tr class="bg-white border-b dark:bg-gray-800 dark:border-gray-700"
                                {
                                    td class="px-4 py-2" { (coordinate_to_label(*coordinate)) }
                                    td class="px-4 py-2 text-right text-red-600 dark:text-red-400"
                                    {
                                        (format_currency(-*total))
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div class="w-full mt-6" {
                (transaction_list_view(
                    "Top Spending",
                    &top_expenses.iter().collect::<Vec<_>>(),
                    None,
                    false,
                ))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_owned(),
        ),
        chart_script(chart),
    ];

    base("Stats", &scripts, &content)
}
