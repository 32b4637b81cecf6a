//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}/delete',
//! use [format_endpoint].

/// The home page: greeting, balance summary, and recent transactions.
pub const ROOT: &str = "/";
/// The page for displaying the full transaction list with filters.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for recording a new income transaction.
pub const NEW_INCOME_VIEW: &str = "/transactions/new/income";
/// The page for recording a new expense transaction.
pub const NEW_EXPENSE_VIEW: &str = "/transactions/new/expense";
/// The page for displaying spending statistics.
pub const STATS_VIEW: &str = "/stats";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a transaction.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}/delete";
/// The route to set the display name shown on the home page.
pub const USER_NAME: &str = "/api/user_name";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
