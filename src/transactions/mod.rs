//! Transaction pages and endpoints.
//!
//! This module contains everything the browser touches for transactions:
//! - The filterable transaction list page
//! - The add income / add expense form pages
//! - Endpoints for creating and deleting transactions
//! - The shared list rendering used here and on the home page

mod create_endpoint;
mod delete_endpoint;
mod list_page;
mod new_transaction_page;
mod view;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_page::get_transactions_page;
pub use new_transaction_page::{get_new_expense_page, get_new_income_page};
pub use view::{icon_for, transaction_list_view};
