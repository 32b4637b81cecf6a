//! Shared rendering for transaction lists.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_DELETE_STYLE, LINK_STYLE, format_currency, format_date},
    ledger::{Transaction, TransactionKind},
};

/// Pick the display icon for a transaction from its category.
///
/// Total function: any category this version does not recognize, including
/// the empty string, gets the default wallet icon.
pub fn icon_for(transaction: &Transaction) -> &'static str {
    match transaction.category.to_ascii_lowercase().as_str() {
        "salary" => "💼",
        "freelance" => "💻",
        "groceries" => "🛒",
        "rent" => "🏠",
        "transport" => "🚌",
        "dining" => "☕",
        "entertainment" => "🎬",
        "utilities" => "💡",
        "health" => "🩹",
        _ => "💳",
    }
}

fn amount_color(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "text-green-600 dark:text-green-400",
        TransactionKind::Expense => "text-red-600 dark:text-red-400",
        TransactionKind::Other => "text-gray-500 dark:text-gray-400",
    }
}

/// Renders a titled list of transactions.
///
/// Amounts render signed: income positive and green, expenses negated and
/// red. Rows of an unrecognized kind render in neutral gray with their
/// stored magnitude. `see_all_url` adds a trailing link in the header, and
/// `show_delete` adds a delete button to each row.
pub fn transaction_list_view(
    title: &str,
    transactions: &[&Transaction],
    see_all_url: Option<&str>,
    show_delete: bool,
) -> Markup {
    html! {
        section class="w-full" {
            @if !title.is_empty() || see_all_url.is_some() {
                div class="flex justify-between items-baseline mb-2" {
                    h3 class="text-xl font-semibold" { (title) }

                    @if let Some(url) = see_all_url {
                        a href=(url) class=(LINK_STYLE) { "See all" }
                    }
                }
            }

            @if transactions.is_empty() {
                p class="text-gray-600 dark:text-gray-400 py-4" {
                    "No transactions to show."
                }
            } @else {
                ul id="transaction-list" class="w-full" {
                    @for (index, transaction) in transactions.iter().enumerate() {
                        li class="py-2" {
                            (transaction_item(transaction, show_delete))
                        }

                        @if index + 1 < transactions.len() {
                            hr class="border-gray-200 dark:border-gray-700";
                        }
                    }
                }
            }
        }
    }
}

fn transaction_item(transaction: &Transaction, show_delete: bool) -> Markup {
    let amount_text = format_currency(transaction.signed_amount());
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);

    html! {
        div class="flex items-center justify-between w-full" {
            div class="flex items-center gap-3" {
                span class="text-3xl" aria-hidden="true" { (icon_for(transaction)) }

                div {
                    p class="font-medium" { (transaction.title) }
                    p class="text-sm text-gray-500 dark:text-gray-400" {
                        (format_date(transaction.date))
                    }
                }
            }

            div class="flex items-center gap-4" {
                span class={ "text-lg font-medium " (amount_color(transaction.kind)) } {
                    (amount_text)
                }

                @if show_delete {
                    form method="post" action=(delete_url) {
                        button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                    }
                }
            }
        }
    }
}
