//! Filtering of transaction snapshots for the list views.
//!
//! Filtering is a pure projection: it selects a subset of an in-memory
//! snapshot without mutating it, and it preserves the snapshot's order so
//! "most recent first" survives every combination of filters.

use std::ops::RangeInclusive;

use serde::Deserialize;
use time::{Date, Duration};

use crate::ledger::{Transaction, TransactionKind};

/// Which transaction kinds the list view should show.
///
/// Unrecognized query values deserialize to [TypeFilter::All], so a stale or
/// hand-edited URL degrades to showing everything instead of an error page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TypeFilter {
    /// Show every transaction, including ones of an unrecognized kind.
    #[default]
    All,
    /// Show only income.
    Income,
    /// Show only expenses.
    Expense,
}

impl From<String> for TypeFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            // "all" and anything unrecognized both mean no filtering.
            _ => Self::All,
        }
    }
}

impl TypeFilter {
    /// Every filter in the order the dropdown lists them.
    pub const ALL: [TypeFilter; 3] = [Self::All, Self::Income, Self::Expense];

    /// The value used for this filter in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The human readable name of this filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Whether a transaction of `kind` passes this filter.
    ///
    /// [TransactionKind::Other] only passes [TypeFilter::All]: an
    /// unrecognized kind is neither income nor expense, so the typed filters
    /// exclude it.
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// The date window the list view should show.
///
/// Unrecognized query values deserialize to [RangePreset::AllTime], which
/// applies no date bounds at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RangePreset {
    /// No date bounds.
    #[default]
    AllTime,
    /// Only the current date.
    Today,
    /// Only the day before the current date.
    Yesterday,
    /// The 30 days up to and including the current date.
    Last30Days,
    /// The 90 days up to and including the current date.
    Last90Days,
    /// The 365 days up to and including the current date.
    LastYear,
}

impl From<String> for RangePreset {
    fn from(value: String) -> Self {
        match value.as_str() {
            "today" => Self::Today,
            "yesterday" => Self::Yesterday,
            "last-30-days" => Self::Last30Days,
            "last-90-days" => Self::Last90Days,
            "last-year" => Self::LastYear,
            // "all-time" and anything unrecognized both mean no bounds.
            _ => Self::AllTime,
        }
    }
}

impl RangePreset {
    /// Every preset in the order the dropdown lists them.
    pub const ALL: [RangePreset; 6] = [
        Self::AllTime,
        Self::Today,
        Self::Yesterday,
        Self::Last30Days,
        Self::Last90Days,
        Self::LastYear,
    ];

    /// The value used for this preset in query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::AllTime => "all-time",
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last30Days => "last-30-days",
            Self::Last90Days => "last-90-days",
            Self::LastYear => "last-year",
        }
    }

    /// The human readable name of this preset.
    pub fn label(self) -> &'static str {
        match self {
            Self::AllTime => "All Time",
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last30Days => "Last 30 Days",
            Self::Last90Days => "Last 90 Days",
            Self::LastYear => "Last Year",
        }
    }

    /// The inclusive date window for this preset, relative to `today`.
    ///
    /// Returns `None` for [RangePreset::AllTime], which applies no bounds.
    /// "Last N days" spans exactly N calendar days including `today`.
    pub fn date_range(self, today: Date) -> Option<RangeInclusive<Date>> {
        match self {
            Self::AllTime => None,
            Self::Today => Some(today..=today),
            Self::Yesterday => {
                let yesterday = today - Duration::days(1);
                Some(yesterday..=yesterday)
            }
            Self::Last30Days => Some(today - Duration::days(29)..=today),
            Self::Last90Days => Some(today - Duration::days(89)..=today),
            Self::LastYear => Some(today - Duration::days(364)..=today),
        }
    }
}

/// Select the transactions matching both the type filter and the date range,
/// preserving the order of the input snapshot.
///
/// `today` anchors the relative date windows and should be the current date
/// in the user's timezone.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    type_filter: TypeFilter,
    range: RangePreset,
    today: Date,
) -> Vec<&'a Transaction> {
    let window = range.date_range(today);

    transactions
        .iter()
        .filter(|transaction| type_filter.matches(transaction.kind))
        .filter(|transaction| {
            window
                .as_ref()
                .is_none_or(|window| window.contains(&transaction.date))
        })
        .collect()
}
