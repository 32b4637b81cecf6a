//! Statistics module
//!
//! Provides the stats page: a line chart of spending over time built from
//! pre-aggregated daily totals, and a list of the largest expenses.

mod chart;
mod handlers;
mod points;
mod summary;

pub use handlers::get_stats_page;
