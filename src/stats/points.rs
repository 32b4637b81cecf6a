//! Mapping of daily totals to chart coordinates and axis labels.
//!
//! The chart x axis is numeric: each date maps to its epoch timestamp in
//! milliseconds, so points plot left to right in chronological order.

use time::{Date, Month, OffsetDateTime};

use super::summary::DailyExpense;

/// The x-axis coordinate for a date: milliseconds since the Unix epoch at
/// midnight UTC.
///
/// Later dates always map to larger coordinates, which is what keeps the
/// chart points in chronological order.
pub(super) fn date_to_coordinate(date: Date) -> f64 {
    (date.midnight().assume_utc().unix_timestamp() * 1000) as f64
}

/// The short axis-tick label for an x-axis coordinate, e.g. "Jan 5".
///
/// Total function: a coordinate outside the representable range renders as
/// an empty label rather than failing.
pub(super) fn coordinate_to_label(coordinate: f64) -> String {
    let seconds = (coordinate / 1000.0) as i64;

    OffsetDateTime::from_unix_timestamp(seconds)
        .map(|date_time| {
            format!(
                "{} {}",
                month_abbreviation(date_time.month()),
                date_time.day()
            )
        })
        .unwrap_or_default()
}

/// Converts daily totals into (x, y) chart points.
///
/// An empty input yields an empty point sequence: the chart renders with no
/// line rather than erroring.
pub(super) fn chart_points(daily_totals: &[DailyExpense]) -> Vec<(f64, f64)> {
    daily_totals
        .iter()
        .map(|daily| (date_to_coordinate(daily.date), daily.total))
        .collect()
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::date};

    use crate::stats::summary::DailyExpense;

    use super::{chart_points, coordinate_to_label, date_to_coordinate};

    #[test]
    fn coordinates_increase_with_chronological_order() {
        let mut day = date!(2024 - 01 - 01);
        let mut previous = date_to_coordinate(day);

        for _ in 0..400 {
            day += Duration::days(1);
            let next = date_to_coordinate(day);
            assert!(
                next > previous,
                "coordinate for {day} should be greater than the previous day's"
            );
            previous = next;
        }
    }

    #[test]
    fn epoch_maps_to_zero() {
        assert_eq!(date_to_coordinate(date!(1970 - 01 - 01)), 0.0);
    }

    #[test]
    fn labels_round_trip_through_coordinates() {
        let coordinate = date_to_coordinate(date!(2024 - 01 - 05));

        assert_eq!(coordinate_to_label(coordinate), "Jan 5");
    }

    #[test]
    fn labels_are_deterministic() {
        let coordinate = date_to_coordinate(date!(2024 - 12 - 31));

        assert_eq!(coordinate_to_label(coordinate), coordinate_to_label(coordinate));
        assert_eq!(coordinate_to_label(coordinate), "Dec 31");
    }

    #[test]
    fn empty_totals_yield_no_points() {
        let points = chart_points(&[]);

        assert!(points.is_empty());
    }

    #[test]
    fn points_pair_coordinates_with_totals() {
        let totals = vec![
            DailyExpense {
                date: date!(2024 - 01 - 01),
                total: 5.0,
            },
            DailyExpense {
                date: date!(2024 - 01 - 02),
                total: 50.0,
            },
        ];

        let points = chart_points(&totals);

        assert_eq!(points.len(), 2);
        assert!(points[0].0 < points[1].0);
        assert_eq!(points[0].1, 5.0);
        assert_eq!(points[1].1, 50.0);
    }
}
