//! Resolves the configured canonical timezone into local dates and times.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current date and hour of day in the given canonical timezone.
///
/// Relative date windows and the home page greeting both key off this, so
/// "today" follows the user's wall clock rather than UTC.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// valid canonical timezone name.
pub fn local_date_and_hour(canonical_timezone: &str) -> Result<(Date, u8), Error> {
    let Some(local_offset) = get_local_offset(canonical_timezone) else {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        return Err(Error::InvalidTimezoneError(canonical_timezone.to_owned()));
    };

    let now_local = OffsetDateTime::now_utc().to_offset(local_offset);

    Ok((now_local.date(), now_local.hour()))
}

/// The current date in the given canonical timezone.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
/// valid canonical timezone name.
pub fn local_date(canonical_timezone: &str) -> Result<Date, Error> {
    local_date_and_hour(canonical_timezone).map(|(date, _)| date)
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{local_date, local_date_and_hour};

    #[test]
    fn resolves_utc() {
        let (_, hour) = local_date_and_hour("Etc/UTC").expect("Etc/UTC should resolve");

        assert!(hour < 24);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = local_date("Middle/Nowhere");

        assert_eq!(
            result,
            Err(Error::InvalidTimezoneError("Middle/Nowhere".to_owned()))
        );
    }
}
