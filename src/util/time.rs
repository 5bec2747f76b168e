use chrono::{Datelike, Local, NaiveDate};
use crate::error::{Error, Result};

/// The date all benefit day counts are measured from (05.05.2023).
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 5).expect("05.05.2023 is a valid calendar date")
}

/// The local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build a date from day/month/year, failing on anything the calendar doesn't
/// have (31.02, month 13, etc).
pub fn date(day: u32, month: u32, year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(Error::InvalidDate { day, month, year })
}

/// Difference between the two dates' ordinal day-of-year numbers. This ignores
/// the year entirely, so it goes negative (or collapses) once `to` crosses into
/// a later year than `from`.
pub fn day_of_year_delta(from: &NaiveDate, to: &NaiveDate) -> i64 {
    i64::from(to.ordinal()) - i64::from(from.ordinal())
}

/// Number of calendar days from `from` to `to`.
pub fn elapsed_days(from: &NaiveDate, to: &NaiveDate) -> i64 {
    to.signed_duration_since(*from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_dates() {
        assert_eq!(date(5, 5, 2023).unwrap(), epoch());
        assert_eq!(date(29, 2, 2024).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(date(29, 2, 2023), Err(Error::InvalidDate { day: 29, month: 2, year: 2023 }));
        assert_eq!(date(31, 4, 2023), Err(Error::InvalidDate { day: 31, month: 4, year: 2023 }));
        assert_eq!(date(1, 13, 2023), Err(Error::InvalidDate { day: 1, month: 13, year: 2023 }));
        assert_eq!(date(0, 1, 2023), Err(Error::InvalidDate { day: 0, month: 1, year: 2023 }));
    }

    #[test]
    fn day_of_year_delta_ignores_year() {
        let start = epoch();
        assert_eq!(day_of_year_delta(&start, &start), 0);
        assert_eq!(day_of_year_delta(&start, &date(15, 5, 2023).unwrap()), 10);
        assert_eq!(day_of_year_delta(&start, &date(15, 5, 2024).unwrap()), 11);
        assert_eq!(day_of_year_delta(&start, &date(1, 5, 2023).unwrap()), -4);

        let dec31 = date(31, 12, 2023).unwrap();
        let jan2 = date(2, 1, 2024).unwrap();
        assert_eq!(day_of_year_delta(&dec31, &jan2), 2 - 365);
    }

    #[test]
    fn elapsed_days_counts_the_calendar() {
        let start = epoch();
        assert_eq!(elapsed_days(&start, &start), 0);
        assert_eq!(elapsed_days(&start, &date(15, 5, 2023).unwrap()), 10);
        assert_eq!(elapsed_days(&start, &date(5, 5, 2024).unwrap()), 366);
        assert_eq!(elapsed_days(&date(31, 12, 2023).unwrap(), &date(2, 1, 2024).unwrap()), 2);
        assert_eq!(elapsed_days(&start, &date(1, 5, 2023).unwrap()), -4);
    }
}
