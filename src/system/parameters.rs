//! Defines bank-wide parameters, such as the date benefits are counted from
//! and how the days in between are counted.

use chrono::NaiveDate;
use crate::util::time;
use getset::{Getters, Setters};
use serde::{Serialize, Deserialize};

/// How the number of days between the epoch and a report date is worked out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCount {
    /// Subtract the day-of-year numbers of the two dates.
    ///
    /// This is how benefits have always been counted, and it's wrong once the
    /// report date is in a different year than the epoch: 31.12 to 02.01 comes
    /// out as -363 days instead of 2. Kept as the default so existing figures
    /// don't move.
    #[serde(rename = "day_of_year")]
    DayOfYear,
    /// Count actual calendar days.
    #[serde(rename = "elapsed")]
    Elapsed,
}

impl DayCount {
    /// Number of days from `from` to `to` under this convention.
    pub fn days_between(&self, from: &NaiveDate, to: &NaiveDate) -> i64 {
        match self {
            DayCount::DayOfYear => time::day_of_year_delta(from, to),
            DayCount::Elapsed => time::elapsed_days(from, to),
        }
    }
}

impl Default for DayCount {
    fn default() -> Self {
        DayCount::DayOfYear
    }
}

/// Holds bank-wide parameters.
#[derive(Clone, Debug, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[getset(get = "pub", set = "pub")]
#[serde(default)]
pub struct BankParameters {
    /// The date benefit day counts start from. Also the bank's starting
    /// "current date".
    epoch: NaiveDate,
    /// How days between the epoch and a report date are counted
    day_count: DayCount,
    /// Label printed after amounts in reports and receipts
    currency: String,
}

impl BankParameters {
    /// Create a new params object with the defaults
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for BankParameters {
    fn default() -> Self {
        Self {
            epoch: time::epoch(),
            day_count: DayCount::default(),
            currency: "TL".into(),
        }
    }
}
