use chrono::{Months, NaiveDate};

/// Adds whole calendar months to a date, clamping to the last day of the
/// target month (Jan 31 + 1 month = Feb 28/29).
///
/// Returns `None` if the result falls outside chrono's supported range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}
