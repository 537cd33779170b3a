use crate::types::IntervalCategory;

const DAYS_PER_YEAR: u64 = 365;
const MAX_YEAR_BUCKET: u64 = 5;

/// Buckets a signed day interval into yearly categories
///
/// The sign is ignored: `0` is same-day, `1..=365` is year 1 and so on up
/// to year 5 (`1461..=1825`); anything longer is over five years.
///
/// # Example
///
/// ```
/// use mammolink_core::linkage::categorize_interval;
/// use mammolink_core::IntervalCategory;
///
/// assert_eq!(categorize_interval(0), IntervalCategory::SameDay);
/// assert_eq!(categorize_interval(-200), IntervalCategory::Year(1));
/// assert_eq!(categorize_interval(1826).to_string(), "5_over");
/// ```
pub fn categorize_interval(days: i64) -> IntervalCategory {
    let days = days.unsigned_abs();
    if days == 0 {
        return IntervalCategory::SameDay;
    }

    let year = days.div_ceil(DAYS_PER_YEAR);
    if year > MAX_YEAR_BUCKET {
        IntervalCategory::OverFiveYears
    } else {
        IntervalCategory::Year(year as u8)
    }
}
