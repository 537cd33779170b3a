use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parses a calendar date from the formats found in the exports
///
/// Accepts DICOM `YYYYMMDD`, ISO `YYYY-MM-DD`, `YYYY/MM/DD`, a trailing time
/// component (`2020-01-11 09:30:00`) and the `.0` suffix left behind when a
/// spreadsheet stored the date as a float. Anything else yields `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let s = s.strip_suffix(".0").unwrap_or(s);
    if s.is_empty() {
        return None;
    }

    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Parses a numeric field, tolerating float renderings of integers
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a non-negative integer field such as Rows or Number of Frames
pub fn parse_count(s: &str) -> Option<u32> {
    parse_number(s)
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v as u32)
}

/// Signed number of days from `from` to `to`
pub fn days_between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<i64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((to - from).num_days()),
        _ => None,
    }
}

/// Age in whole years at `on`, rounding a 365-day year to the nearest integer
pub fn age_in_years(birth: Option<NaiveDate>, on: Option<NaiveDate>) -> Option<i64> {
    days_between(birth, on).map(|days| (days as f64 / 365.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("20200101"), Some(ymd(2020, 1, 1)));
        assert_eq!(parse_date("20200101.0"), Some(ymd(2020, 1, 1)));
        assert_eq!(parse_date("2020-01-11"), Some(ymd(2020, 1, 11)));
        assert_eq!(parse_date("2020/01/11"), Some(ymd(2020, 1, 11)));
        assert_eq!(parse_date("2020-01-11 09:30:00"), Some(ymd(2020, 1, 11)));
        assert_eq!(parse_date(" 2020-01-11T09:30:00 "), Some(ymd(2020, 1, 11)));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("nan"), None);
        assert_eq!(parse_date("20201340"), None);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_number("1.5"), Some(1.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_count("3328.0"), Some(3328));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("abc"), None);
    }

    #[test]
    fn test_days_between_is_signed() {
        let study = Some(ymd(2020, 1, 1));
        assert_eq!(days_between(study, Some(ymd(2020, 1, 11))), Some(10));
        assert_eq!(days_between(study, Some(ymd(2019, 12, 31))), Some(-1));
        assert_eq!(days_between(study, None), None);
    }

    #[test]
    fn test_age_in_years() {
        assert_eq!(
            age_in_years(Some(ymd(1970, 1, 1)), Some(ymd(2020, 1, 1))),
            Some(50)
        );
        assert_eq!(age_in_years(None, Some(ymd(2020, 1, 1))), None);
    }
}
