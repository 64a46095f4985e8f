//! Pre-flight validation of task input
//!
//! Pure field checks run before any mutation is attempted. Both rules are
//! evaluated independently so the form can show every problem at once.

use chrono::NaiveDate;

use super::model::DATE_FORMAT;

pub(crate) const TITLE_REQUIRED: &str = "Title is required.";
pub(crate) const DATE_REQUIRED: &str = "Date is required.";
pub(crate) const DATE_INVALID: &str = "Please enter a valid date.";

/// Validate task input; an empty list means valid.
pub fn validate(title: &str, date: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(TITLE_REQUIRED.to_string());
    }

    if date.is_empty() {
        errors.push(DATE_REQUIRED.to_string());
    } else if !is_valid_date(date) {
        errors.push(DATE_INVALID.to_string());
    }

    errors
}

/// A date is valid only if it parses as `YYYY-MM-DD` and re-renders to the
/// identical string, so rolled-over or unpadded inputs are rejected.
fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string() == date)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_returns_no_errors() {
        assert!(validate("Buy milk", "2024-06-01").is_empty());
    }

    #[test]
    fn whitespace_only_title_is_rejected() {
        assert_eq!(validate("   ", "2024-06-01"), vec![TITLE_REQUIRED]);
    }

    #[test]
    fn empty_date_is_reported_as_required() {
        assert_eq!(validate("Buy milk", ""), vec![DATE_REQUIRED]);
    }

    #[test]
    fn overflowed_day_of_month_is_rejected() {
        assert_eq!(validate("Buy milk", "2024-02-30"), vec![DATE_INVALID]);
    }

    #[test]
    fn unpadded_date_is_rejected() {
        // Parses, but does not re-render to the same string.
        assert_eq!(validate("Buy milk", "2024-6-1"), vec![DATE_INVALID]);
    }

    #[test]
    fn non_date_text_is_rejected() {
        assert_eq!(validate("Buy milk", "tomorrow"), vec![DATE_INVALID]);
    }

    #[test]
    fn both_rules_report_together() {
        assert_eq!(
            validate("", "2024-02-30"),
            vec![TITLE_REQUIRED, DATE_INVALID]
        );
    }

    #[test]
    fn leap_day_is_accepted_only_in_leap_years() {
        assert!(validate("t", "2024-02-29").is_empty());
        assert_eq!(validate("t", "2023-02-29"), vec![DATE_INVALID]);
    }
}
