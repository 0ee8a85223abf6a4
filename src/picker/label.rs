//! Formats the active range for the picker trigger button.

use time::{Date, Month};

use crate::picker::presets::DateRange;

/// Renders `range` as a compact label, e.g. "Jul 12 - Jul 18".
///
/// Both ends are formatted independently, so a repeated month is not
/// suppressed.
pub fn range_label(range: DateRange) -> String {
    let start = format_date_label(range.start);
    let end = format_date_label(range.end);

    format!("{start} - {end}")
}

fn format_date_label(date: Date) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

fn month_abbrev(month: Month) -> &'static str {
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
mod range_label_tests {
    use time::{Date, Month};

    use crate::picker::presets::DateRange;

    use super::range_label;

    fn range(start: (i32, Month, u8), end: (i32, Month, u8)) -> DateRange {
        DateRange {
            start: Date::from_calendar_date(start.0, start.1, start.2).unwrap(),
            end: Date::from_calendar_date(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn formats_both_ends_with_month_and_day() {
        let label = range_label(range((2024, Month::July, 12), (2024, Month::July, 18)));

        assert_eq!(label, "Jul 12 - Jul 18");
    }

    #[test]
    fn does_not_suppress_a_repeated_month() {
        let label = range_label(range((2024, Month::July, 1), (2024, Month::July, 1)));

        assert_eq!(label, "Jul 1 - Jul 1");
    }

    #[test]
    fn formats_ranges_spanning_months() {
        let label = range_label(range((2024, Month::June, 19), (2024, Month::July, 18)));

        assert_eq!(label, "Jun 19 - Jul 18");
    }

    #[test]
    fn formatting_is_pure() {
        let range = range((2024, Month::February, 29), (2024, Month::March, 3));

        assert_eq!(range_label(range), range_label(range));
    }
}
