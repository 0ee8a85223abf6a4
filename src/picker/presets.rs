//! Named date range presets and the catalog that anchors them to a date.

use serde::Deserialize;
use time::{Date, Duration, Month};

/// An inclusive calendar date range.
///
/// Invariant: `start <= end`. Every range produced by [PresetCatalog]
/// upholds this; ranges from the calendar inputs are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day of the range.
    pub start: Date,
    /// The last day of the range.
    pub end: Date,
}

/// The named range shortcuts shown in the picker overlay.
///
/// The set is closed so an unknown preset cannot reach the picker state:
/// form values that do not match a variant are rejected when the request
/// is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Today only.
    Today,
    /// Yesterday only.
    Yesterday,
    /// The six days before today, plus today.
    #[serde(rename = "last-7-days")]
    Last7Days,
    /// The 29 days before today, plus today.
    #[serde(rename = "last-30-days")]
    Last30Days,
    /// The calendar month containing today, in full.
    ThisMonth,
}

impl Preset {
    /// Every preset, in the order they are displayed in the overlay.
    pub const ALL: [Preset; 5] = [
        Preset::Today,
        Preset::Yesterday,
        Preset::Last7Days,
        Preset::Last30Days,
        Preset::ThisMonth,
    ];

    /// The label shown in the picker overlay.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Last7Days => "Last 7 Days",
            Self::Last30Days => "Last 30 Days",
            Self::ThisMonth => "This Month",
        }
    }

    /// The value submitted by the overlay's preset buttons.
    pub fn as_form_value(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Last7Days => "last-7-days",
            Self::Last30Days => "last-30-days",
            Self::ThisMonth => "this-month",
        }
    }
}

/// The fixed mapping from preset to date range, anchored to a single date.
///
/// Built once at startup so every preset (and the initial selection derived
/// from it) agrees on the same "today".
#[derive(Debug, Clone, Copy)]
pub struct PresetCatalog {
    today: Date,
}

impl PresetCatalog {
    /// Create a catalog anchored to `today`.
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    /// The date range for `preset`.
    pub fn range(&self, preset: Preset) -> DateRange {
        let today = self.today;

        match preset {
            Preset::Today => DateRange {
                start: today,
                end: today,
            },
            Preset::Yesterday => {
                let yesterday = today - Duration::days(1);
                DateRange {
                    start: yesterday,
                    end: yesterday,
                }
            }
            Preset::Last7Days => DateRange {
                start: today - Duration::days(6),
                end: today,
            },
            Preset::Last30Days => DateRange {
                start: today - Duration::days(29),
                end: today,
            },
            Preset::ThisMonth => month_bounds(today.year(), today.month()),
        }
    }

    /// Preset/range pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Preset, DateRange)> + '_ {
        Preset::ALL
            .into_iter()
            .map(|preset| (preset, self.range(preset)))
    }
}

fn month_bounds(year: i32, month: Month) -> DateRange {
    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    DateRange { start, end }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod preset_catalog_tests {
    use time::{Date, Month};

    use super::{DateRange, Preset, PresetCatalog};

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    fn test_catalog() -> PresetCatalog {
        PresetCatalog::new(date(2024, Month::July, 18))
    }

    #[test]
    fn presets_are_listed_in_display_order() {
        let labels: Vec<&str> = Preset::ALL.into_iter().map(Preset::label).collect();

        assert_eq!(
            labels,
            vec![
                "Today",
                "Yesterday",
                "Last 7 Days",
                "Last 30 Days",
                "This Month"
            ]
        );
    }

    #[test]
    fn every_preset_range_starts_before_it_ends() {
        let catalog = test_catalog();

        for (preset, range) in catalog.entries() {
            assert!(
                range.start <= range.end,
                "{} should have start <= end but got {} > {}",
                preset.label(),
                range.start,
                range.end
            );
        }
    }

    #[test]
    fn today_and_yesterday_are_single_day_ranges() {
        let catalog = test_catalog();

        assert_eq!(
            catalog.range(Preset::Today),
            DateRange {
                start: date(2024, Month::July, 18),
                end: date(2024, Month::July, 18),
            }
        );
        assert_eq!(
            catalog.range(Preset::Yesterday),
            DateRange {
                start: date(2024, Month::July, 17),
                end: date(2024, Month::July, 17),
            }
        );
    }

    #[test]
    fn last_7_days_spans_a_week_ending_today() {
        let catalog = test_catalog();

        assert_eq!(
            catalog.range(Preset::Last7Days),
            DateRange {
                start: date(2024, Month::July, 12),
                end: date(2024, Month::July, 18),
            }
        );
    }

    #[test]
    fn last_30_days_spans_a_month_ending_today() {
        let catalog = test_catalog();

        assert_eq!(
            catalog.range(Preset::Last30Days),
            DateRange {
                start: date(2024, Month::June, 19),
                end: date(2024, Month::July, 18),
            }
        );
    }

    #[test]
    fn this_month_covers_the_whole_calendar_month() {
        let catalog = test_catalog();

        assert_eq!(
            catalog.range(Preset::ThisMonth),
            DateRange {
                start: date(2024, Month::July, 1),
                end: date(2024, Month::July, 31),
            }
        );
    }

    #[test]
    fn this_month_handles_leap_february() {
        let catalog = PresetCatalog::new(date(2024, Month::February, 10));

        assert_eq!(
            catalog.range(Preset::ThisMonth),
            DateRange {
                start: date(2024, Month::February, 1),
                end: date(2024, Month::February, 29),
            }
        );
    }

    #[test]
    fn presets_cross_month_boundaries() {
        let catalog = PresetCatalog::new(date(2024, Month::March, 3));

        assert_eq!(
            catalog.range(Preset::Last7Days),
            DateRange {
                start: date(2024, Month::February, 26),
                end: date(2024, Month::March, 3),
            }
        );
    }

    #[test]
    fn form_values_round_trip_through_serde() {
        #[derive(serde::Deserialize)]
        struct Query {
            preset: Preset,
        }

        for preset in Preset::ALL {
            let form_data = format!("preset={}", preset.as_form_value());
            let query: Query = serde_html_form::from_str(&form_data).unwrap();

            assert_eq!(query.preset, preset);
        }
    }
}
