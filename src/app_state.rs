//! Implements a struct that holds the shared state of the server.

use std::sync::{Arc, Mutex};

use time::Date;

use crate::{
    Error,
    picker::{PresetCatalog, RangeState},
    timezone::{get_local_offset, today_in},
};

/// The state shared across the server's routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The date the server started, in the configured local timezone.
    ///
    /// Resolved exactly once so the preset catalog and the initial range
    /// selection agree on the same anchor date. A server left running past
    /// midnight keeps the presets it started with.
    pub today: Date,

    /// The preset catalog anchored to [AppState::today].
    pub catalog: PresetCatalog,

    /// The picker state shared across requests.
    pub range_state: Arc<Mutex<RangeState>>,
}

impl AppState {
    /// Create a new [AppState] anchored to the current date in
    /// `local_timezone`, which should be a valid, canonical timezone name,
    /// e.g. "Asia/Manila".
    ///
    /// # Errors
    /// Returns an error if the timezone name is not recognised.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        let offset = get_local_offset(local_timezone)
            .ok_or_else(|| Error::InvalidTimezone(local_timezone.to_owned()))?;

        Ok(Self::anchored_to(today_in(offset)))
    }

    /// Create a new [AppState] anchored to a specific date.
    ///
    /// The initial range selection is derived from the catalog's
    /// "Last 7 Days" entry rather than restated.
    pub fn anchored_to(today: Date) -> Self {
        let catalog = PresetCatalog::new(today);
        let range_state = RangeState::new(&catalog);

        Self {
            today,
            catalog,
            range_state: Arc::new(Mutex::new(range_state)),
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use time::{Date, Month};

    use crate::{Error, picker::Preset};

    use super::AppState;

    #[test]
    fn initial_selection_is_derived_from_the_catalog() {
        let today = Date::from_calendar_date(2024, Month::July, 18).unwrap();
        let state = AppState::anchored_to(today);

        let range_state = state.range_state.lock().unwrap();

        assert_eq!(
            range_state.active_range(),
            state.catalog.range(Preset::Last7Days)
        );
    }

    #[test]
    fn rejects_an_unknown_timezone() {
        let result = AppState::new("Not/AZone");

        assert_eq!(result.unwrap_err(), Error::InvalidTimezone("Not/AZone".to_owned()));
    }

    #[test]
    fn accepts_a_canonical_timezone() {
        assert!(AppState::new("Etc/UTC").is_ok());
    }
}
