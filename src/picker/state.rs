//! The single source of truth for the active date range and the overlay
//! visibility flag.

use crate::picker::presets::{DateRange, Preset, PresetCatalog};

/// The picker state: the currently selected range and whether the overlay
/// is open.
///
/// Both fields are only ever replaced through the operations below, each of
/// which is a synchronous, atomic replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    active: DateRange,
    overlay_open: bool,
}

impl RangeState {
    /// The initial state: the "Last 7 Days" preset with the overlay closed.
    ///
    /// The range is taken from `catalog` rather than restated, so the
    /// initial selection and the preset list cannot drift apart.
    pub fn new(catalog: &PresetCatalog) -> Self {
        Self {
            active: catalog.range(Preset::Last7Days),
            overlay_open: false,
        }
    }

    /// The currently selected range.
    pub fn active_range(&self) -> DateRange {
        self.active
    }

    /// Whether the picker overlay is visible.
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Show the picker overlay if it is hidden, or hide it if it is shown.
    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    /// Replace the active range with a range chosen on the calendar inputs.
    ///
    /// The overlay stays open so the user can keep adjusting the start and
    /// end dates across separate interactions. The calendar inputs
    /// guarantee `start <= end` is not violated by a complete selection;
    /// the range is not revalidated here.
    pub fn apply_custom_range(&mut self, range: DateRange) {
        self.active = range;
    }

    /// Replace the active range with a preset's range and close the overlay.
    ///
    /// Unlike adjusting the calendar inputs, picking a preset is a
    /// complete, confirmed selection.
    pub fn apply_preset(&mut self, preset: Preset, catalog: &PresetCatalog) {
        self.active = catalog.range(preset);
        self.overlay_open = false;
    }
}
