//! Date range picker module
//!
//! Owns the active reporting range, the named preset catalog, and the
//! overlay used to change the range.

mod handlers;
mod label;
mod presets;
mod state;

pub use handlers::{PickerState, apply_custom_range, apply_preset, picker_view, toggle_overlay};
pub use label::range_label;
pub use presets::{DateRange, Preset, PresetCatalog};
pub use state::RangeState;
