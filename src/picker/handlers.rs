//! Picker HTTP handlers and view rendering.
//!
//! Every interaction with the picker is an HTMX POST that mutates the
//! shared [RangeState] and responds with the re-rendered picker fragment,
//! which replaces the `#picker` element in place.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    picker::{
        label::range_label,
        presets::{DateRange, Preset, PresetCatalog},
        state::RangeState,
    },
};

/// The state needed by the picker handlers.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// The preset catalog anchored to the server's startup date.
    pub catalog: PresetCatalog,
    /// The picker state shared across requests.
    pub range_state: Arc<Mutex<RangeState>>,
}

impl FromRef<AppState> for PickerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            catalog: state.catalog,
            range_state: state.range_state.clone(),
        }
    }
}

impl PickerState {
    /// Acquire the lock on the shared range state.
    ///
    /// # Errors
    /// Returns an error if the lock has been poisoned.
    pub fn lock_range_state(&self) -> Result<MutexGuard<'_, RangeState>, Error> {
        self.range_state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire picker state lock: {error}"))
            .map_err(|_| Error::StateLockError)
    }
}

/// Form data for applying a named preset.
#[derive(Deserialize)]
pub struct PresetForm {
    /// The preset chosen in the overlay.
    pub preset: Preset,
}

/// Form data for applying a range from the calendar inputs.
#[derive(Deserialize)]
pub struct CustomRangeForm {
    /// The selected start date.
    pub start_date: Date,
    /// The selected end date.
    pub end_date: Date,
}

/// Show or hide the picker overlay and re-render the picker.
pub async fn toggle_overlay(State(state): State<PickerState>) -> Result<Response, Error> {
    let mut range_state = state.lock_range_state()?;

    range_state.toggle_overlay();

    Ok(picker_view(&range_state, &state.catalog).into_response())
}

/// Apply a named preset, close the overlay, and re-render the picker.
pub async fn apply_preset(
    State(state): State<PickerState>,
    Form(form): Form<PresetForm>,
) -> Result<Response, Error> {
    let mut range_state = state.lock_range_state()?;

    range_state.apply_preset(form.preset, &state.catalog);

    Ok(picker_view(&range_state, &state.catalog).into_response())
}

/// Apply a range chosen on the calendar inputs and re-render the picker.
///
/// The overlay is left open so the user can adjust the start and end dates
/// across separate interactions. [RangeState] requires `start <= end` and
/// does not revalidate, so the two dates are ordered here before they are
/// stored: the calendar inputs are constrained against each other, but a
/// request can still arrive with the dates swapped.
pub async fn apply_custom_range(
    State(state): State<PickerState>,
    Form(form): Form<CustomRangeForm>,
) -> Result<Response, Error> {
    let (start, end) = if form.start_date <= form.end_date {
        (form.start_date, form.end_date)
    } else {
        (form.end_date, form.start_date)
    };

    let mut range_state = state.lock_range_state()?;

    range_state.apply_custom_range(DateRange { start, end });

    Ok(picker_view(&range_state, &state.catalog).into_response())
}

/// Renders the picker: the trigger button showing the active range and,
/// when open, the overlay with the preset list and calendar inputs.
pub fn picker_view(range_state: &RangeState, catalog: &PresetCatalog) -> Markup {
    let active = range_state.active_range();

    html!(
        div id="picker" class="relative inline-block text-left"
        {
            button
                hx-post=(endpoints::PICKER_TOGGLE)
                hx-target="#picker"
                hx-swap="outerHTML"
                class="px-4 py-2 text-sm border border-gray-300 rounded
                    hover:bg-gray-100 dark:border-gray-600 dark:hover:bg-gray-700"
            {
                "🗓 " (range_label(active))
            }

            @if range_state.overlay_open() {
                div
                    id="picker-overlay"
                    class="absolute z-20 mt-2 flex gap-4 p-4 bg-white border
                        border-gray-200 rounded shadow-lg dark:bg-gray-800
                        dark:border-gray-700"
                {
                    div class="flex flex-col gap-1"
                    {
                        @for (preset, _range) in catalog.entries() {
                            button
                                name="preset"
                                value=(preset.as_form_value())
                                hx-post=(endpoints::PICKER_PRESET)
                                hx-target="#picker"
                                hx-swap="outerHTML"
                                class="text-left text-sm whitespace-nowrap hover:underline"
                            {
                                (preset.label())
                            }
                        }
                    }

                    form
                        hx-post=(endpoints::PICKER_RANGE)
                        hx-target="#picker"
                        hx-swap="outerHTML"
                        hx-trigger="change"
                        class="flex flex-col gap-2"
                    {
                        label for="start_date" class=(FORM_LABEL_STYLE) { "Start" }
                        input
                            type="date"
                            name="start_date"
                            id="start_date"
                            value=(active.start)
                            max=(active.end)
                            class=(FORM_TEXT_INPUT_STYLE);

                        label for="end_date" class=(FORM_LABEL_STYLE) { "End" }
                        input
                            type="date"
                            name="end_date"
                            id="end_date"
                            value=(active.end)
                            min=(active.start)
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }
            }
        }
    )
}
