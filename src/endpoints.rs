//! The API endpoint URIs.

/// The root route which redirects to the dashboard page.
pub const ROOT: &str = "/";
/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The route to show or hide the date range picker overlay.
pub const PICKER_TOGGLE: &str = "/api/picker/toggle";
/// The route to apply a named date range preset.
pub const PICKER_PRESET: &str = "/api/picker/preset";
/// The route to apply a custom date range from the calendar inputs.
pub const PICKER_RANGE: &str = "/api/picker/range";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);

        assert_endpoint_is_valid_uri(endpoints::PICKER_TOGGLE);
        assert_endpoint_is_valid_uri(endpoints::PICKER_PRESET);
        assert_endpoint_is_valid_uri(endpoints::PICKER_RANGE);
    }
}
