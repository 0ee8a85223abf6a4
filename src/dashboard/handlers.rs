//! Dashboard HTTP handlers and view rendering.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    dashboard::{
        charts::{DashboardChart, charts_script, charts_view, spend_chart},
        records::{SPEND_RECORDS, display_rows},
        tables::spend_table,
    },
    html::{HeadElement, base},
    picker::{PickerState, picker_view},
};

/// Display the dashboard: the date range picker, the spend chart, and the
/// spend table.
pub async fn get_dashboard_page(State(state): State<PickerState>) -> Result<Response, Error> {
    let range_state = state.lock_range_state()?;

    let picker = picker_view(&range_state, &state.catalog);

    Ok(dashboard_view(picker).into_response())
}

/// Renders the dashboard page around the given picker fragment.
///
/// The chart and table always show the full spend series, independent of
/// the selected range.
fn dashboard_view(picker: Markup) -> Markup {
    let rows = display_rows(&SPEND_RECORDS);
    let charts = [DashboardChart {
        id: "spend-chart",
        options: spend_chart(&SPEND_RECORDS).to_string(),
    }];

    let content = html!(
        div
            class="flex flex-col px-2 py-6 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="text-2xl font-bold mb-4" { "📊 ESCASI Dashboard" }

            div class="mb-6" { (picker) }

            (charts_view(&charts))

            (spend_table(&rows))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
        ),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod dashboard_page_tests {
    use axum::{body::Body, extract::State, http::Response};
    use scraper::{Html, Selector};
    use time::{Date, Month};

    use crate::{AppState, picker::PickerState};

    use super::get_dashboard_page;

    fn get_test_state() -> PickerState {
        let app_state =
            AppState::anchored_to(Date::from_calendar_date(2024, Month::July, 18).unwrap());

        PickerState {
            catalog: app_state.catalog,
            range_state: app_state.range_state,
        }
    }

    #[tokio::test]
    async fn dashboard_shows_picker_chart_and_table() {
        let response = get_dashboard_page(State(get_test_state())).await.unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        assert_element_exists(&html, "#picker");
        assert_element_exists(&html, "#spend-chart");
        assert_element_exists(&html, "table");
    }

    #[tokio::test]
    async fn trigger_shows_the_initial_range_label() {
        let response = get_dashboard_page(State(get_test_state())).await.unwrap();

        let html = parse_html(response).await;
        let selector = Selector::parse("#picker > button").unwrap();
        let button = html
            .select(&selector)
            .next()
            .expect("Trigger button not found");
        let text: String = button.text().collect();

        assert!(
            text.contains("Jul 12 - Jul 18"),
            "Trigger should show the initial range but got: {text}"
        );
    }

    #[tokio::test]
    async fn overlay_is_hidden_on_first_load() {
        let response = get_dashboard_page(State(get_test_state())).await.unwrap();

        let html = parse_html(response).await;
        let selector = Selector::parse("#picker-overlay").unwrap();

        assert!(
            html.select(&selector).next().is_none(),
            "Overlay should be hidden on first load"
        );
    }

    #[tokio::test]
    async fn table_shows_every_record_with_synthetic_metrics() {
        let response = get_dashboard_page(State(get_test_state())).await.unwrap();

        let html = parse_html(response).await;
        let row_selector = Selector::parse("tbody tr").unwrap();
        let rows: Vec<_> = html.select(&row_selector).collect();

        assert_eq!(rows.len(), 7);

        let last_row_text: String = rows[6].text().collect();
        assert!(last_row_text.contains("Jul 18"));
        assert!(last_row_text.contains("₱150.00"));
        assert!(last_row_text.contains("1300"));
        assert!(last_row_text.contains("260"));
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_element_exists(html: &Html, css_selector: &str) {
        let selector = Selector::parse(css_selector).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "Element '{css_selector}' not found"
        );
    }
}
