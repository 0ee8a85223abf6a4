//! Table view for the spend breakdown.

use maud::{Markup, html};

use crate::{
    dashboard::records::DisplayRow,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

/// Renders the spend table: one row per record, with the synthetic
/// impressions and clicks columns.
///
/// Currency formatting is applied here at render time; the rows themselves
/// carry the raw spend values.
pub(super) fn spend_table(rows: &[DisplayRow]) -> Markup {
    html! {
        div class="w-full" {
            h3 class="text-xl font-semibold mb-4" { "Ad Data Table" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Spend" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Impressions" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Clicks" }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr class=(TABLE_ROW_STYLE) {
                                td class=(TABLE_CELL_STYLE) { (row.date) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(row.spend)) }
                                td class=(TABLE_CELL_STYLE) { (row.impressions) }
                                td class=(TABLE_CELL_STYLE) { (row.clicks) }
                            }
                        }
                    }
                }
            }
        }
    }
}
