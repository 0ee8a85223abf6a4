//! Dashboard module
//!
//! Provides the single-page spend overview: the date range picker, a
//! spend-over-time chart, and a tabular breakdown.

mod charts;
mod handlers;
mod records;
mod tables;

pub use handlers::get_dashboard_page;
pub use records::{DisplayRow, SPEND_RECORDS, SpendRecord, display_rows};
