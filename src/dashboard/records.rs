//! The spend series shown on the dashboard and the table row presenter.

/// A single day's ad spend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendRecord {
    /// Short date label, e.g. "Jul 12".
    pub date: &'static str,
    /// Ad spend for the day in pesos.
    pub spend: f64,
}

/// A table row derived from a [SpendRecord] and its position in the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRow {
    /// Short date label, copied from the record.
    pub date: &'static str,
    /// Ad spend for the day in pesos, copied from the record.
    pub spend: f64,
    /// Synthetic impression count derived from the row's position.
    pub impressions: u32,
    /// Synthetic click count derived from the row's position.
    pub clicks: u32,
}

/// The fixed spend series shown on the dashboard.
///
/// The chart and table always show this series in full, regardless of the
/// selected date range. A data layer that filters by range is out of scope,
/// so the decoupling is intentional.
pub const SPEND_RECORDS: [SpendRecord; 7] = [
    SpendRecord {
        date: "Jul 12",
        spend: 120.0,
    },
    SpendRecord {
        date: "Jul 13",
        spend: 98.0,
    },
    SpendRecord {
        date: "Jul 14",
        spend: 140.0,
    },
    SpendRecord {
        date: "Jul 15",
        spend: 130.0,
    },
    SpendRecord {
        date: "Jul 16",
        spend: 110.0,
    },
    SpendRecord {
        date: "Jul 17",
        spend: 160.0,
    },
    SpendRecord {
        date: "Jul 18",
        spend: 150.0,
    },
];

/// Derives display rows from `records`, preserving the input order.
///
/// Impressions and clicks are synthetic metrics computed from each record's
/// zero-based position: `1000 + 50 * i` impressions and `200 + 10 * i`
/// clicks. Rows are recomputed on every render, never stored.
pub fn display_rows(records: &[SpendRecord]) -> Vec<DisplayRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| DisplayRow {
            date: record.date,
            spend: record.spend,
            impressions: 1000 + 50 * index as u32,
            clicks: 200 + 10 * index as u32,
        })
        .collect()
}
