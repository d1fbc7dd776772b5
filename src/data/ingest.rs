use crate::data::loader::{DecodedTable, Row};
use crate::error::IngestError;
use crate::state::series::Series;

/// Which headers hold the time and amplitude values.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec<'a> {
    pub time: &'a str,
    pub amplitude: &'a str,
}

/// A compacted series plus the number of rows the filter rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub series: Series,
    pub dropped_rows: usize,
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the header matching `target`, ignoring case and all whitespace.
pub fn find_column<'h>(headers: &'h [String], target: &str) -> Option<&'h str> {
    let wanted = normalize(target);
    headers
        .iter()
        .find(|h| normalize(h) == wanted)
        .map(String::as_str)
}

fn numeric_cell(row: &Row, key: &str) -> Option<f64> {
    row.get(key)?
        .as_ref()?
        .as_number()
        .filter(|v| v.is_finite())
}

/// Validate decoded rows and compact them into a [`Series`].
///
/// Rows whose time or amplitude cell is missing, non-numeric or NaN are
/// dropped. Infinite values (e.g. `1e999`) are dropped as well.
/// Order is preserved and nothing is sorted.
pub fn ingest(table: &DecodedTable, columns: ColumnSpec<'_>) -> Result<Ingested, IngestError> {
    let time_key = find_column(&table.headers, columns.time);
    let amp_key = find_column(&table.headers, columns.amplitude);

    let (time_key, amp_key) = match (time_key, amp_key) {
        (Some(t), Some(a)) if table.headers.len() >= 2 => (t, a),
        (t, _) => {
            let expected = if t.is_none() { columns.time } else { columns.amplitude };
            return Err(IngestError::MissingColumn {
                expected: expected.to_string(),
                found: table.headers.clone(),
            });
        }
    };

    let mut time = Vec::with_capacity(table.rows.len());
    let mut amplitude = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        if let (Some(t), Some(a)) = (numeric_cell(row, time_key), numeric_cell(row, amp_key)) {
            time.push(t);
            amplitude.push(a);
        }
    }

    if time.is_empty() {
        return Err(IngestError::EmptySeries);
    }

    time.shrink_to_fit();
    amplitude.shrink_to_fit();

    let dropped_rows = table.rows.len() - time.len();
    if dropped_rows > 0 {
        tracing::debug!("Dropped {dropped_rows} invalid rows during ingestion");
    }

    Ok(Ingested {
        series: Series::new(time, amplitude),
        dropped_rows,
    })
}
