use super::normalizer::{clean_cell, normalize_label};
use std::io::Read;

/// One uploaded data line keyed by its (normalized) header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRow {
    /// 1-based position among the data lines.
    pub(crate) index: usize,
    pub(crate) cells: Vec<(String, String)>,
}

#[derive(Debug)]
pub(crate) struct ParsedTable {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<RawRow>,
    /// Data lines present in the upload, including those past the cap.
    pub(crate) total_rows: usize,
}

/// Read a header line plus at most `max_rows` data lines. Returns `None` when the
/// upload has no header or no data line.
pub(crate) fn parse_table<R: Read>(
    reader: R,
    max_rows: usize,
) -> Result<Option<ParsedTable>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(normalize_label).collect(),
        None => return Ok(None),
    };

    let mut rows = Vec::new();
    let mut total_rows = 0;

    for record in records {
        let record = record?;
        total_rows += 1;
        if rows.len() >= max_rows {
            continue;
        }

        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(label, value)| (label.clone(), clean_cell(value)))
            .collect();

        rows.push(RawRow {
            index: total_rows,
            cells,
        });
    }

    if total_rows == 0 {
        return Ok(None);
    }

    Ok(Some(ParsedTable {
        headers,
        rows,
        total_rows,
    }))
}
