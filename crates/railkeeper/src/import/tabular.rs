//! Tabular file parsing for spreadsheet import.
//!
//! Accepts raw bytes of an uploaded file and extracts the first sheet's (or
//! the whole delimited file's) rows as ordered header→value pairs. Two
//! formats are supported: XLSX workbooks and delimited text (CSV). Empty
//! cells default to empty text.

use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::{Error, Result};

/// One parsed row: `(header, cell value)` pairs in column order.
///
/// Column order is preserved because the importer's fallback rule (an
/// unmatched column feeds the train number when it is still unset) is
/// order-sensitive.
pub type Row = Vec<(String, String)>;

/// ZIP local-file-header magic; XLSX workbooks are ZIP containers.
const XLSX_MAGIC: &[u8] = b"PK\x03\x04";

/// Parse raw file bytes into rows, sniffing the format.
///
/// # Errors
///
/// Returns [`Error::ImportUnreadable`] if the bytes cannot be parsed as
/// either supported tabular format.
pub fn parse(bytes: &[u8]) -> Result<Vec<Row>> {
    if bytes.starts_with(XLSX_MAGIC) {
        parse_xlsx(bytes)
    } else {
        parse_csv(bytes)
    }
}

/// Parse the first worksheet of an XLSX workbook.
fn parse_xlsx(bytes: &[u8]) -> Result<Vec<Row>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| Error::import_unreadable(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(Error::import_unreadable(e.to_string())),
        None => return Ok(Vec::new()),
    };

    let mut sheet_rows = range.rows();
    let Some(header_cells) = sheet_rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_cells.iter().map(ToString::to_string).collect();

    let rows = sheet_rows
        .map(|cells| {
            headers
                .iter()
                .cloned()
                .zip(cells.iter().map(ToString::to_string))
                .collect()
        })
        .collect();
    Ok(rows)
}

/// Parse delimited text; the first line is the header row.
fn parse_csv(bytes: &[u8]) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| Error::import_unreadable(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| Error::import_unreadable(e.to_string()))?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                (
                    header.to_string(),
                    record.get(i).unwrap_or_default().to_string(),
                )
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}
