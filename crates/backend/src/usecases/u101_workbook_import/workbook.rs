//! Workbook -> raw rows.
//!
//! The first row of every sheet is the header row; each following row becomes
//! a [`RawRow`] keyed by the trimmed header text. Cells are stringified and
//! trimmed here so the rest of the pipeline only ever sees strings. Empty
//! rows are kept: they count toward the sheet total and get skipped later by
//! the blank-name rule, matching what the admin sees in the counts.

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use super::columns::RawRow;
use super::error::ImportError;

/// One sheet's worth of parsed rows, in workbook order.
#[derive(Debug, Clone)]
pub struct SheetRows {
    pub name: String,
    pub rows: Vec<RawRow>,
}

/// Sheets with a leading underscore are reserved for template metadata and
/// never imported.
pub fn is_reserved_sheet(name: &str) -> bool {
    name.starts_with('_')
}

/// Parse an uploaded workbook (`.xlsx`/`.xls`) from its raw bytes.
pub fn read_workbook_bytes(bytes: &[u8]) -> Result<Vec<SheetRows>, ImportError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| ImportError::Workbook(e.to_string()))?;
    read_sheets(&mut workbook)
}

/// Parse a server-side workbook file.
pub fn read_workbook_path(path: &Path) -> Result<Vec<SheetRows>, ImportError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| ImportError::Workbook(e.to_string()))?;
    read_sheets(&mut workbook)
}

fn read_sheets<RS>(workbook: &mut Sheets<RS>) -> Result<Vec<SheetRows>, ImportError>
where
    RS: std::io::Read + std::io::Seek,
{
    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ImportError::Workbook(format!("sheet '{}': {}", name, e)))?;
        sheets.push(SheetRows {
            rows: range_to_rows(&range),
            name,
        });
    }
    Ok(sheets)
}

fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut raw = RawRow::new();
        for (i, cell) in row.iter().enumerate() {
            let header = match headers.get(i) {
                Some(h) if !h.is_empty() => h,
                _ => continue,
            };
            let value = cell_to_string(cell);
            if !value.is_empty() {
                raw.insert(header.clone(), value);
            }
        }
        rows.push(raw);
    }
    rows
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        // Display of Float renders integral values without a trailing ".0",
        // which is what the templates expect for codes and counts.
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_sheet_predicate() {
        assert!(is_reserved_sheet("_Metadata"));
        assert!(is_reserved_sheet("_lookup"));
        assert!(!is_reserved_sheet("Igneous Rocks"));
        assert!(!is_reserved_sheet("Rocks_2023"));
    }

    #[test]
    fn test_cell_to_string_numbers() {
        assert_eq!(cell_to_string(&Data::Float(7.0)), "7");
        assert_eq!(cell_to_string(&Data::Float(125.6072)), "125.6072");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("  Granite ".into())), "Granite");
    }

    #[test]
    fn test_range_to_rows_keys_by_trimmed_header() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String(" Rock Name ".into()));
        range.set_value((0, 1), Data::String("Hardness".into()));
        range.set_value((0, 2), Data::String("".into()));
        range.set_value((1, 0), Data::String("Granite".into()));
        range.set_value((1, 1), Data::Float(6.0));
        range.set_value((1, 2), Data::String("ignored".into()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Rock Name").map(String::as_str), Some("Granite"));
        assert_eq!(rows[0].get("Hardness").map(String::as_str), Some("6"));
        // Blank header column contributes nothing
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_range_to_rows_keeps_empty_rows() {
        let mut range = Range::new((0, 0), (2, 0));
        range.set_value((0, 0), Data::String("Name".into()));
        range.set_value((1, 0), Data::Empty);
        range.set_value((2, 0), Data::String("Basalt".into()));

        let rows = range_to_rows(&range);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1].get("Name").map(String::as_str), Some("Basalt"));
    }
}
