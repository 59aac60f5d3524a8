use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CellValue, RawRow};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a course source could not be turned into rows.
///
/// Every variant is recoverable: callers substitute an empty catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Course source not found: {0}")]
    Missing(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to open spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        source: calamine::Error,
    },
    #[error("No worksheet found in {0}")]
    NoWorksheet(PathBuf),
    #[error("Invalid CSV in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("Invalid JSON in {path}: {reason}")]
    Json { path: PathBuf, reason: String },
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// RowReader – lazy sequence of raw rows
// ---------------------------------------------------------------------------

/// Iterator over the untyped rows of one sheet.
///
/// Cells are zipped against the header row on demand; rows with no
/// non-blank cell are skipped.
pub struct RowReader {
    headers: Vec<String>,
    rows: std::vec::IntoIter<Vec<CellValue>>,
}

impl RowReader {
    fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        RowReader {
            headers,
            rows: rows.into_iter(),
        }
    }

    fn from_records(records: Vec<RawRow>) -> Self {
        // JSON records already carry their keys; represent each as one
        // column per key in a shared header.
        let mut headers: Vec<String> = Vec::new();
        for rec in &records {
            for key in rec.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
        let rows = records
            .into_iter()
            .map(|mut rec| {
                headers
                    .iter()
                    .map(|h| rec.remove(h).unwrap_or(CellValue::Null))
                    .collect()
            })
            .collect();
        RowReader::new(headers, rows)
    }

    /// Column headers of the sheet, in sheet order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for RowReader {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        for cells in self.rows.by_ref() {
            let row: RawRow = self
                .headers
                .iter()
                .zip(cells)
                .filter(|(header, cell)| !header.is_empty() && !cell.is_null())
                .map(|(header, cell)| (header.clone(), cell))
                .collect();
            if !row.is_empty() {
                return Some(row);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Open a course source and return its rows.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xlsb` / `.xls` / `.ods` – first sheet, header row first
/// * `.csv`  – header row, one course per record
/// * `.json` – `[{ "Title": "...", "Knowledge zone": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<RowReader, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_spreadsheet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Read the first worksheet of a workbook.  Later sheets are ignored.
fn load_spreadsheet(path: &Path) -> Result<RowReader, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&first)
        .map_err(|source| LoadError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(RowReader::new(Vec::new(), Vec::new()));
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| data_to_cell(cell).to_string())
        .collect();

    let body = rows
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    Ok(RowReader::new(headers, body))
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::String(s) if s.is_empty() => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(d) | Data::DurationIso(d) => CellValue::Date(d.clone()),
        Data::Empty | Data::Error(_) => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Title": "Pricing 101", "Knowledge zone": "Pricing", "Section": "Professional" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<RowReader, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let json_err = |reason: String| LoadError::Json {
        path: path.to_path_buf(),
        reason,
    };

    let root: JsonValue = serde_json::from_str(&text).map_err(|e| json_err(e.to_string()))?;
    let records = root
        .as_array()
        .ok_or_else(|| json_err("expected top-level JSON array".into()))?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| json_err(format!("row {i} is not a JSON object")))?;
        let row: RawRow = obj
            .iter()
            .map(|(key, val)| (key.clone(), json_to_cell(val)))
            .collect();
        rows.push(row);
    }

    Ok(RowReader::from_records(rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) if s.is_empty() => CellValue::Null,
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one course per record.
fn load_csv(path: &Path) -> Result<RowReader, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        rows.push(record.iter().map(text_cell).collect());
    }

    Ok(RowReader::new(headers, rows))
}

/// CSV fields are text as written; only empty fields count as blank.
fn text_cell(s: &str) -> CellValue {
    if s.is_empty() {
        CellValue::Null
    } else {
        CellValue::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("academy.xlsx")).err().unwrap();
        assert!(matches!(err, LoadError::Missing(_)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "academy.txt", "Title\nA\n");
        let err = load_file(&path).err().unwrap();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "txt"));
    }

    #[test]
    fn garbage_spreadsheet_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "academy.xlsx", "definitely not a zip archive");
        let err = load_file(&path).err().unwrap();
        assert!(matches!(err, LoadError::Spreadsheet { .. }));
    }

    #[test]
    fn csv_rows_skip_blank_cells_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "academy.csv",
            "Title,Description,Knowledge zone,Section\nA,About A,Pricing,\n,,,\nB,,AI,Expert\n",
        );
        let rows: Vec<RawRow> = load_file(&path).unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Title"], CellValue::String("A".into()));
        assert!(!rows[0].contains_key("Section"));
        assert!(!rows[1].contains_key("Description"));
    }

    #[test]
    fn csv_fields_stay_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "academy.csv",
            "Title,Knowledge zone,Section\nInfinity,007,1.50\n1e3,+5,true\n",
        );
        let rows: Vec<RawRow> = load_file(&path).unwrap().collect();
        assert_eq!(rows[0]["Title"], CellValue::String("Infinity".into()));
        assert_eq!(rows[0]["Knowledge zone"].to_string(), "007");
        assert_eq!(rows[0]["Section"].to_string(), "1.50");
        assert_eq!(rows[1]["Title"].to_string(), "1e3");
        assert_eq!(rows[1]["Knowledge zone"].to_string(), "+5");
        assert_eq!(rows[1]["Section"], CellValue::String("true".into()));
    }

    #[test]
    fn header_names_are_kept_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "academy.csv", "Title ,Section\nA,Expert\n");
        let reader = load_file(&path).unwrap();
        assert_eq!(reader.headers(), ["Title ", "Section"]);
        let rows: Vec<RawRow> = reader.collect();
        assert!(!rows[0].contains_key("Title"));
        assert_eq!(rows[0]["Title "].to_string(), "A");
    }

    #[test]
    fn json_records_become_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "academy.json",
            r#"[{"Name": "A", "Section": "expert"}, {"Title": "B", "Knowledge zone": null}]"#,
        );
        let rows: Vec<RawRow> = load_file(&path).unwrap().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], CellValue::String("A".into()));
        assert!(!rows[1].contains_key("Knowledge zone"));
    }

    #[test]
    fn json_must_be_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "academy.json", r#"{"Title": "A"}"#);
        assert!(matches!(load_file(&path), Err(LoadError::Json { .. })));
    }

    #[test]
    fn xlsx_reads_only_the_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("academy.xlsx");

        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Title").unwrap();
        first.write_string(0, 1, "Knowledge zone").unwrap();
        first.write_string(1, 0, "Pricing Basics").unwrap();
        first.write_string(1, 1, "Pricing").unwrap();
        first.write_number(2, 0, 42.0).unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Title").unwrap();
        second.write_string(1, 0, "Hidden").unwrap();
        workbook.save(&path).unwrap();

        let reader = load_file(&path).unwrap();
        assert_eq!(reader.headers(), ["Title", "Knowledge zone"]);
        let rows: Vec<RawRow> = reader.collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Title"].to_string(), "Pricing Basics");
        assert_eq!(rows[1]["Title"].to_string(), "42");
        assert!(rows.iter().all(|r| r["Title"].to_string() != "Hidden"));
    }
}
